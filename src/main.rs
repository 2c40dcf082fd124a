use clap::Parser;
use roads_fetch::utils::{logger, validation::Validate};
use roads_fetch::{CliConfig, FetchEngine, LocalStorage, ReqwestTransport, RoadFetcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    let storage = LocalStorage::new(".".to_string());
    let fetcher = RoadFetcher::new(ReqwestTransport::new(), storage, config);
    let engine = FetchEngine::new_with_monitoring(fetcher, monitor_enabled);

    let mut stdout = std::io::stdout();
    match engine.run(&mut stdout).await {
        Ok(outcome) => {
            // HTTP 失敗也以 0 結束，只印出狀態碼與回應內容
            tracing::debug!("Outcome: {}", serde_json::to_string(&outcome)?);
        }
        Err(e) => {
            tracing::error!("❌ Download failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
