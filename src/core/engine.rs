use crate::core::fetcher::RoadFetcher;
use crate::domain::model::FetchOutcome;
use crate::domain::ports::{ConfigProvider, Storage, Transport};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::io::Write;

pub const SUCCESS_MESSAGE: &str = "Successfully downloaded Singapore road data";

pub struct FetchEngine<T: Transport, S: Storage, C: ConfigProvider> {
    fetcher: RoadFetcher<T, S, C>,
    monitor: SystemMonitor,
}

impl<T: Transport, S: Storage, C: ConfigProvider> FetchEngine<T, S, C> {
    pub fn new(fetcher: RoadFetcher<T, S, C>) -> Self {
        Self::new_with_monitoring(fetcher, false)
    }

    pub fn new_with_monitoring(fetcher: RoadFetcher<T, S, C>, monitor_enabled: bool) -> Self {
        Self {
            fetcher,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs the single download and prints the user-facing report to `out`.
    /// An HTTP failure is reported, not returned as an error.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<FetchOutcome> {
        self.monitor.log_stats("Before request");
        let outcome = self.fetcher.fetch().await?;
        self.monitor.log_stats("After request");

        report(&outcome, out)?;
        Ok(outcome)
    }
}

pub fn report<W: Write>(outcome: &FetchOutcome, out: &mut W) -> std::io::Result<()> {
    match outcome {
        FetchOutcome::Saved { path } => {
            tracing::info!("📁 Output saved to: {}", path);
            writeln!(out, "{}", SUCCESS_MESSAGE)?;
        }
        FetchOutcome::HttpFailure { status, body } => {
            writeln!(out, "Error downloading data: {}", status)?;
            writeln!(out, "{}", body)?;
        }
    }
    out.flush()
}
