#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

pub const OUTPUT_FILE: &str = "singapore_roads.json";

/// Overpass-QL selecting every road-like `highway` way inside the Singapore area
/// (relation 17140517 + 3600000000), with node skeletons for geometry.
pub const ROAD_QUERY: &str = r#"
    [out:json][timeout:250];
    area(3617140517)->.singapore;
    (
      way[highway~"^(motorway|trunk|primary|secondary|tertiary|residential|unclassified|living_street|pedestrian|service|track)$"](area.singapore);
    );
    out body;
    >;
    out skel qt;
    "#;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "roads-fetch")]
#[command(about = "Download the Singapore road network from the Overpass API")]
pub struct CliConfig {
    #[arg(long, default_value = OVERPASS_URL, help = "Overpass interpreter URL")]
    pub endpoint: String,

    #[arg(long, default_value = OUTPUT_FILE, help = "Where to write the JSON document")]
    pub output: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage around the download")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl Default for CliConfig {
    fn default() -> Self {
        Self {
            endpoint: OVERPASS_URL.to_string(),
            output: OUTPUT_FILE.to_string(),
            verbose: false,
            monitor: false,
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn output_path(&self) -> &str {
        &self.output
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_path("output", &self.output)?;
        Ok(())
    }
}
