pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use adapters::ReqwestTransport;
pub use config::{OUTPUT_FILE, OVERPASS_URL, ROAD_QUERY};
pub use crate::core::{engine::FetchEngine, fetcher::RoadFetcher};
pub use domain::model::FetchOutcome;
pub use utils::error::{FetchError, Result};
