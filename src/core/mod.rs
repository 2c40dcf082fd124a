pub mod engine;
pub mod fetcher;

pub use crate::domain::model::{FetchOutcome, RawResponse};
pub use crate::domain::ports::{ConfigProvider, Storage, Transport};
pub use crate::utils::error::Result;
