use crate::domain::model::RawResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Sends one POST and hands back whatever the server answered, whatever the status.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str, body: &str) -> Result<RawResponse>;
}

pub trait Storage: Send + Sync {
    /// Replaces any existing file at `path`.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
}
