use crate::domain::model::RawResponse;
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// `Transport` over a plain reqwest client. No client-side timeout is set;
/// the query's own `[timeout:250]` bounds the server.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(&self, url: &str, body: &str) -> Result<RawResponse> {
        tracing::debug!("POST {} ({} bytes)", url, body.len());
        let response = self.client.post(url).body(body.to_owned()).send().await?;

        let status = response.status().as_u16();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
