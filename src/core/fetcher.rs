use crate::config::ROAD_QUERY;
use crate::domain::model::FetchOutcome;
use crate::domain::ports::{ConfigProvider, Storage, Transport};
use crate::utils::error::Result;

/// Posts the road query once and stores the answer.
pub struct RoadFetcher<T: Transport, S: Storage, C: ConfigProvider> {
    transport: T,
    storage: S,
    config: C,
}

impl<T: Transport, S: Storage, C: ConfigProvider> RoadFetcher<T, S, C> {
    pub fn new(transport: T, storage: S, config: C) -> Self {
        Self {
            transport,
            storage,
            config,
        }
    }

    /// On 200 the body must parse as JSON; it is re-serialized with 2-space
    /// indentation and overwrites the output file. Any other status is
    /// returned as `HttpFailure` and nothing is written.
    pub async fn fetch(&self) -> Result<FetchOutcome> {
        let endpoint = self.config.endpoint();
        tracing::info!("Requesting road network from {}", endpoint);

        let response = self.transport.post(endpoint, ROAD_QUERY).await?;

        if !response.is_ok() {
            tracing::warn!("Overpass API returned status {}", response.status);
            return Ok(FetchOutcome::HttpFailure {
                status: response.status,
                body: response.body,
            });
        }

        // 先完整解析，失敗時不留下任何檔案
        let document: serde_json::Value = serde_json::from_str(&response.body)?;
        if let Some(elements) = document.get("elements").and_then(|v| v.as_array()) {
            tracing::info!("Received {} elements", elements.len());
        }

        let pretty = serde_json::to_string_pretty(&document)?;
        let path = self.config.output_path();
        self.storage.write_file(path, pretty.as_bytes()).await?;

        Ok(FetchOutcome::Saved {
            path: path.to_string(),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::model::RawResponse;
    use crate::utils::error::FetchError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    pub(crate) struct MockTransport {
        status: u16,
        body: String,
        requests: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl MockTransport {
        pub(crate) fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub(crate) async fn requests(&self) -> Vec<(String, String)> {
            self.requests.lock().await.clone()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn post(&self, url: &str, body: &str) -> Result<RawResponse> {
            self.requests
                .lock()
                .await
                .push((url.to_string(), body.to_string()));
            Ok(RawResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    #[derive(Clone)]
    pub(crate) struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        pub(crate) fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        pub(crate) async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    pub(crate) struct MockConfig {
        endpoint: String,
        output_path: String,
    }

    impl MockConfig {
        pub(crate) fn new() -> Self {
            Self {
                endpoint: "http://overpass.test/api/interpreter".to_string(),
                output_path: "singapore_roads.json".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn endpoint(&self) -> &str {
            &self.endpoint
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }
    }

    #[tokio::test]
    async fn test_sends_embedded_query_verbatim() {
        let transport = MockTransport::new(200, r#"{"elements": []}"#);
        let fetcher = RoadFetcher::new(transport.clone(), MockStorage::new(), MockConfig::new());

        fetcher.fetch().await.unwrap();

        let requests = transport.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "http://overpass.test/api/interpreter");
        assert_eq!(requests[0].1.as_bytes(), ROAD_QUERY.as_bytes());
    }

    #[tokio::test]
    async fn test_success_writes_pretty_json() {
        let storage = MockStorage::new();
        let transport = MockTransport::new(200, r#"{"elements": []}"#);
        let fetcher = RoadFetcher::new(transport, storage.clone(), MockConfig::new());

        let outcome = fetcher.fetch().await.unwrap();

        assert_eq!(
            outcome,
            FetchOutcome::Saved {
                path: "singapore_roads.json".to_string()
            }
        );
        let written = storage.get_file("singapore_roads.json").await.unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), "{\n  \"elements\": []\n}");
    }

    #[tokio::test]
    async fn test_success_keeps_key_order() {
        let storage = MockStorage::new();
        let body = r#"{"version":0.6,"generator":"Overpass API","elements":[{"type":"node","id":1,"lat":1.3,"lon":103.8}]}"#;
        let fetcher = RoadFetcher::new(MockTransport::new(200, body), storage.clone(), MockConfig::new());

        fetcher.fetch().await.unwrap();

        let written = String::from_utf8(storage.get_file("singapore_roads.json").await.unwrap()).unwrap();
        let version_at = written.find("\"version\"").unwrap();
        let generator_at = written.find("\"generator\"").unwrap();
        let elements_at = written.find("\"elements\"").unwrap();
        assert!(version_at < generator_at && generator_at < elements_at);
        assert!(written.contains("\n      \"type\": \"node\","));
    }

    #[tokio::test]
    async fn test_server_error_writes_nothing() {
        let storage = MockStorage::new();
        let fetcher = RoadFetcher::new(
            MockTransport::new(500, "server error"),
            storage.clone(),
            MockConfig::new(),
        );

        let outcome = fetcher.fetch().await.unwrap();

        assert_eq!(
            outcome,
            FetchOutcome::HttpFailure {
                status: 500,
                body: "server error".to_string()
            }
        );
        assert!(storage.get_file("singapore_roads.json").await.is_none());
    }

    #[tokio::test]
    async fn test_non_200_success_status_is_a_failure() {
        let storage = MockStorage::new();
        let fetcher = RoadFetcher::new(
            MockTransport::new(204, ""),
            storage.clone(),
            MockConfig::new(),
        );

        let outcome = fetcher.fetch().await.unwrap();

        assert!(!outcome.is_saved());
        assert!(storage.get_file("singapore_roads.json").await.is_none());
    }

    #[tokio::test]
    async fn test_invalid_json_propagates_parse_error() {
        let storage = MockStorage::new();
        let fetcher = RoadFetcher::new(
            MockTransport::new(200, "<html>rate limited</html>"),
            storage.clone(),
            MockConfig::new(),
        );

        let result = fetcher.fetch().await;

        assert!(matches!(result, Err(FetchError::ParseError(_))));
        assert!(storage.get_file("singapore_roads.json").await.is_none());
    }
}
