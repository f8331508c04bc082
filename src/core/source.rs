use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::core::{DataSource, RequestSpec, Result};

/// Fetches request specs over HTTP and decodes the bodies as JSON.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch_json(&self, spec: &RequestSpec) -> Result<Value> {
        tracing::debug!("📡 {}: requesting {}", spec.id, spec.url);
        let response = self.client.get(spec.url.clone()).send().await?;

        tracing::debug!("{}: response status {}", spec.id, response.status());
        // TODO: Reject non-2xx statuses. An error reply with a well-formed
        // JSON body currently decodes like a success.
        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }
}
