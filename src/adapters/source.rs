use crate::domain::ports::SourceReader;
use crate::utils::error::{Result, SkillGapError};
use crate::utils::validation::as_http_url;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// 從本地路徑或 http(s) URL 讀取 CSV 文字
#[derive(Debug, Clone)]
pub struct FetchingSource {
    client: Client,
}

impl FetchingSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_timeout(timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self { client })
    }

    async fn fetch_url(&self, source_name: &str, location: &str) -> Result<String> {
        tracing::debug!("Fetching {} data from URL: {}", source_name, location);

        let response = self.client.get(location).send().await.map_err(|e| {
            SkillGapError::SourceUnavailable {
                source_name: source_name.to_string(),
                location: location.to_string(),
                reason: e.to_string(),
            }
        })?;

        tracing::debug!("Response status: {}", response.status());

        if response.status() != StatusCode::OK {
            return Err(SkillGapError::SourceUnavailable {
                source_name: source_name.to_string(),
                location: location.to_string(),
                reason: format!("HTTP status {}", response.status()),
            });
        }

        Ok(response.text().await?)
    }

    async fn read_file(&self, source_name: &str, location: &str) -> Result<String> {
        tracing::debug!("Reading {} data from file: {}", source_name, location);

        tokio::fs::read_to_string(location)
            .await
            .map_err(|e| SkillGapError::SourceUnavailable {
                source_name: source_name.to_string(),
                location: location.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Default for FetchingSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceReader for FetchingSource {
    async fn read_text(&self, source_name: &str, location: &str) -> Result<String> {
        let location = location.trim();
        if location.is_empty() {
            return Err(SkillGapError::MissingSourceError {
                field: source_name.to_string(),
            });
        }

        let text = if as_http_url(location).is_some() {
            self.fetch_url(source_name, location).await?
        } else {
            self.read_file(source_name, location).await?
        };

        tracing::debug!("Read {} bytes of {} data", text.len(), source_name);
        Ok(text)
    }
}
