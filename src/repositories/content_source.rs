use async_trait::async_trait;
use reqwest::Client;

use crate::errors::{AppError, AppResult};

/// Where raw payload bodies come from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, url: &str) -> AppResult<String>;
}

pub struct HttpContentSource {
    client: Client,
}

impl HttpContentSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch(&self, url: &str) -> AppResult<String> {
        log::debug!("Fetching quiz content from {}", url);
        let resp = self.client.get(url).send().await?;

        if resp.status().is_success() {
            let body = resp.text().await?;
            log::info!("Fetched {} bytes of quiz content", body.len());
            Ok(body)
        } else {
            log::error!("Quiz content request to {} returned {}", url, resp.status());
            Err(AppError::Network(format!(
                "GET {} returned status {}",
                url,
                resp.status()
            )))
        }
    }
}
