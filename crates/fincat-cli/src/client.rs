//! HTTP client for the fincat backend

use anyhow::{Context, Result};
use fincat_core::{ChatReply, ChatRequest, Stock};
use std::time::Duration;
use tracing::debug;

/// Thin wrapper around `reqwest::Client` for the two endpoints the terminal
/// frontend consumes.
pub struct FincatClient {
    http: reqwest::Client,
    base_url: String,
}

impl FincatClient {
    /// Create a client for a server base URL like `http://127.0.0.1:8000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the current stock list.
    pub async fn stocks(&self) -> Result<Vec<Stock>> {
        let url = format!("{}/stocks", self.base_url);
        debug!(%url, "fetching stock list");
        let stocks = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?
            .error_for_status()?
            .json()
            .await
            .context("invalid stock list payload")?;
        Ok(stocks)
    }

    /// Send one chat message and return the reply plus the fresh snapshot.
    pub async fn chat(&self, message: &str) -> Result<ChatReply> {
        let url = format!("{}/chat", self.base_url);
        debug!(%url, message, "sending chat message");
        let reply = self
            .http
            .post(&url)
            .json(&ChatRequest {
                message: message.to_string(),
            })
            .send()
            .await
            .with_context(|| format!("POST {url} failed"))?
            .error_for_status()?
            .json()
            .await
            .context("invalid chat payload")?;
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = FincatClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
