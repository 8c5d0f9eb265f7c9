use crate::core::{ConfigProvider, FactProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const FACT_UNAVAILABLE: &str = "Could not fetch fun fact";
pub const FACT_UNREADABLE: &str = "Error reading fun fact";

/// Fetches math facts from a numbersapi.com compatible service.
///
/// The body is passed through as-is whatever the status code; only a failed
/// connection or a failed body read fall back to fixed strings.
#[derive(Debug, Clone)]
pub struct NumbersApiFactProvider {
    client: Client,
    base_url: String,
}

impl NumbersApiFactProvider {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.fact_api_url(), config.fact_timeout())
    }

    pub fn fact_url(&self, number: i64) -> String {
        format!("{}/{}/math", self.base_url, number)
    }
}

#[async_trait]
impl FactProvider for NumbersApiFactProvider {
    async fn fetch_fact(&self, number: i64) -> String {
        let url = self.fact_url(number);
        tracing::debug!("Fetching fun fact from: {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Fun fact request for {} failed: {}", number, e);
                return FACT_UNAVAILABLE.to_string();
            }
        };

        tracing::debug!("Fun fact response status: {}", response.status());

        match response.bytes().await {
            Ok(body) => String::from_utf8_lossy(&body).into_owned(),
            Err(e) => {
                tracing::warn!("Reading fun fact for {} failed: {}", number, e);
                FACT_UNREADABLE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_fact_url_strips_trailing_slash() {
        let provider = NumbersApiFactProvider::new("http://numbersapi.com/", None).unwrap();
        assert_eq!(provider.fact_url(42), "http://numbersapi.com/42/math");
        assert_eq!(provider.fact_url(-7), "http://numbersapi.com/-7/math");
    }

    #[tokio::test]
    async fn test_fetch_fact_returns_body_verbatim() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/371/math");
            then.status(200)
                .header("Content-Type", "text/plain")
                .body("371 is a narcissistic number.");
        });

        let provider = NumbersApiFactProvider::new(server.base_url(), None).unwrap();
        let fact = provider.fetch_fact(371).await;

        mock.assert();
        assert_eq!(fact, "371 is a narcissistic number.");
    }

    #[tokio::test]
    async fn test_fetch_fact_passes_error_status_body_through() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/5/math");
            then.status(500).body("upstream exploded");
        });

        let provider = NumbersApiFactProvider::new(server.base_url(), None).unwrap();
        let fact = provider.fetch_fact(5).await;

        mock.assert();
        assert_eq!(fact, "upstream exploded");
    }

    #[tokio::test]
    async fn test_fetch_fact_unreachable_falls_back() {
        // nothing listens on port 1
        let provider = NumbersApiFactProvider::new("http://127.0.0.1:1", None).unwrap();
        assert_eq!(provider.fetch_fact(10).await, FACT_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_fetch_fact_timeout_falls_back() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/8/math");
            then.status(200)
                .delay(Duration::from_secs(3))
                .body("too late");
        });

        let provider =
            NumbersApiFactProvider::new(server.base_url(), Some(Duration::from_secs(1))).unwrap();
        assert_eq!(provider.fetch_fact(8).await, FACT_UNAVAILABLE);
    }
}
