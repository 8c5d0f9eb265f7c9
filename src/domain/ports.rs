use async_trait::async_trait;
use std::time::Duration;

/// Source of the natural-language "fun fact" attached to every classification.
///
/// Implementations never fail: a lookup that cannot complete yields a fallback
/// string instead, so a classified number is always returned.
#[async_trait]
pub trait FactProvider: Send + Sync {
    async fn fetch_fact(&self, number: i64) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn fact_api_url(&self) -> &str;
    fn fact_timeout(&self) -> Option<Duration>;
    fn verbose(&self) -> bool;
    fn json_logs(&self) -> bool;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
