use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_provider, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "number-classifier")]
#[command(about = "HTTP service that classifies integers and attaches a fun fact")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "8000")]
    pub port: u16,

    #[arg(long, default_value = "http://numbersapi.com")]
    pub fact_api_url: String,

    #[arg(long, help = "Timeout for fun fact lookups; unset means wait indefinitely")]
    pub fact_timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn fact_api_url(&self) -> &str {
        &self.fact_api_url
    }

    fn fact_timeout(&self) -> Option<Duration> {
        self.fact_timeout_seconds.map(Duration::from_secs)
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
