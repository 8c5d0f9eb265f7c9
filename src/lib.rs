pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::fact::NumbersApiFactProvider;
pub use adapters::server::{router, serve};
pub use core::classifier::NumberClassifier;
pub use utils::error::{AppError, Result};
