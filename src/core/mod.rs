pub mod classifier;
pub mod number;

pub use crate::domain::model::{Classification, ClassificationError, Property};
pub use crate::domain::ports::{ConfigProvider, FactProvider};
pub use crate::utils::error::Result;
