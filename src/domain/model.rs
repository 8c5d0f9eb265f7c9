use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A tag describing a structural property of a number.
///
/// Serialized in lowercase, which is the form clients see in `properties`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Armstrong,
    Even,
    Odd,
}

/// The classification of a single number, built once per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u32,
    pub fun_fact: String,
}

/// Why a raw input could not be classified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("no number was supplied")]
    Missing,

    #[error("input contains only alphabetic characters")]
    Alphabetic,

    #[error("input is not a base-10 integer")]
    Invalid,
}

impl ClassificationError {
    /// The tag reported in the `number` field of the error payload.
    pub fn tag(&self) -> &'static str {
        match self {
            ClassificationError::Missing => "null",
            ClassificationError::Alphabetic => "alphabet",
            ClassificationError::Invalid => "invalid",
        }
    }
}
