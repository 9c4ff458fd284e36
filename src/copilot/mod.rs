pub mod analysis;
pub mod extraction;
pub mod prompt;

pub use analysis::*;
pub use extraction::*;
pub use prompt::*;

use thiserror::Error;

/// Fixed disclaimer attached to every analysis response.
pub const DISCLAIMER: &str = "Prototype AI - NOT medical advice.";

/// Failures while interpreting the condition-extraction reply. Absorbed
/// into the `Failed` placeholder before reaching the HTTP boundary.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("JSON parsing error: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("extraction reply is not a JSON object")]
    NotAnObject,
}
