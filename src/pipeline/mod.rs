// Resilient text-to-structured-notes conversion pipeline:
// sanitize → prompt → remote call → validate → result, with a deterministic
// fallback synthesizer covering every remote-side failure.

pub mod types;
pub mod sanitize;
pub mod prompt;
pub mod hf;
pub mod validate;
pub mod fallback;
pub mod orchestrator;

pub use types::*;
pub use sanitize::*;
pub use prompt::*;
pub use hf::*;
pub use validate::*;
pub use fallback::*;
pub use orchestrator::*;

use thiserror::Error;

/// Hard errors a conversion surfaces to the caller. Everything else
/// (remote failures, rejected output) degrades to the fallback synthesizer
/// and becomes a warning on the result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("input text too short to convert (< 10 characters)")]
    InputTooShort,
}

/// Failure modes of the single remote inference attempt. Each variant is
/// terminal for the attempt; the pipeline never retries — that decision
/// belongs to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("model is still loading on the inference endpoint")]
    ModelLoading,

    #[error("inference endpoint rejected the API token")]
    InvalidToken,

    #[error("rate limited by the inference endpoint")]
    RateLimited,

    #[error("inference request timed out")]
    Timeout,

    #[error("could not connect to the inference endpoint")]
    ConnectionFailure,

    #[error("inference endpoint returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("unexpected inference response: {0}")]
    Unexpected(String),
}
