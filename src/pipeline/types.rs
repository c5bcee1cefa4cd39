// Shared data model for the conversion pipeline. Everything here is
// request-scoped: created for one conversion, dropped when it completes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RemoteError;

/// One conversion request: raw text plus the model that should structure it.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub raw_text: String,
    pub model: String,
}

/// Trimmed (and possibly truncated) text ready for the remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedInput {
    pub text: String,
    /// True when the input exceeded the length cap and was cut.
    pub truncated: bool,
    /// Character count of the trimmed input before truncation.
    pub original_len: usize,
    /// Character count of `text`.
    pub sanitized_len: usize,
}

/// Sampling parameters sent with every generation request.
/// Fixed per call; serialized verbatim into the request body.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub repetition_penalty: f32,
    /// When false the endpoint returns only the continuation, not the prompt.
    pub return_full_text: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: 500,
            temperature: 0.7,
            top_p: 0.9,
            repetition_penalty: 1.2,
            return_full_text: false,
        }
    }
}

/// Which of the tolerated response shapes the endpoint answered with.
/// The upstream API is not contractually stable in shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    ListOfObjects,
    SingleObject,
}

/// Opaque generated text plus the shape it was decoded from.
#[derive(Debug, Clone)]
pub struct RawModelOutput {
    pub text: String,
    pub shape: ResponseShape,
}

/// Why the validator refused a generated candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Candidate under 20 characters.
    TooShort,
    /// Candidate contains none of `#`, `*`, `-`.
    LacksStructuralMarkers,
    /// The model echoed the prompt without generating a continuation.
    PromptEcho,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::TooShort => write!(f, "generated text under 20 characters"),
            RejectReason::LacksStructuralMarkers => {
                write!(f, "generated text has no markdown structure")
            }
            RejectReason::PromptEcho => {
                write!(f, "model echoed the prompt without new content")
            }
        }
    }
}

/// Judgement on whether a remote response is usable as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted(String),
    Rejected(RejectReason),
}

/// Where the final text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Model,
    Fallback,
}

/// The one artifact a conversion hands back to the caller.
/// Created once per conversion and immutable thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    pub text: String,
    pub provenance: Provenance,
    /// Non-fatal degradation notice (remote failure or rejected output).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Remote generation abstraction (allows mocking).
pub trait InferenceBackend {
    fn generate(
        &self,
        model: &str,
        prompt: &str,
        params: &GenerationParameters,
    ) -> Result<RawModelOutput, RemoteError>;
}
