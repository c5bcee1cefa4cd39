// Sequences one conversion: sanitize → remote call → validate → result,
// with the deterministic fallback covering every remote-side failure.
// Exactly one pass; the only hard error is a too-short input.

use chrono::Utc;

use super::fallback::synthesize;
use super::hf::HfInferenceClient;
use super::prompt::{build_note_prompt, OUTPUT_MARKER};
use super::sanitize::sanitize;
use super::types::{
    ConversionRequest, ConversionResult, GenerationParameters, InferenceBackend, Provenance,
    SanitizedInput, ValidationOutcome,
};
use super::validate::validate;
use super::ConvertError;

/// Runs the full conversion pipeline against one inference backend.
///
/// Holds no per-conversion state: the model identifier travels in the
/// request, so one converter serves any number of sequential conversions.
pub struct NoteConverter {
    backend: Box<dyn InferenceBackend + Send + Sync>,
}

impl NoteConverter {
    pub fn new(backend: Box<dyn InferenceBackend + Send + Sync>) -> Self {
        Self { backend }
    }

    /// Convenience constructor for the public Hugging Face endpoint.
    pub fn hugging_face(token: &str) -> Self {
        Self::new(Box::new(HfInferenceClient::new(token)))
    }

    /// Convert one request to a structured note.
    ///
    /// Remote failures and rejected output degrade to the fallback
    /// synthesizer and surface as a warning on the result; the only hard
    /// error is input below the minimum length.
    pub fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
        let _span = tracing::info_span!("convert_note", model = %request.model).entered();

        let sanitized = sanitize(&request.raw_text)?;
        if sanitized.truncated {
            tracing::debug!(
                original_len = sanitized.original_len,
                sanitized_len = sanitized.sanitized_len,
                "Input truncated before remote call"
            );
        }

        let prompt = build_note_prompt(&sanitized);
        let params = GenerationParameters::default();

        let raw = match self.backend.generate(&request.model, &prompt, &params) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Remote inference failed, using fallback");
                return Ok(fall_back(&sanitized, remote_warning(&e)));
            }
        };

        match validate(&raw, OUTPUT_MARKER) {
            ValidationOutcome::Accepted(text) => {
                tracing::info!(shape = ?raw.shape, chars = text.chars().count(), "Conversion succeeded");
                Ok(ConversionResult {
                    text,
                    provenance: Provenance::Model,
                    warning: None,
                    created_at: Utc::now(),
                })
            }
            ValidationOutcome::Rejected(reason) => {
                tracing::warn!(reason = %reason, "Generated output rejected, using fallback");
                Ok(fall_back(
                    &sanitized,
                    format!("generated output rejected: {reason}"),
                ))
            }
        }
    }
}

/// Maximum characters of an upstream error body carried into the
/// caller-facing warning. Error pages can be arbitrarily large.
const MAX_WARNING_BODY_CHARS: usize = 200;

/// Format a remote failure as the result warning, bounding the body of
/// `HttpStatus` to a prefix.
fn remote_warning(e: &super::RemoteError) -> String {
    use super::RemoteError;

    let detail = match e {
        RemoteError::HttpStatus { status, body }
            if body.chars().count() > MAX_WARNING_BODY_CHARS =>
        {
            let prefix: String = body.chars().take(MAX_WARNING_BODY_CHARS).collect();
            format!("inference endpoint returned HTTP {status}: {prefix}…")
        }
        other => other.to_string(),
    };
    format!("remote inference failed: {detail}")
}

/// Terminal fallback branch: always yields a result.
fn fall_back(sanitized: &SanitizedInput, warning: String) -> ConversionResult {
    ConversionResult {
        text: synthesize(sanitized),
        provenance: Provenance::Fallback,
        warning: Some(warning),
        created_at: Utc::now(),
    }
}
