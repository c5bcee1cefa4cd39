// Hugging Face Inference API client — the single outbound call of a
// conversion. Exactly one attempt per conversion; every transport and
// status outcome maps deterministically to a RemoteError variant.

use serde::{Deserialize, Serialize};

use super::types::{GenerationParameters, InferenceBackend, RawModelOutput, ResponseShape};
use super::RemoteError;
use crate::config;

/// Fixed timeout for the single generation request.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Blocking HTTP client for the Hugging Face text-generation endpoint.
pub struct HfInferenceClient {
    base_url: String,
    token: String,
    client: reqwest::blocking::Client,
}

impl HfInferenceClient {
    /// Create a client for the public inference endpoint.
    pub fn new(token: &str) -> Self {
        Self::with_base_url(config::HF_INFERENCE_BASE, token)
    }

    /// Create a client against a custom endpoint base (used by tests).
    pub fn with_base_url(base_url: &str, token: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
        }
    }
}

/// Request body for the generation endpoint.
#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParameters,
}

#[derive(Deserialize)]
struct Generated {
    generated_text: String,
}

/// The endpoint answers with either a sequence of objects or a single
/// object; the shape is not contractually stable.
#[derive(Deserialize)]
#[serde(untagged)]
enum GenerateResponse {
    Sequence(Vec<Generated>),
    Object(Generated),
}

/// Map a non-success HTTP status to its RemoteError variant.
pub fn classify_status(status: u16, body: String) -> RemoteError {
    match status {
        503 => RemoteError::ModelLoading,
        401 => RemoteError::InvalidToken,
        429 => RemoteError::RateLimited,
        _ => RemoteError::HttpStatus { status, body },
    }
}

/// Map a transport-level failure to its RemoteError variant.
fn classify_transport(e: &reqwest::Error) -> RemoteError {
    if e.is_timeout() {
        RemoteError::Timeout
    } else if e.is_connect() {
        RemoteError::ConnectionFailure
    } else {
        RemoteError::Unexpected(e.to_string())
    }
}

/// Decode a 200 body into the generated text, tolerating both shapes.
/// A sequence yields its first element; anything else is `Unexpected`.
pub fn parse_generation_body(body: &str) -> Result<RawModelOutput, RemoteError> {
    match serde_json::from_str::<GenerateResponse>(body) {
        Ok(GenerateResponse::Sequence(items)) => items
            .into_iter()
            .next()
            .map(|g| RawModelOutput {
                text: g.generated_text,
                shape: ResponseShape::ListOfObjects,
            })
            .ok_or_else(|| RemoteError::Unexpected("empty response sequence".into())),
        Ok(GenerateResponse::Object(g)) => Ok(RawModelOutput {
            text: g.generated_text,
            shape: ResponseShape::SingleObject,
        }),
        Err(e) => Err(RemoteError::Unexpected(format!(
            "unrecognized response shape: {e}"
        ))),
    }
}

impl InferenceBackend for HfInferenceClient {
    fn generate(
        &self,
        model: &str,
        prompt: &str,
        params: &GenerationParameters,
    ) -> Result<RawModelOutput, RemoteError> {
        let url = format!("{}/{}", self.base_url, model);
        let body = GenerateRequest {
            inputs: prompt,
            parameters: params,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .map_err(|e| classify_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(classify_status(status.as_u16(), body));
        }

        let body = response
            .text()
            .map_err(|e| RemoteError::Unexpected(e.to_string()))?;
        parse_generation_body(&body)
    }
}

/// Mock backend for testing — returns a configured response or error.
pub struct MockInferenceClient {
    response: Result<RawModelOutput, RemoteError>,
}

impl MockInferenceClient {
    /// Succeed with the given text, decoded as a single-object response.
    pub fn new(text: &str) -> Self {
        Self {
            response: Ok(RawModelOutput {
                text: text.to_string(),
                shape: ResponseShape::SingleObject,
            }),
        }
    }

    /// Succeed with the given text and response shape.
    pub fn with_shape(text: &str, shape: ResponseShape) -> Self {
        Self {
            response: Ok(RawModelOutput {
                text: text.to_string(),
                shape,
            }),
        }
    }

    /// Fail every call with the given error.
    pub fn failing(error: RemoteError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl InferenceBackend for MockInferenceClient {
    fn generate(
        &self,
        _model: &str,
        _prompt: &str,
        _params: &GenerationParameters,
    ) -> Result<RawModelOutput, RemoteError> {
        self.response.clone()
    }
}
