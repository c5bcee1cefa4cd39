/// Application-level constants
pub const APP_NAME: &str = "notesmith";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base URL of the Hugging Face inference API.
/// The model identifier is appended as the final path segment.
pub const HF_INFERENCE_BASE: &str = "https://api-inference.huggingface.co/models";

/// Environment variable the CLI reads the API token from.
pub const API_TOKEN_ENV: &str = "HF_API_TOKEN";

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{APP_NAME}=info")
}
