// Validate and normalize raw input before anything else runs.
// Trim, enforce the minimum length, cap the maximum length. Nothing else —
// no language detection, no encoding normalization.

use super::types::SanitizedInput;
use super::ConvertError;

/// Minimum trimmed input length (characters). Shorter input is a hard error.
pub const MIN_INPUT_CHARS: usize = 10;

/// Maximum trimmed input length (characters) sent to the remote endpoint.
/// Keeps the call within predictable latency and cost bounds.
pub const MAX_INPUT_CHARS: usize = 1000;

/// Marker appended when the input was truncated.
const TRUNCATION_MARKER: char = '…';

/// Trim the raw text and enforce the length bounds.
///
/// Input below `MIN_INPUT_CHARS` is a hard precondition failure; the
/// orchestrator must not proceed to any other stage.
pub fn sanitize(raw: &str) -> Result<SanitizedInput, ConvertError> {
    let trimmed = raw.trim();
    let original_len = trimmed.chars().count();

    if original_len < MIN_INPUT_CHARS {
        return Err(ConvertError::InputTooShort);
    }

    if original_len > MAX_INPUT_CHARS {
        let mut text: String = trimmed.chars().take(MAX_INPUT_CHARS).collect();
        text.push(TRUNCATION_MARKER);
        let sanitized_len = text.chars().count();
        return Ok(SanitizedInput {
            text,
            truncated: true,
            original_len,
            sanitized_len,
        });
    }

    Ok(SanitizedInput {
        text: trimmed.to_string(),
        truncated: false,
        original_len,
        sanitized_len: original_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_input_under_minimum() {
        assert_eq!(sanitize("short"), Err(ConvertError::InputTooShort));
        assert_eq!(sanitize("123456789"), Err(ConvertError::InputTooShort));
    }

    #[test]
    fn rejects_whitespace_only_input() {
        assert_eq!(sanitize("          "), Err(ConvertError::InputTooShort));
        assert_eq!(sanitize("\n\t  \n"), Err(ConvertError::InputTooShort));
    }

    #[test]
    fn accepts_input_at_exact_minimum() {
        let input = sanitize("1234567890").unwrap();
        assert_eq!(input.text, "1234567890");
        assert!(!input.truncated);
        assert_eq!(input.original_len, 10);
        assert_eq!(input.sanitized_len, 10);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let input = sanitize("  meeting notes from today  \n").unwrap();
        assert_eq!(input.text, "meeting notes from today");
    }

    #[test]
    fn leaves_input_at_cap_untouched() {
        let raw = "a".repeat(MAX_INPUT_CHARS);
        let input = sanitize(&raw).unwrap();
        assert!(!input.truncated);
        assert_eq!(input.sanitized_len, MAX_INPUT_CHARS);
    }

    #[test]
    fn truncates_to_first_thousand_chars_plus_marker() {
        let raw = "b".repeat(MAX_INPUT_CHARS + 500);
        let input = sanitize(&raw).unwrap();
        assert!(input.truncated);
        assert_eq!(input.original_len, MAX_INPUT_CHARS + 500);
        assert_eq!(input.sanitized_len, MAX_INPUT_CHARS + 1);
        assert_eq!(input.text, format!("{}…", "b".repeat(MAX_INPUT_CHARS)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // Multi-byte characters must not be split mid-codepoint.
        let raw = "é".repeat(MAX_INPUT_CHARS + 1);
        let input = sanitize(&raw).unwrap();
        assert!(input.truncated);
        assert_eq!(input.text.chars().count(), MAX_INPUT_CHARS + 1);
        assert!(input.text.ends_with('…'));
    }

    #[test]
    fn no_other_transformation_applied() {
        let raw = "Line one\n\n\nLine    two with   spaces";
        let input = sanitize(raw).unwrap();
        assert_eq!(input.text, raw);
    }
}
