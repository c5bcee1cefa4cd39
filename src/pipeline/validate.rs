// Judge whether a remote response is usable. Extraction runs on fixed
// delimiter constants from the prompt module; some models echo part of the
// instruction block back, so the candidate is cut down before judging.
// Total: every input, however malformed, maps to a ValidationOutcome.

use super::prompt::INPUT_MARKER;
use super::types::{RawModelOutput, RejectReason, ValidationOutcome};

/// Minimum length for a generated candidate (characters).
pub const MIN_CANDIDATE_CHARS: usize = 20;

/// Characters accepted as minimal evidence of markdown structure.
const STRUCTURAL_MARKERS: [char; 3] = ['#', '*', '-'];

/// Extract the generated candidate from a raw response and judge it.
///
/// The candidate is the substring after the last occurrence of
/// `output_marker` (the whole text when the marker is absent), with any
/// echoed instruction fragment before a trailing `Input:` marker stripped.
pub fn validate(raw: &RawModelOutput, output_marker: &str) -> ValidationOutcome {
    let text = raw.text.as_str();

    let (candidate, saw_output_marker) = match text.rfind(output_marker) {
        Some(pos) => (&text[pos + output_marker.len()..], true),
        None => (text, false),
    };

    let (candidate, stripped_echo) = match candidate.rfind(INPUT_MARKER) {
        Some(pos) => (&candidate[pos + INPUT_MARKER.len()..], true),
        None => (candidate, false),
    };

    let candidate = candidate.trim();

    // Markers were present but nothing followed them: the model replayed
    // the prompt without generating a continuation.
    if candidate.is_empty() && (saw_output_marker || stripped_echo) {
        return ValidationOutcome::Rejected(RejectReason::PromptEcho);
    }

    if candidate.chars().count() < MIN_CANDIDATE_CHARS {
        return ValidationOutcome::Rejected(RejectReason::TooShort);
    }

    if !candidate.contains(STRUCTURAL_MARKERS) {
        return ValidationOutcome::Rejected(RejectReason::LacksStructuralMarkers);
    }

    ValidationOutcome::Accepted(candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::prompt::OUTPUT_MARKER;
    use crate::pipeline::types::ResponseShape;

    fn raw(text: &str) -> RawModelOutput {
        RawModelOutput {
            text: text.to_string(),
            shape: ResponseShape::SingleObject,
        }
    }

    #[test]
    fn accepts_structured_candidate_without_marker() {
        let outcome = validate(&raw("## Plan\n- item one\n- item two"), OUTPUT_MARKER);
        assert_eq!(
            outcome,
            ValidationOutcome::Accepted("## Plan\n- item one\n- item two".into())
        );
    }

    #[test]
    fn extracts_text_after_last_output_marker() {
        let text = "Convert the following.\n\nOutput:\nnope\n\nOutput:\n## Notes\n- real content here";
        let outcome = validate(&raw(text), OUTPUT_MARKER);
        assert_eq!(
            outcome,
            ValidationOutcome::Accepted("## Notes\n- real content here".into())
        );
    }

    #[test]
    fn strips_echoed_instruction_before_input_marker() {
        let text = "Use headings and bullets.\nInput:\n# Meeting\n- echoed point and more text";
        let outcome = validate(&raw(text), OUTPUT_MARKER);
        match outcome {
            ValidationOutcome::Accepted(candidate) => {
                assert!(!candidate.contains("Use headings"));
                assert!(candidate.starts_with("# Meeting"));
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn rejects_short_candidate_regardless_of_content() {
        let outcome = validate(&raw("## ok"), OUTPUT_MARKER);
        assert_eq!(
            outcome,
            ValidationOutcome::Rejected(RejectReason::TooShort)
        );
    }

    #[test]
    fn rejects_unstructured_prose_even_when_long() {
        let text = "this is a long stretch of plain prose with no structure whatsoever in it";
        let outcome = validate(&raw(text), OUTPUT_MARKER);
        assert_eq!(
            outcome,
            ValidationOutcome::Rejected(RejectReason::LacksStructuralMarkers)
        );
    }

    #[test]
    fn rejects_pure_prompt_echo() {
        let text = "Convert the following text.\n\nInput:\nsome text\n\nOutput:\n";
        let outcome = validate(&raw(text), OUTPUT_MARKER);
        assert_eq!(
            outcome,
            ValidationOutcome::Rejected(RejectReason::PromptEcho)
        );
    }

    #[test]
    fn empty_response_without_markers_is_too_short() {
        let outcome = validate(&raw("   "), OUTPUT_MARKER);
        assert_eq!(
            outcome,
            ValidationOutcome::Rejected(RejectReason::TooShort)
        );
    }

    #[test]
    fn accepted_candidate_is_trimmed() {
        let outcome = validate(&raw("  \n* one point\n* another point\n  "), OUTPUT_MARKER);
        assert_eq!(
            outcome,
            ValidationOutcome::Accepted("* one point\n* another point".into())
        );
    }
}
