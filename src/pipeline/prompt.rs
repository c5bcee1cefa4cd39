// Fixed instruction template for the note-structuring request.
// The markers below are load-bearing: the validator splits the raw response
// on OUTPUT_MARKER and strips echoed instruction text around INPUT_MARKER.

use super::types::SanitizedInput;

/// Marker that precedes the user text inside the prompt.
pub const INPUT_MARKER: &str = "Input:";

/// Marker that separates the instruction block from the generated
/// continuation. The validator takes the text after its last occurrence.
pub const OUTPUT_MARKER: &str = "Output:";

/// Static instruction text asking for headings, bullets, and a summary.
const NOTE_INSTRUCTIONS: &str = "\
Convert the following text into well-organized markdown notes.
Use markdown headings (#) to group related points, bullet points (-) for
individual items, and finish with a short summary. Keep the original
meaning; do not invent content that is not in the text.";

/// Build the full prompt for one sanitized input.
pub fn build_note_prompt(input: &SanitizedInput) -> String {
    format!(
        "{NOTE_INSTRUCTIONS}\n\n{INPUT_MARKER}\n{}\n\n{OUTPUT_MARKER}\n",
        input.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitized(text: &str) -> SanitizedInput {
        SanitizedInput {
            text: text.to_string(),
            truncated: false,
            original_len: text.chars().count(),
            sanitized_len: text.chars().count(),
        }
    }

    #[test]
    fn prompt_embeds_the_sanitized_text() {
        let prompt = build_note_prompt(&sanitized("discussed budget and hiring"));
        assert!(prompt.contains("discussed budget and hiring"));
    }

    #[test]
    fn prompt_ends_with_output_marker() {
        let prompt = build_note_prompt(&sanitized("some text"));
        assert!(prompt.trim_end().ends_with(OUTPUT_MARKER));
    }

    #[test]
    fn prompt_carries_both_markers() {
        let prompt = build_note_prompt(&sanitized("some text"));
        assert!(prompt.contains(INPUT_MARKER));
        assert!(prompt.contains(OUTPUT_MARKER));
    }

    #[test]
    fn instructions_ask_for_markdown_structure() {
        assert!(NOTE_INSTRUCTIONS.contains("headings"));
        assert!(NOTE_INSTRUCTIONS.contains("bullet points"));
        assert!(NOTE_INSTRUCTIONS.contains("summary"));
    }
}
