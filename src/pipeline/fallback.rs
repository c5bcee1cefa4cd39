// Deterministic fallback: build a structured note directly from the text,
// no model involved. Used whenever the remote call fails or its output is
// rejected. Same input always produces the same output, and the synthesizer
// never fails to return a string.

use std::panic::{catch_unwind, AssertUnwindSafe};

use super::types::SanitizedInput;

/// Maximum items listed in the Key Points section.
const MAX_KEY_POINTS: usize = 8;

/// Minimum length for a line to qualify as a key point (characters).
const MIN_KEY_POINT_CHARS: usize = 10;

/// Maximum sentences listed when no usable lines exist.
const MAX_SENTENCES: usize = 6;

/// Minimum length for a sentence to qualify (characters).
const MIN_SENTENCE_CHARS: usize = 15;

/// Keywords whose presence triggers the Action Items section.
const ACTION_KEYWORDS: &[&str] = &[
    "need", "should", "must", "todo", "action", "follow up", "complete",
];

/// Build a structured note from the sanitized text without the model.
///
/// A panic in note assembly degrades to the minimal note; the fallback
/// must always return something.
pub fn synthesize(input: &SanitizedInput) -> String {
    catch_unwind(AssertUnwindSafe(|| build_note(&input.text)))
        .unwrap_or_else(|_| minimal_note(&input.text))
}

fn build_note(text: &str) -> String {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let sentences: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let word_count = text.split_whitespace().count();
    let key_point_count = lines.len().min(MAX_KEY_POINTS);

    let mut note = String::new();
    note.push_str("## Summary\n\n");
    note.push_str(&format!(
        "- Sentences: {}\n- Key points: {}\n- Approximate words: {}\n",
        sentences.len(),
        key_point_count,
        word_count
    ));

    note.push_str("\n## Key Points\n\n");
    let key_lines: Vec<&&str> = lines
        .iter()
        .take(MAX_KEY_POINTS)
        .filter(|l| l.chars().count() > MIN_KEY_POINT_CHARS)
        .collect();

    if !key_lines.is_empty() {
        for (i, line) in key_lines.iter().enumerate() {
            note.push_str(&format!("{}. {}\n", i + 1, line));
        }
    } else {
        for sentence in sentences
            .iter()
            .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
            .take(MAX_SENTENCES)
        {
            note.push_str(&format!("- {sentence}\n"));
        }
    }

    // Structural placeholder, not semantic extraction: the presence of an
    // action-like keyword triggers fixed boilerplate bullets.
    let lower = text.to_lowercase();
    if ACTION_KEYWORDS.iter().any(|k| lower.contains(k)) {
        note.push_str("\n## Action Items\n\n");
        note.push_str("- [ ] Review the points above for accuracy\n");
        note.push_str("- [ ] Follow up on open questions\n");
        note.push_str("- [ ] Add detail where items are unclear\n");
    }

    note
}

/// Last-resort note: fixed header plus the verbatim original text.
fn minimal_note(text: &str) -> String {
    format!(
        "## Summary\n\nAutomatic structuring failed; the original text is preserved below.\n\n{text}\n"
    )
}
