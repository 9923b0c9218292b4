//! Strips markdown emphasis and collapses blank-line runs in raw roast text.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern is valid"));
static ITALIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*]+)\*").expect("italic pattern is valid"));
static BLANK_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("blank-run pattern is valid"));

/// Normalizes raw feedback for display and segmentation.
///
/// `\r\n` and lone `\r` become `\n` first. Bold pairs are unwrapped before
/// single-asterisk pairs so that `**x**` is never half-consumed by the italic
/// rule. Each rule is re-applied until it stops matching, which keeps
/// `clean_text` idempotent for interleaved markers like `**a* b*`.
pub fn clean_text(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let text = raw.replace("\r\n", "\n").replace('\r', "\n");
    let text = unwrap_until_stable(text, &BOLD_RE);
    let text = unwrap_until_stable(text, &ITALIC_RE);
    let text = BLANK_RUN_RE.replace_all(&text, "\n\n");

    text.trim().to_string()
}

fn unwrap_until_stable(mut text: String, pattern: &Regex) -> String {
    loop {
        let replaced = match pattern.replace_all(&text, "$1") {
            Cow::Borrowed(_) => None,
            Cow::Owned(next) => Some(next),
        };
        match replaced {
            Some(next) => text = next,
            None => return text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_whitespace_only_input_yields_empty_output() {
        assert_eq!(clean_text("  \n\n\n\t "), "");
    }

    #[test]
    fn test_bold_markers_removed() {
        let cleaned = clean_text("This is **bold** text");
        assert_eq!(cleaned, "This is bold text");
        assert!(!cleaned.contains("**"));
    }

    #[test]
    fn test_italic_markers_removed() {
        assert_eq!(clean_text("An *italic* word"), "An italic word");
    }

    #[test]
    fn test_bold_and_italic_in_same_line() {
        assert_eq!(
            clean_text("**Rating**: a *generous* 4/10"),
            "Rating: a generous 4/10"
        );
    }

    #[test]
    fn test_triple_asterisks_fully_unwrapped() {
        assert_eq!(clean_text("***loud***"), "loud");
    }

    #[test]
    fn test_interleaved_markers_are_idempotent() {
        let once = clean_text("**a* b*");
        assert_eq!(once, "a b");
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn test_unpaired_asterisk_is_kept() {
        assert_eq!(clean_text("5 * 3 is fifteen"), "5 * 3 is fifteen");
    }

    #[test]
    fn test_five_newlines_collapse_to_two() {
        assert_eq!(clean_text("first\n\n\n\n\nsecond"), "first\n\nsecond");
    }

    #[test]
    fn test_crlf_blank_runs_collapse_to_two_newlines() {
        assert_eq!(
            clean_text("First para.\r\n\r\n\r\n\r\nSecond para."),
            "First para.\n\nSecond para."
        );
    }

    #[test]
    fn test_bare_carriage_returns_become_newlines() {
        assert_eq!(clean_text("one\rtwo\r\r\r\rthree"), "one\ntwo\n\nthree");
    }

    #[test]
    fn test_two_newlines_untouched() {
        assert_eq!(clean_text("first\n\nsecond"), "first\n\nsecond");
    }

    #[test]
    fn test_leading_and_trailing_whitespace_trimmed() {
        assert_eq!(clean_text("\n\n  roast  \n\n"), "roast");
    }

    #[test]
    fn test_idempotent_across_line_endings_and_nesting() {
        for raw in [
            "**Rating**\r\n4/10\r\n\r\n\r\n*Tone*\r\nFlat",
            "***a** b*\r\r\r\rc",
            "**a* *b**",
            "* lone bullet\n\n\n\n- dash",
            "\r\n  **x**  \r\n",
        ] {
            let once = clean_text(raw);
            assert_eq!(clean_text(&once), once, "not idempotent for {raw:?}");
            assert!(!once.contains('\r'));
            assert!(!once.contains("\n\n\n"));
        }
    }

    #[test]
    fn test_idempotent_on_realistic_feedback() {
        let raw = "**Overall Impression**\nGreat start.\n\n\n\n*Top 3 Weaknesses:*\n1. Too long\n2. **Vague**\n";
        let once = clean_text(raw);
        assert_eq!(clean_text(&once), once);
        assert!(!once.contains('*'));
        assert!(!once.contains("\n\n\n"));
    }
}
