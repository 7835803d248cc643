//! Width-aware text truncation.
//!
//! Generalized over the measuring function so the shrink logic is
//! testable without a font stack: production passes the surface's text
//! measurement, tests pass a character-count stand-in.

/// Fixed three-character ellipsis appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Fit `text` into `max_width`, truncating with an ellipsis if needed.
///
/// Returns the text unchanged when it already fits. Otherwise returns the
/// longest prefix that, with [`ELLIPSIS`] appended, still measures within
/// `max_width`. When not even the ellipsis fits, the ellipsis is returned
/// as-is.
pub fn truncate_to_width<F>(text: &str, max_width: f32, mut measure: F) -> String
where
    F: FnMut(&str) -> f32,
{
    if measure(text) <= max_width {
        return text.to_string();
    }

    let available = max_width - measure(ELLIPSIS);
    if available <= 0.0 {
        return ELLIPSIS.to_string();
    }

    let mut end = text.len();
    while end > 0 && measure(&text[..end]) > available {
        end = text[..end]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }

    format!("{}{}", &text[..end], ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-advance stand-in: every char is 7px wide.
    fn char_width(s: &str) -> f32 {
        s.chars().count() as f32 * 7.0
    }

    #[test]
    fn test_fitting_text_is_unchanged() {
        assert_eq!(truncate_to_width("Zezima", 100.0, char_width), "Zezima");
        assert_eq!(truncate_to_width("", 0.0, char_width), "");
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        // 10 chars fit; 3 are spent on the ellipsis
        let out = truncate_to_width("a long player name", 70.0, char_width);
        assert_eq!(out, "a long ...");
        assert!(char_width(&out) <= 70.0);
    }

    #[test]
    fn test_never_wider_than_max() {
        for max in [0.0, 10.0, 21.0, 35.0, 70.0, 500.0] {
            let out = truncate_to_width("some moderately long text", max, char_width);
            if out != ELLIPSIS {
                assert!(char_width(&out) <= max, "{:?} at {}", out, max);
            }
        }
    }

    #[test]
    fn test_ellipsis_only_when_nothing_fits() {
        // ellipsis alone is 21px
        assert_eq!(truncate_to_width("abcdef", 20.0, char_width), ELLIPSIS);
        assert_eq!(truncate_to_width("abcdef", 0.0, char_width), ELLIPSIS);
    }

    #[test]
    fn test_truncation_is_idempotent() {
        let max = 70.0;
        let once = truncate_to_width("a long player name", max, char_width);
        let twice = truncate_to_width(&once, max, char_width);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_respects_char_boundaries() {
        // multi-byte chars must not be split mid-sequence
        let out = truncate_to_width("Påüléñ the Wise", 49.0, char_width);
        assert_eq!(out, "Påül...");
    }
}
