// =============================================================================
// normalize.rs — TEXT DECONTAMINATION
// =============================================================================
//
// Values pulled out of the registry's markup arrive wearing whatever the
// page wrapped them in: stray whitespace, the parentheses of the
// parenthetical name, decorative quotes, and the occasional <b> tag that
// leaked into a capture. strip_spare peels all of that off in a fixed
// order and is applied to every extracted leaf value in the crate.
// =============================================================================

/// Normalize one extracted value.
///
/// Steps, in order:
/// 1. trim surrounding whitespace
/// 2. strip one enclosing `(`/`)` pair when both ends are present
/// 3. strip one enclosing `"` pair, but only when the value holds an even,
///    nonzero number of quote characters. A balanced count means the outer
///    pair really is decoration; an odd count means some quote is embedded
///    and stripping would maul the name.
/// 4. remove literal `<b>`/`</b>` markers
pub fn strip_spare(value: &str) -> String {
    let trimmed = value.trim();
    let unwrapped = strip_enclosing(trimmed, '(', ')');

    let quotes = unwrapped.matches('"').count();
    let unquoted = if quotes != 0 && quotes % 2 == 0 {
        strip_enclosing(unwrapped, '"', '"')
    } else {
        unwrapped
    };

    remove_tags(unquoted, "b")
}

/// Strip one matching pair of enclosing symbols, if both are present.
fn strip_enclosing(value: &str, start: char, end: char) -> &str {
    if value.len() >= 2 && value.starts_with(start) && value.ends_with(end) {
        &value[start.len_utf8()..value.len() - end.len_utf8()]
    } else {
        value
    }
}

/// Remove every literal open and close marker of an HTML tag.
fn remove_tags(value: &str, tag_name: &str) -> String {
    value
        .replace(&format!("<{tag_name}>"), "")
        .replace(&format!("</{tag_name}>"), "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(strip_spare("  Paritetbank \n"), "Paritetbank");
    }

    #[test]
    fn test_strips_enclosing_parentheses() {
        assert_eq!(strip_spare("(OJSC \"Paritetbank\")"), "OJSC \"Paritetbank\"");
    }

    #[test]
    fn test_balanced_enclosing_quotes_are_stripped() {
        assert_eq!(strip_spare("\"Paritetbank\""), "Paritetbank");
    }

    #[test]
    fn test_embedded_balanced_quotes_are_kept() {
        // Even count, but the value does not start and end with a quote.
        assert_eq!(strip_spare("Bank \"X\""), "Bank \"X\"");
    }

    #[test]
    fn test_odd_quote_count_is_left_alone() {
        assert_eq!(strip_spare("Bank \"X"), "Bank \"X");
    }

    #[test]
    fn test_removes_bold_markers() {
        assert_eq!(
            strip_spare("Open Joint-Stock Company <b>\"Paritetbank\"</b>"),
            "Open Joint-Stock Company \"Paritetbank\""
        );
    }

    #[test]
    fn test_unmatched_parenthesis_is_kept() {
        assert_eq!(strip_spare("(partial"), "(partial");
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(strip_spare(""), "");
        assert_eq!(strip_spare("   "), "");
    }

    #[test]
    fn test_normalization_is_idempotent_on_extracted_values() {
        let samples = [
            "  \"Paritetbank\"  ",
            "(OJSC \"Paritetbank\")",
            "Open Joint-Stock Company <b>\"Paritetbank\"</b>",
            "Bank \"X",
            "plain name",
            "",
        ];
        for sample in samples {
            let once = strip_spare(sample);
            assert_eq!(strip_spare(&once), once, "not idempotent for {sample:?}");
        }
    }
}
