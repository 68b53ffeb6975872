//! Level-token extraction
//!
//! A line's level is its first whitespace-delimited field with any
//! surrounding `[` / `]` characters removed. Any byte string is accepted,
//! including invalid UTF-8 and the empty string left behind by a bare `[]`.

use bstr::ByteSlice;

/// Extract the level-token from a raw line.
///
/// Returns `None` for blank lines; such lines contribute nothing to the counts.
pub fn extract_level(line: &[u8]) -> Option<&[u8]> {
    let first = line.fields().next()?;
    Some(strip_brackets(first))
}

/// Strip every leading and trailing bracket character from a token.
pub fn strip_brackets(token: &[u8]) -> &[u8] {
    token.trim_with(|c| c == '[' || c == ']')
}

#[cfg(test)]
mod tests {
    use super::*;
    use bstr::B;
    use proptest::prelude::*;

    fn level(line: &str) -> Option<&[u8]> {
        extract_level(line.as_bytes())
    }

    #[test]
    fn test_bracketed_level() {
        assert_eq!(level("[INFO] service started"), Some(B("INFO")));
        assert_eq!(level("[ERROR] c"), Some(B("ERROR")));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(level("   [WARN]   disk low  \t"), Some(B("WARN")));
        assert_eq!(level("\t[DEBUG]"), Some(B("DEBUG")));
    }

    #[test]
    fn test_blank_lines_have_no_level() {
        assert_eq!(level(""), None);
        assert_eq!(level("    "), None);
        assert_eq!(level("\t \u{3000}"), None);
    }

    #[test]
    fn test_unbracketed_token_used_verbatim() {
        assert_eq!(level("NoBrackets here"), Some(B("NoBrackets")));
    }

    #[test]
    fn test_repeated_and_unbalanced_brackets() {
        assert_eq!(level("[[INFO]] x"), Some(B("INFO")));
        assert_eq!(level("[INFO x"), Some(B("INFO")));
        assert_eq!(level("INFO] x"), Some(B("INFO")));
        // Both characters are stripped from both ends
        assert_eq!(level("]INFO[ x"), Some(B("INFO")));
    }

    #[test]
    fn test_inner_brackets_are_kept() {
        assert_eq!(level("[a[b]c] x"), Some(B("a[b]c")));
    }

    #[test]
    fn test_bracket_only_token_yields_empty_level() {
        assert_eq!(level("[] nothing"), Some(B("")));
        assert_eq!(level("[[]]"), Some(B("")));
    }

    #[test]
    fn test_only_first_token_counts() {
        assert_eq!(level("[INFO] [ERROR]"), Some(B("INFO")));
    }

    #[test]
    fn test_invalid_utf8_tokens_stay_distinct() {
        assert_eq!(extract_level(b"[\xff] a"), Some(B(b"\xff")));
        assert_eq!(extract_level(b"[\xfe] b"), Some(B(b"\xfe")));
        assert_eq!(extract_level(b"  [WARN\xc3]\t x"), Some(B(b"WARN\xc3")));
    }

    proptest! {
        #[test]
        fn prop_strip_is_idempotent(token in prop::collection::vec(any::<u8>(), 0..12)) {
            let once = strip_brackets(&token);
            prop_assert_eq!(strip_brackets(once), once);
        }

        #[test]
        fn prop_bracket_free_token_is_unchanged(token in "[a-zA-Z0-9_.-]{1,12}") {
            prop_assert_eq!(strip_brackets(token.as_bytes()), token.as_bytes());
        }

        #[test]
        fn prop_wrapped_level_round_trips(name in "[A-Z]{1,8}", rest in "[ a-z]{0,20}") {
            let line = format!("[{}] {}", name, rest);
            prop_assert_eq!(level(&line), Some(name.as_bytes()));
        }
    }
}
