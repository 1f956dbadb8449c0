//! Absolute-language check
//!
//! Plain case-insensitive substring matching, the same way keyword rules
//! match `any_of` lists. "mustard" contains "must" and counts.

/// Words that signal unwarranted certainty
pub const ABSOLUTE_WORDS: [&str; 7] = [
    "always",
    "never",
    "guarantee",
    "guaranteed",
    "definitely",
    "certainly",
    "must",
];

/// True if the text contains any absolute word
pub fn has_absolute_language(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    ABSOLUTE_WORDS.iter().any(|w| text_lower.contains(w))
}

/// The absolute words found in the text, in list order
pub fn find_absolute_terms(text: &str) -> Vec<&'static str> {
    let text_lower = text.to_lowercase();
    ABSOLUTE_WORDS
        .iter()
        .copied()
        .filter(|w| text_lower.contains(w))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_clean() {
        assert!(!has_absolute_language(""));
        assert!(find_absolute_terms("").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        assert!(has_absolute_language("ALWAYS take with food"));
        assert!(has_absolute_language("This will Certainly help"));
        assert!(!has_absolute_language("Usually taken with food"));
    }

    #[test]
    fn test_substring_match() {
        assert!(has_absolute_language("add mustard"));
        assert_eq!(find_absolute_terms("It is guaranteed"), vec!["guarantee", "guaranteed"]);
    }
}
