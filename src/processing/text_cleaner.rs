//! Text normalization for extracted document text

use regex::Regex;

/// Normalizes raw extracted text into the form the skill extractor scans.
///
/// Steps: drop non-printable characters, drop special characters except
/// `+ # . - /` (skill terms like "c++", "c#", ".net" and "ci/cd" depend on
/// them), lowercase, collapse whitespace.
pub struct TextCleaner {
    non_printable: Regex,
    special_chars: Regex,
    whitespace: Regex,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCleaner {
    pub fn new() -> Self {
        // Constant patterns, validated by tests.
        let non_printable =
            Regex::new(r"[\x00-\x1F\x7F-\x9F]").expect("Invalid non-printable regex");
        let special_chars =
            Regex::new(r"[^a-zA-Z0-9\s+#./-]").expect("Invalid special char regex");
        let whitespace = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            non_printable,
            special_chars,
            whitespace,
        }
    }

    pub fn clean(&self, text: &str) -> String {
        let cleaned = self.non_printable.replace_all(text, " ");
        let cleaned = self.special_chars.replace_all(&cleaned, " ");
        let cleaned = cleaned.to_lowercase();
        self.whitespace.replace_all(&cleaned, " ").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses_whitespace() {
        let cleaner = TextCleaner::new();
        assert_eq!(
            cleaner.clean("  Senior   Python\t Developer \n"),
            "senior python developer"
        );
    }

    #[test]
    fn test_preserves_skill_punctuation() {
        let cleaner = TextCleaner::new();
        assert_eq!(
            cleaner.clean("C++, C#, .NET and CI/CD!"),
            "c++ c# .net and ci/cd"
        );
    }

    #[test]
    fn test_strips_special_characters() {
        let cleaner = TextCleaner::new();
        assert_eq!(cleaner.clean("email@example.com (555) «quoted»"), "email example.com 555 quoted");
    }

    #[test]
    fn test_strips_non_printables() {
        let cleaner = TextCleaner::new();
        assert_eq!(cleaner.clean("python\x00sql\x1Fdocker"), "python sql docker");
    }

    #[test]
    fn test_empty_input() {
        let cleaner = TextCleaner::new();
        assert_eq!(cleaner.clean(""), "");
        assert_eq!(cleaner.clean("   \t\n  "), "");
    }
}
