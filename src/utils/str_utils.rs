pub trait StringExtensions {
    /// Trim surrounding whitespace and reject names that end up empty.
    /// E.g. `"  Travel ".normalized_name() == Some("Travel")`.
    fn normalized_name(&self) -> Option<String>;
}

impl StringExtensions for str {
    fn normalized_name(&self) -> Option<String> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[test]
fn test_normalized_name() {
    assert_eq!("  Travel ".normalized_name(), Some("Travel".to_string()));
    assert_eq!("Travel".normalized_name(), Some("Travel".to_string()));
    assert_eq!("".normalized_name(), None);
    assert_eq!(" \t\n ".normalized_name(), None);
}
