//! Line items parsed out of model answers

use std::fmt;

/// A single extracted fact
///
/// Always stored trimmed. Equality is case-sensitive exact match on the
/// trimmed text, so `"Cloud migration"` and `"cloud migration"` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineItem(String);

impl LineItem {
    /// Create a line item, trimming surrounding whitespace
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// Get the item text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the item, returning its text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LineItem {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_line_item_trims() {
        let item = LineItem::new("  Cloud migration \t").unwrap();
        assert_eq!(item.as_str(), "Cloud migration");
    }

    #[test]
    fn test_blank_line_is_rejected() {
        assert!(LineItem::new("").is_none());
        assert!(LineItem::new("   \n").is_none());
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        let a = LineItem::new("Cloud migration").unwrap();
        let b = LineItem::new("cloud migration").unwrap();
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn prop_surrounding_whitespace_does_not_affect_equality(
            body in "[A-Za-z][A-Za-z ]{0,20}[A-Za-z]",
            left in "[ \t]{0,3}",
            right in "[ \t\r]{0,3}",
        ) {
            let padded = format!("{left}{body}{right}");
            prop_assert_eq!(LineItem::new(&padded), LineItem::new(&body));
        }
    }
}
