use std::borrow::Cow;

use serde::Serialize;
use serde::ser::SerializeStruct;

use crate::error::{QuoteError, Result};

/// Delimiter between a quotation and its attribution.
pub const SEPARATOR: &str = " - ";

/// The built-in quotations. Order is fixed; draws index into it.
pub const QUOTES: [&str; 10] = [
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Life is what happens when you're busy making other plans. - John Lennon",
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
    "It does not matter how slowly you go as long as you do not stop. - Confucius",
    "In the end, it's not the years in your life that count. It's the life in your years. - Abraham Lincoln",
    "The purpose of our lives is to be happy. - Dalai Lama",
    "Get busy living or get busy dying. - Stephen King",
    "You only live once, but if you do it right, once is enough. - Mae West",
    "Many of life's failures are people who did not realize how close they were to success when they gave up. - Thomas A. Edison",
    "If you want to live a happy life, tie it to a goal, not to people or things. - Albert Einstein",
];

/// A single quotation: `"<text> - <author>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quote {
    raw: Cow<'static, str>,
}

impl Quote {
    /// Wrap a literal without validating it.
    pub const fn from_static(raw: &'static str) -> Self {
        Self {
            raw: Cow::Borrowed(raw),
        }
    }

    /// Parse an owned quotation, requiring exactly one separator with
    /// non-blank text on both sides.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if split(&raw).is_none() {
            return Err(QuoteError::Malformed(raw));
        }
        Ok(Self {
            raw: Cow::Owned(raw),
        })
    }

    /// The verbatim quotation, attribution included.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn text(&self) -> Option<&str> {
        split(&self.raw).map(|(text, _)| text)
    }

    pub fn author(&self) -> Option<&str> {
        split(&self.raw).map(|(_, author)| author)
    }
}

fn split(raw: &str) -> Option<(&str, &str)> {
    if raw.matches(SEPARATOR).count() != 1 {
        return None;
    }
    let (text, author) = raw.split_once(SEPARATOR)?;
    if text.trim().is_empty() || author.trim().is_empty() {
        return None;
    }
    Some((text, author))
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Quote {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Quote", 3)?;
        s.serialize_field("quote", self.as_str())?;
        s.serialize_field("text", &self.text())?;
        s.serialize_field("author", &self.author())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_quotes_have_one_separator() {
        for raw in QUOTES {
            assert_eq!(raw.matches(SEPARATOR).count(), 1, "{raw}");
            let q = Quote::from_static(raw);
            assert!(!q.text().unwrap().trim().is_empty());
            assert!(!q.author().unwrap().trim().is_empty());
        }
    }

    #[test]
    fn test_builtin_quotes_are_distinct() {
        let unique: std::collections::HashSet<_> = QUOTES.iter().collect();
        assert_eq!(unique.len(), QUOTES.len());
    }

    #[test]
    fn test_text_and_author() {
        let q = Quote::from_static(QUOTES[6]);
        assert_eq!(q.text(), Some("Get busy living or get busy dying."));
        assert_eq!(q.author(), Some("Stephen King"));
    }

    #[test]
    fn test_author_with_initial() {
        let q = Quote::from_static(QUOTES[8]);
        assert_eq!(q.author(), Some("Thomas A. Edison"));
    }

    #[test]
    fn test_parse_valid() {
        let q = Quote::parse("Less is more. - Mies van der Rohe").unwrap();
        assert_eq!(q.as_str(), "Less is more. - Mies van der Rohe");
        assert_eq!(q.author(), Some("Mies van der Rohe"));
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = Quote::parse("No attribution here").unwrap_err();
        assert!(matches!(err, QuoteError::Malformed(ref s) if s == "No attribution here"));
    }

    #[test]
    fn test_parse_two_separators() {
        assert!(Quote::parse("a - b - c").is_err());
    }

    #[test]
    fn test_parse_blank_sides() {
        assert!(Quote::parse(" - Anonymous").is_err());
        assert!(Quote::parse("Something wise. -  ").is_err());
    }

    #[test]
    fn test_hyphen_without_spaces_is_not_a_separator() {
        let q = Quote::parse("Well-being matters. - Someone").unwrap();
        assert_eq!(q.text(), Some("Well-being matters."));
    }

    #[test]
    fn test_display_is_verbatim() {
        let q = Quote::from_static(QUOTES[0]);
        assert_eq!(q.to_string(), QUOTES[0]);
    }

    #[test]
    fn test_unvalidated_static_has_no_parts() {
        let q = Quote::from_static("just text");
        assert_eq!(q.text(), None);
        assert_eq!(q.author(), None);
    }

    #[test]
    fn test_serialize_fields() {
        let q = Quote::from_static(QUOTES[5]);
        let v = serde_json::to_value(&q).unwrap();
        assert_eq!(v["quote"], QUOTES[5]);
        assert_eq!(v["text"], "The purpose of our lives is to be happy.");
        assert_eq!(v["author"], "Dalai Lama");
    }
}
