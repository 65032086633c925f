// core/env-profile/src/literal.rs

use mcs_common::{validate_quoted_literal, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value kept exactly as written, surrounding double quotes included.
///
/// A build tool substitutes the raw text verbatim, so `"test"` becomes the
/// JavaScript string literal `"test"` wherever `process.env.NODE_ENV` appears.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuotedLiteral(String);

impl QuotedLiteral {
    /// Parse raw text that must already carry its quotes.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        validate_quoted_literal(raw)?;
        Ok(Self(raw.to_string()))
    }

    /// Wrap plain text in quotes.
    pub fn quote(text: &str) -> Result<Self, ValidationError> {
        Self::parse(&format!("\"{}\"", text))
    }

    /// Built-in record data, covered by the profile validation tests.
    pub(crate) fn from_static(raw: &'static str) -> Self {
        Self(raw.to_string())
    }

    /// The byte-exact literal, quotes included.
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// The text between the quotes.
    pub fn unquoted(&self) -> &str {
        &self.0[1..self.0.len() - 1]
    }
}

impl fmt::Display for QuotedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for QuotedLiteral {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        validate_quoted_literal(&raw)?;
        Ok(Self(raw))
    }
}

impl From<QuotedLiteral> for String {
    fn from(literal: QuotedLiteral) -> Self {
        literal.0
    }
}

impl PartialEq<str> for QuotedLiteral {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for QuotedLiteral {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_keeps_quotes() {
        let literal = QuotedLiteral::parse("\"test\"").unwrap();
        assert_eq!(literal.raw(), "\"test\"");
        assert_eq!(literal.unquoted(), "test");
        assert_eq!(literal, "\"test\"");
    }

    #[test]
    fn test_quote() {
        let literal = QuotedLiteral::quote("https://testnet.bscscan.com/").unwrap();
        assert_eq!(literal.raw(), "\"https://testnet.bscscan.com/\"");
        assert!(QuotedLiteral::quote("a\"b").is_err());
    }

    #[test]
    fn test_parse_rejects_unquoted() {
        assert!(QuotedLiteral::parse("test").is_err());
        assert!(QuotedLiteral::parse("'test'").is_err());
    }

    #[test]
    fn test_parse_rejects_escaped_closing_quote() {
        assert!(QuotedLiteral::parse(r#""abc\""#).is_err());
        assert!(QuotedLiteral::try_from(r#""abc\""#.to_string()).is_err());
        assert!(QuotedLiteral::quote("https://testnet.bscscan.com/\\").is_err());
        assert!(serde_json::from_str::<QuotedLiteral>(r#""\"abc\\\"""#).is_err());
    }

    #[test]
    fn test_serde_is_the_raw_string() {
        let literal = QuotedLiteral::parse("\"test\"").unwrap();
        let json = serde_json::to_string(&literal).unwrap();
        assert_eq!(json, r#""\"test\"""#);

        let back: QuotedLiteral = serde_json::from_str(&json).unwrap();
        assert_eq!(back, literal);

        assert!(serde_json::from_str::<QuotedLiteral>(r#""test""#).is_err());
    }
}
