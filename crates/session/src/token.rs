//! Bearer credential value

use std::fmt;

/// An authentication credential.
///
/// A `Token` is never empty and never carries surrounding whitespace. The
/// unauthenticated state is modelled as `Option<Token>::None`, so the only way
/// to build one is [`Token::normalize`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Trim `candidate`; blank input yields `None`
    pub fn normalize(candidate: &str) -> Option<Self> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw credential
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Keep credentials out of logs and panic messages.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&"<redacted>").finish()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_absent() {
        for blank in ["", " ", "\t", "\n", "  \r\n  "] {
            assert_eq!(Token::normalize(blank), None, "{blank:?} should be absent");
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let token = Token::normalize("  tok-123  ").unwrap();
        assert_eq!(token.as_str(), "tok-123");
        assert_eq!(token, "tok-123");
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let token = Token::normalize(" a b ").unwrap();
        assert_eq!(token.as_str(), "a b");
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = Token::normalize("secret-value").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret-value"));
        assert_eq!(token.bearer(), "Bearer secret-value");
    }
}
