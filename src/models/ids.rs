//! Strongly-typed identifier for the signed-in user
//!
//! The id comes from whatever session layer the host has; here it only forms
//! part of the storage key, so the wrapper just guards against empty values
//! and characters that would blur the key's `:`-separated structure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of the user whose transactions are read
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Parse a user id, rejecting empty ids and whitespace
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("User id must not be empty".to_string());
        }
        if s.chars().any(char::is_whitespace) {
            return Err(format!("User id must not contain whitespace: '{}'", s));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(UserId::parse(" 1042 ").unwrap().as_str(), "1042");
        assert!(UserId::parse("").is_err());
        assert!(UserId::parse("a b").is_err());
    }

    #[test]
    fn test_serialization() {
        let id = UserId::parse("google-oauth2|123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"google-oauth2|123\"");
    }
}
