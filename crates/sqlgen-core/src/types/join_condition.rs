use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AstError;

/// Opaque `on` condition text, kept exactly as written in the source.
///
/// The text is never parsed. It must contain something other than
/// whitespace and must not contain a backtick.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JoinCondition(String);

impl JoinCondition {
    /// Creates a new `JoinCondition` from verbatim text.
    pub fn new(s: impl Into<String>) -> Result<Self, AstError> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(AstError::EmptyJoinCondition);
        }
        if s.contains('`') {
            return Err(AstError::BacktickInJoinCondition(s));
        }
        Ok(Self(s))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JoinCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<JoinCondition> for String {
    fn from(c: JoinCondition) -> String {
        c.0
    }
}

impl TryFrom<String> for JoinCondition {
    type Error = AstError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for JoinCondition {
    type Error = AstError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}
