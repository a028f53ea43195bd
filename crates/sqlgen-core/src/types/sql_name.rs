use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AstError;

use super::PLACEHOLDER;

/// A schema or table name as stored after unquoting.
///
/// Any text is accepted, including dots and double quotes, except the
/// placeholder `{}`, which means "absent" and is modelled as `None` by the
/// surrounding [`TableRef`](super::TableRef).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SqlName(String);

impl SqlName {
    /// Creates a new `SqlName`, rejecting the reserved placeholder text.
    pub fn new(s: impl Into<String>) -> Result<Self, AstError> {
        let s = s.into();
        if s == PLACEHOLDER {
            return Err(AstError::ReservedPlaceholder);
        }
        Ok(Self(s))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SqlName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SqlName> for String {
    fn from(n: SqlName) -> String {
        n.0
    }
}

impl TryFrom<String> for SqlName {
    type Error = AstError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for SqlName {
    type Error = AstError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for SqlName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_arbitrary_text() {
        for name in ["account", "schema.account", "schema\"account", "", "with space", "{", "{}x"] {
            let n = SqlName::new(name).unwrap();
            assert_eq!(n.as_str(), name);
        }
    }

    #[test]
    fn rejects_placeholder() {
        assert_eq!(SqlName::new("{}"), Err(AstError::ReservedPlaceholder));
    }

    #[test]
    fn serde_rejects_placeholder() {
        assert!(serde_json::from_str::<SqlName>("\"{}\"").is_err());
    }
}
