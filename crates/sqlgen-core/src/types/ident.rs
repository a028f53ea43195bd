use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AstError;

/// Words the DSL reserves. None of them is a valid [`Ident`].
pub const KEYWORDS: &[&str] = &[
    "generate", "from", "join", "full", "left", "right", "inner", "cross", "on", "as",
];

/// Returns true if `s` is one of the reserved [`KEYWORDS`].
pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

/// A validated bare identifier matching `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Used for entity names, option keys and values, type hints, and aliases.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ident(String);

impl Ident {
    /// Creates a new `Ident`, rejecting malformed text and reserved keywords.
    pub fn new(s: impl Into<String>) -> Result<Self, AstError> {
        let s = s.into();
        if !is_identifier(&s) {
            return Err(AstError::InvalidIdent(s));
        }
        if is_keyword(&s) {
            return Err(AstError::ReservedKeyword(s));
        }
        Ok(Self(s))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Ident> for String {
    fn from(n: Ident) -> String {
        n.0
    }
}

impl TryFrom<String> for Ident {
    type Error = AstError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Ident {
    type Error = AstError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
