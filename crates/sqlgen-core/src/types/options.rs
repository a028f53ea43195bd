use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::AstError;

use super::ident::Ident;

/// Declaration options such as `(plural Accounts)`, in source order.
///
/// Keys are not interpreted here; unknown keys are kept as written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(IndexMap<Ident, Ident>);

// Order matters: `(a X b Y)` and `(b Y a X)` print differently.
impl PartialEq for Options {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl Eq for Options {}

impl Options {
    /// Creates an empty option list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an option, rejecting a key that is already present.
    pub fn insert(&mut self, key: Ident, value: Ident) -> Result<(), AstError> {
        if self.0.contains_key(&key) {
            return Err(AstError::DuplicateOption(key.to_string()));
        }
        self.0.insert(key, value);
        Ok(())
    }

    /// Looks up an option value by key.
    pub fn get(&self, key: &str) -> Option<&Ident> {
        self.0
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Ident, &Ident)> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = (&'a Ident, &'a Ident);
    type IntoIter = indexmap::map::Iter<'a, Ident, Ident>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
