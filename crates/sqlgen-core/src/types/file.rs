use serde::{Deserialize, Serialize};

use super::declaration::Declaration;

/// One parsed source unit: its declarations in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub declarations: Vec<Declaration>,
}

impl File {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }
}

impl<'a> IntoIterator for &'a File {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TableRef;

    #[test]
    fn default_is_empty() {
        let file = File::default();
        assert!(file.is_empty());
        assert_eq!(file.len(), 0);
    }

    #[test]
    fn iterates_in_order() {
        let file = File::new(vec![
            Declaration::simple(None, TableRef::placeholder()),
            Declaration::simple(None, TableRef::placeholder()),
        ]);
        assert_eq!(file.iter().count(), 2);
        assert_eq!((&file).into_iter().count(), 2);
    }

    #[test]
    fn serde_roundtrip() {
        let file = File::new(vec![Declaration::simple(None, TableRef::placeholder())]);
        let json = serde_json::to_string(&file).unwrap();
        assert_eq!(json, r#"{"declarations":[{"joins":[{"kind":"From","table":{}}]}]}"#);
        let back: File = serde_json::from_str(&json).unwrap();
        assert_eq!(file, back);
    }
}
