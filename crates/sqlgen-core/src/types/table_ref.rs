use serde::{Deserialize, Serialize};

use super::sql_name::SqlName;
use super::PLACEHOLDER;

/// A possibly schema-qualified table reference.
///
/// `table == None` is the placeholder: the table is resolved downstream from
/// the entity the declaration is attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SqlName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<SqlName>,
}

impl TableRef {
    /// The placeholder reference: no schema, no table.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// An unqualified table.
    pub fn table(table: SqlName) -> Self {
        Self {
            schema: None,
            table: Some(table),
        }
    }

    /// A `schema.table` reference.
    pub fn qualified(schema: SqlName, table: SqlName) -> Self {
        Self {
            schema: Some(schema),
            table: Some(table),
        }
    }

    /// Returns true if the table was omitted.
    pub fn is_placeholder(&self) -> bool {
        self.table.is_none()
    }

    /// The table name, or `{}` when omitted.
    pub fn table_or_placeholder(&self) -> &str {
        self.table.as_ref().map_or(PLACEHOLDER, SqlName::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_has_no_names() {
        let t = TableRef::placeholder();
        assert!(t.is_placeholder());
        assert!(t.schema.is_none());
        assert_eq!(t.table_or_placeholder(), "{}");
    }

    #[test]
    fn qualified_keeps_both_parts() {
        let t = TableRef::qualified(
            SqlName::new("schema").unwrap(),
            SqlName::new("account").unwrap(),
        );
        assert_eq!(t.schema.as_ref().map(SqlName::as_str), Some("schema"));
        assert_eq!(t.table_or_placeholder(), "account");
    }

    #[test]
    fn serde_skips_absent_parts() {
        let t = TableRef::table(SqlName::new("account").unwrap());
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"table":"account"}"#);
        let back: TableRef = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
        let empty: TableRef = serde_json::from_str("{}").unwrap();
        assert!(empty.is_placeholder());
    }
}
