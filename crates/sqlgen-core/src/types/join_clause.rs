use serde::{Deserialize, Serialize};

use super::ident::Ident;
use super::join_condition::JoinCondition;
use super::join_kind::JoinKind;
use super::table_ref::TableRef;

/// One `from` or `join` clause of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JoinClause {
    pub kind: JoinKind,
    pub table: TableRef,
    /// Entity type named in parentheses after the table, e.g. `(User)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<Ident>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<Ident>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<JoinCondition>,
}

impl JoinClause {
    /// The leading `from` clause of a declaration.
    pub fn from_table(table: TableRef) -> Self {
        Self {
            kind: JoinKind::From,
            table,
            type_hint: None,
            alias: None,
            on: None,
        }
    }

    /// A join clause of the given kind.
    pub fn join(kind: JoinKind, table: TableRef, on: Option<JoinCondition>) -> Self {
        Self {
            kind,
            table,
            type_hint: None,
            alias: None,
            on,
        }
    }

    pub fn with_type_hint(mut self, type_hint: Ident) -> Self {
        self.type_hint = Some(type_hint);
        self
    }

    pub fn with_alias(mut self, alias: Ident) -> Self {
        self.alias = Some(alias);
        self
    }
}
