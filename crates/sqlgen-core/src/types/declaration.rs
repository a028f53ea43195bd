use serde::{Deserialize, Serialize};

use crate::error::AstError;

use super::ident::Ident;
use super::join_clause::JoinClause;
use super::join_kind::JoinKind;
use super::options::Options;
use super::sql_name::SqlName;
use super::table_ref::TableRef;
use super::PLACEHOLDER;

/// One `generate ... from ... [join ...];` statement.
///
/// Deserialization goes through [`Declaration::new`], so the join list rules
/// hold for values read from JSON as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDeclaration")]
pub struct Declaration {
    /// Entity name; `None` is the placeholder, resolved downstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Ident>,
    #[serde(default, skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    /// The leading `from` clause followed by zero or more joins.
    pub joins: Vec<JoinClause>,
}

/// Unvalidated wire form of a [`Declaration`].
#[derive(Deserialize)]
struct RawDeclaration {
    #[serde(default)]
    name: Option<Ident>,
    #[serde(default)]
    options: Options,
    joins: Vec<JoinClause>,
}

impl TryFrom<RawDeclaration> for Declaration {
    type Error = AstError;

    fn try_from(raw: RawDeclaration) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.options, raw.joins)
    }
}

impl Declaration {
    /// Creates a new `Declaration`, validating:
    /// - the first clause is `from` and no other clause is
    /// - `from` and `cross join` clauses have no condition
    /// - every other join kind has a condition
    pub fn new(
        name: Option<Ident>,
        options: Options,
        joins: Vec<JoinClause>,
    ) -> Result<Self, AstError> {
        match joins.first() {
            Some(first) if first.kind == JoinKind::From => {}
            _ => return Err(AstError::MissingFromClause),
        }

        for (i, clause) in joins.iter().enumerate() {
            if i > 0 && clause.kind == JoinKind::From {
                return Err(AstError::MisplacedFromClause);
            }
            match (clause.kind.requires_condition(), clause.on.is_some()) {
                (true, false) => {
                    return Err(AstError::MissingJoinCondition {
                        kind: clause.kind.keyword().to_string(),
                    })
                }
                (false, true) => {
                    return Err(AstError::UnexpectedJoinCondition {
                        kind: clause.kind.keyword().to_string(),
                    })
                }
                _ => {}
            }
        }

        Ok(Self {
            name,
            options,
            joins,
        })
    }

    /// A single-table declaration without options.
    pub fn simple(name: Option<Ident>, table: TableRef) -> Self {
        Self {
            name,
            options: Options::new(),
            joins: vec![JoinClause::from_table(table)],
        }
    }

    /// The entity name, or `{}` when omitted.
    pub fn name_or_placeholder(&self) -> &str {
        self.name.as_ref().map_or(PLACEHOLDER, Ident::as_str)
    }

    /// The leading `from` clause.
    ///
    /// # Panics
    ///
    /// Panics if `joins` is empty, which `Declaration::new` and the parser rule out.
    pub fn from_clause(&self) -> &JoinClause {
        &self.joins[0]
    }

    /// The clauses after `from`.
    pub fn join_clauses(&self) -> &[JoinClause] {
        self.joins.get(1..).unwrap_or(&[])
    }

    /// Returns true if the declaration joins more than one table.
    pub fn is_join(&self) -> bool {
        self.joins.len() > 1
    }

    /// Schema of the `from` table, if qualified.
    pub fn schema_name(&self) -> Option<&SqlName> {
        self.joins.first().and_then(|c| c.table.schema.as_ref())
    }

    /// Name of the `from` table; `None` is the placeholder.
    pub fn table_name(&self) -> Option<&SqlName> {
        self.joins.first().and_then(|c| c.table.table.as_ref())
    }
}
