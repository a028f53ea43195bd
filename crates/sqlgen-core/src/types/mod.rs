mod declaration;
mod file;
mod ident;
mod join_clause;
mod join_condition;
mod join_kind;
mod options;
mod sql_name;
mod table_ref;

pub use declaration::Declaration;
pub use file::File;
pub use ident::{is_keyword, Ident, KEYWORDS};
pub use join_clause::JoinClause;
pub use join_condition::JoinCondition;
pub use join_kind::JoinKind;
pub use options::Options;
pub use sql_name::SqlName;
pub use table_ref::TableRef;

/// Text that stands for an omitted name or table in DSL source.
///
/// In the AST an omitted value is `None`; this text only exists on the
/// printed side, and parses back to `None`.
pub const PLACEHOLDER: &str = "{}";
