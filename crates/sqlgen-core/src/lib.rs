//! # sqlgen-core
//!
//! AST model shared by the sqlgen DSL parser, printer, and code generators.
//!
//! A parsed source unit is a [`File`](types::File): an ordered list of
//! [`Declaration`](types::Declaration)s, each mapping an entity to a table or
//! to a join of several tables. All identifier-like values are validated
//! newtypes, so an AST built through the constructors can always be printed
//! back to canonical DSL text.

pub mod error;
pub mod types;

pub use error::AstError;
