//! # sqlgen-dsl
//!
//! Parser and canonical printer for the sqlgen declaration language, which
//! maps entities to tables or joins of tables.
//!
//! This crate provides:
//! - A lexer that tokenizes DSL source with line and column tracking
//! - A recursive descent parser that produces a [`File`](sqlgen_core::types::File)
//! - A printer that renders a `File` back to canonical DSL text
//! - Round-trip fidelity: `parse(print(file))` produces an equal AST
//!
//! # Example
//!
//! ```
//! use sqlgen_dsl::{parse, print};
//!
//! let source = r#"
//! generate Account (plural Accounts) from "account"
//! generate UserJoinAccount
//!     from user (User) as u
//!     join account (Account) as a on u.id = a.user_id
//! "#;
//!
//! let file = parse("models", source).expect("parse failed");
//! assert_eq!(file.len(), 2);
//! assert_eq!(file.declarations[0].name_or_placeholder(), "Account");
//!
//! let text = print(&file);
//! assert!(text.starts_with("generate Account (plural Accounts) from \"account\";\n"));
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;

pub use error::{LexError, LexErrorKind, Position, Span, SyntaxError, SyntaxErrorKind};
pub use parser::parse;
pub use printer::{normalize, print, print as render, print_declaration};
