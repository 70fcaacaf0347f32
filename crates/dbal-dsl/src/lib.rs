//! # dbal-dsl
//!
//! Tokenizer, parser and printer for DBAL, a DBML-like notation for tables,
//! columns, constraints and notes.
//!
//! This crate provides:
//! - A lexer that turns source text into an ordered token stream, whitespace
//!   included
//! - A recursive descent parser that turns that stream into an [`Ast`]
//! - A printer that converts an [`Ast`] back to DBAL text
//!
//! # Example
//!
//! ```
//! use dbal_dsl::{parse, print_all};
//!
//! let source = r#"
//! Table users {
//!     id int [not null, unique]
//!     email string note: 'login'
//!     Note: 'registered accounts'
//! }
//! "#;
//!
//! let ast = parse(source).expect("parse failed");
//! assert_eq!(ast.tables.len(), 1);
//! assert_eq!(ast.tables[0].columns[0].constraints, ["not", "null", "unique"]);
//!
//! let dbal_text = print_all(&ast);
//! assert!(dbal_text.contains("Table users {"));
//! ```
//!
//! [`Ast`]: dbal_core::types::Ast

pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;

pub use error::{DslError, Span};
pub use lexer::tokenize;
pub use parser::{parse, parse_tokens};
pub use printer::{print, print_all};
pub use token::{Token, TokenKind};
