//! # dbal-core
//!
//! The abstract syntax tree produced by the DBAL front end.
//!
//! An [`Ast`](types::Ast) owns its [`Table`](types::Table)s, each table owns
//! its [`Column`](types::Column)s. Constraints are kept as the raw token
//! texts the parser saw; [`Constraint::interpret`](types::Constraint::interpret)
//! layers a typed reading on top without losing anything it does not
//! understand.

pub mod types;
