mod ast;
mod column;
mod constraint;
mod reference;
mod relation;
mod table;

pub use ast::Ast;
pub use column::Column;
pub use constraint::Constraint;
pub use reference::Reference;
pub use relation::Relation;
pub use table::Table;
