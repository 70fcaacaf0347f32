use serde::{Deserialize, Serialize};

use super::constraint::Constraint;
use super::reference::Reference;
use super::table::Table;

/// Root of a parsed DBAL document: its tables in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ast {
    pub tables: Vec<Table>,
}

impl Ast {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// Looks up a table by its full name as written.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Every `ref:` declared on a column, as `table.column -> target`.
    ///
    /// Targets are copied verbatim; nothing checks that they exist.
    pub fn references(&self) -> Vec<Reference> {
        let mut references = Vec::new();
        for table in &self.tables {
            for column in &table.columns {
                for constraint in column.typed_constraints() {
                    if let Constraint::Reference { target, .. } = constraint {
                        references.push(Reference::new(
                            format!("{}.{}", table.name, column.name),
                            target,
                        ));
                    }
                }
            }
        }
        tracing::trace!(count = references.len(), "collected references");
        references
    }
}
