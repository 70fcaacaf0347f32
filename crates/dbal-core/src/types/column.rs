use serde::{Deserialize, Serialize};

use super::constraint::Constraint;

/// One column of a table: name, type keyword, raw constraints, inline note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    /// Raw token texts from the column's `[...]` list, in source order.
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Column {
    /// Creates a column with no constraints and no note.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            constraints: Vec::new(),
            note: None,
        }
    }

    /// Typed reading of [`Column::constraints`].
    pub fn typed_constraints(&self) -> Vec<Constraint> {
        Constraint::interpret(&self.constraints)
    }

    /// Returns true if the constraints spell `not null`.
    pub fn is_not_null(&self) -> bool {
        self.typed_constraints().iter().any(Constraint::is_not_null)
    }

    /// Returns true if the constraints contain `unique`.
    pub fn is_unique(&self) -> bool {
        self.typed_constraints()
            .iter()
            .any(|c| matches!(c, Constraint::Unique))
    }

    /// Target of the first `ref:` constraint, if any.
    pub fn reference_target(&self) -> Option<String> {
        self.typed_constraints().into_iter().find_map(|c| match c {
            Constraint::Reference { target, .. } => Some(target),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_with(constraints: &[&str]) -> Column {
        Column {
            constraints: constraints.iter().map(|s| s.to_string()).collect(),
            ..Column::new("id", "int")
        }
    }

    #[test]
    fn new_has_no_constraints() {
        let c = Column::new("id", "int");
        assert!(c.constraints.is_empty());
        assert!(c.note.is_none());
        assert!(!c.is_not_null());
    }

    #[test]
    fn flags_from_raw_constraints() {
        let c = column_with(&["not", "null", "unique"]);
        assert!(c.is_not_null());
        assert!(c.is_unique());
    }

    #[test]
    fn lone_null_is_not_not_null() {
        assert!(!column_with(&["null"]).is_not_null());
    }

    #[test]
    fn reference_target() {
        let c = column_with(&["not", "null", "ref", ":", ">", "users.id"]);
        assert_eq!(c.reference_target().as_deref(), Some("users.id"));
        assert_eq!(column_with(&["unique"]).reference_target(), None);
    }

    #[test]
    fn serde_skips_missing_note() {
        let json = serde_json::to_value(Column::new("id", "int")).unwrap();
        assert!(json.get("note").is_none());
        assert_eq!(json["data_type"], "int");
    }
}
