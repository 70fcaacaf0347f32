use serde::{Deserialize, Serialize};

use super::column::Column;

/// A table declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// The name as written, schema qualifier included (`schema.table`).
    pub name: String,
    pub columns: Vec<Column>,
    /// Raw entries of the bracketed lists in the table header and body.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Table {
    /// Creates an empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            constraints: Vec::new(),
            note: None,
        }
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Splits `schema.table` into its qualifier and bare name.
    ///
    /// Only the last `.` separates; `a.b.c` gives `(Some("a.b"), "c")`.
    pub fn qualified_name(&self) -> (Option<&str>, &str) {
        match self.name.rsplit_once('.') {
            Some((schema, name)) => (Some(schema), name),
            None => (None, self.name.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_lookup() {
        let mut t = Table::new("users");
        t.columns.push(Column::new("id", "int"));
        t.columns.push(Column::new("email", "string"));
        assert_eq!(t.column("email").map(|c| c.data_type.as_str()), Some("string"));
        assert!(t.column("missing").is_none());
    }

    #[test]
    fn qualified_name() {
        assert_eq!(Table::new("users").qualified_name(), (None, "users"));
        assert_eq!(
            Table::new("auth.users").qualified_name(),
            (Some("auth"), "users")
        );
        assert_eq!(Table::new("a.b.c").qualified_name(), (Some("a.b"), "c"));
    }

    #[test]
    fn serde_omits_empty_optionals() {
        let json = serde_json::to_value(Table::new("t")).unwrap();
        assert_eq!(json["name"], "t");
        assert!(json["columns"].as_array().unwrap().is_empty());
        assert!(json.get("constraints").is_none());
        assert!(json.get("note").is_none());
    }
}
