use std::fmt;

use serde::{Deserialize, Serialize};

/// A column-level relationship, recorded as raw `table.column` strings.
///
/// Neither side is checked against the tables of the AST.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub source: String,
    pub target: String,
}

impl Reference {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
