use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of a column reference, as written between `ref:` and the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Relation {
    /// `<`: one row here, many rows in the target.
    OneToMany,
    /// `>`: many rows here, one row in the target.
    ManyToOne,
    /// `<>`: many on both sides.
    ManyToMany,
}

impl Relation {
    /// Maps the relation symbols (already split into single-character
    /// tokens) to a relation.
    pub fn from_symbols(symbols: &[&str]) -> Option<Self> {
        match symbols {
            ["<"] => Some(Self::OneToMany),
            [">"] => Some(Self::ManyToOne),
            ["<", ">"] => Some(Self::ManyToMany),
            _ => None,
        }
    }

    /// The source symbols for this relation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::OneToMany => "<",
            Self::ManyToOne => ">",
            Self::ManyToMany => "<>",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneToMany => write!(f, "one-to-many"),
            Self::ManyToOne => write!(f, "many-to-one"),
            Self::ManyToMany => write!(f, "many-to-many"),
        }
    }
}
