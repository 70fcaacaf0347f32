use std::fmt;

use serde::{Deserialize, Serialize};

use super::relation::Relation;

/// A typed reading of a column's raw constraint entries.
///
/// The parser stores constraints as the flat token texts it found between
/// `[` and `]`. This type groups those texts back into the constructs they
/// spell. Anything it does not recognize survives as [`Constraint::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Constraint {
    NotNull,
    Null,
    Unique,
    PrimaryKey,
    Increment,
    Default(String),
    Reference { relation: Relation, target: String },
    Note(String),
    Unknown(String),
}

impl Constraint {
    /// Interprets a flat list of raw constraint entries, in order.
    ///
    /// Never fails: entries that do not start a known construct, and
    /// constructs missing their `:` or value, come back as `Unknown`.
    pub fn interpret(raw: &[String]) -> Vec<Constraint> {
        Self::group(raw).into_iter().map(|(c, _)| c).collect()
    }

    /// Like [`Constraint::interpret`], paired with the raw entries each
    /// constraint was read from. The slices partition `raw` in order.
    pub fn group(raw: &[String]) -> Vec<(Constraint, &[String])> {
        let mut groups = Vec::new();
        let mut rest = raw;
        while !rest.is_empty() {
            let (constraint, consumed) = Self::interpret_one(rest);
            let (entries, tail) = rest.split_at(consumed);
            groups.push((constraint, entries));
            rest = tail;
        }
        groups
    }

    /// Reads one construct from the front of a non-empty slice and returns
    /// it with the number of entries it spans (at least one).
    fn interpret_one(raw: &[String]) -> (Constraint, usize) {
        let at = |i: usize| raw.get(i).map(String::as_str);
        let head = raw[0].as_str();

        match (head, at(1)) {
            ("not", Some("null")) => (Self::NotNull, 2),
            ("primary", Some("key")) => (Self::PrimaryKey, 2),
            ("null", _) => (Self::Null, 1),
            ("unique", _) => (Self::Unique, 1),
            ("pk", _) => (Self::PrimaryKey, 1),
            ("increment", _) => (Self::Increment, 1),
            ("default", Some(":")) => match at(2) {
                Some(value) => (Self::Default(value.to_string()), 3),
                None => (Self::Unknown(head.to_string()), 1),
            },
            ("note", Some(":")) => match at(2) {
                Some(text) => (Self::Note(text.to_string()), 3),
                None => (Self::Unknown(head.to_string()), 1),
            },
            ("ref", Some(":")) => Self::interpret_reference(raw)
                .unwrap_or_else(|| (Self::Unknown(head.to_string()), 1)),
            _ => (Self::Unknown(head.to_string()), 1),
        }
    }

    /// `ref` `:` relation-symbols target
    fn interpret_reference(raw: &[String]) -> Option<(Constraint, usize)> {
        let symbols: Vec<&str> = raw[2..]
            .iter()
            .map(String::as_str)
            .take_while(|s| *s == "<" || *s == ">")
            .take(2)
            .collect();
        let relation = Relation::from_symbols(&symbols)?;
        let target_index = 2 + symbols.len();
        let target = raw.get(target_index)?;
        Some((
            Self::Reference {
                relation,
                target: target.clone(),
            },
            target_index + 1,
        ))
    }

    /// Returns true for `not null`.
    pub fn is_not_null(&self) -> bool {
        matches!(self, Self::NotNull)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNull => write!(f, "not null"),
            Self::Null => write!(f, "null"),
            Self::Unique => write!(f, "unique"),
            Self::PrimaryKey => write!(f, "pk"),
            Self::Increment => write!(f, "increment"),
            Self::Default(value) => write!(f, "default: {value}"),
            Self::Reference { relation, target } => {
                write!(f, "ref: {} {target}", relation.symbol())
            }
            Self::Note(text) => write!(f, "note: {text}"),
            Self::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}
