//! Variable Values
//!
//! Two value models meet here: `DynValue` is the dynamically shaped input a
//! caller hands over (which may contain shapes bash cannot hold, and values
//! that are not yet known), and `VarValue` is the closed set of shapes that
//! survive validation and can actually be declared in a bash script.

use indexmap::IndexMap;
use std::collections::BTreeMap;

/// A dynamically typed input value, as supplied by the caller before
/// validation. Mirrors the shapes a JSON/YAML/TOML document can carry, plus
/// `Unknown` for values that are not yet determined at call time.
#[derive(Debug, Clone, PartialEq)]
pub enum DynValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<DynValue>),
    Map(IndexMap<String, DynValue>),
    /// Not yet known; the caller must retry once the value is resolved.
    Unknown,
}

impl DynValue {
    /// True if neither this value nor any nested value is `Unknown`.
    pub fn is_wholly_known(&self) -> bool {
        match self {
            DynValue::Unknown => false,
            DynValue::List(items) => items.iter().all(DynValue::is_wholly_known),
            DynValue::Map(entries) => entries.values().all(DynValue::is_wholly_known),
            _ => true,
        }
    }
}

impl From<bool> for DynValue {
    fn from(b: bool) -> Self {
        DynValue::Bool(b)
    }
}

impl From<i64> for DynValue {
    fn from(n: i64) -> Self {
        DynValue::Int(n)
    }
}

impl From<f64> for DynValue {
    fn from(n: f64) -> Self {
        DynValue::Float(n)
    }
}

impl From<&str> for DynValue {
    fn from(s: &str) -> Self {
        DynValue::String(s.to_string())
    }
}

impl From<String> for DynValue {
    fn from(s: String) -> Self {
        DynValue::String(s)
    }
}

/// A validated value, one of the four shapes that translate to bash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarValue {
    Scalar(String),
    Integer(i64),
    StringList(Vec<String>),
    StringMap(BTreeMap<String, String>),
}

/// The validated set of variables to declare, keyed by name. The B-tree
/// ordering is what makes declaration output deterministic regardless of the
/// order the caller supplied the names in.
pub type NamedValueSet = BTreeMap<String, VarValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_values_are_wholly_known() {
        assert!(DynValue::Null.is_wholly_known());
        assert!(DynValue::Bool(true).is_wholly_known());
        assert!(DynValue::Int(42).is_wholly_known());
        assert!(DynValue::String("x".to_string()).is_wholly_known());
        assert!(!DynValue::Unknown.is_wholly_known());
    }

    #[test]
    fn test_unknown_inside_list() {
        let v = DynValue::List(vec![DynValue::from("a"), DynValue::Unknown]);
        assert!(!v.is_wholly_known());
    }

    #[test]
    fn test_unknown_nested_in_map() {
        let mut inner = IndexMap::new();
        inner.insert("k".to_string(), DynValue::Unknown);
        let mut outer = IndexMap::new();
        outer.insert("v".to_string(), DynValue::Map(inner));
        assert!(!DynValue::Map(outer).is_wholly_known());
    }

    #[test]
    fn test_known_collections() {
        let mut m = IndexMap::new();
        m.insert("k".to_string(), DynValue::from("v"));
        let v = DynValue::List(vec![DynValue::Map(m), DynValue::Int(1)]);
        assert!(v.is_wholly_known());
    }
}
