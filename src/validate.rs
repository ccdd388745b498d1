//! Variable Validation
//!
//! Checks names against the bash identifier grammar and narrows each dynamic
//! input value into the closed `VarValue` union. Validation is all-or-nothing:
//! the first failure wins and nothing is encoded. Names are checked in sorted
//! order, so when several entries are invalid the one reported is always the
//! lexicographically first.

use indexmap::IndexMap;
use std::collections::BTreeMap;

use crate::errors::DeclError;
use crate::value::{DynValue, NamedValueSet, VarValue};

/// First character of a bash variable name: ASCII letter or underscore.
fn valid_name_initial_char(c: char) -> bool {
    matches!(c, '_' | 'A'..='Z' | 'a'..='z')
}

/// Subsequent characters also allow ASCII digits.
fn valid_name_subsequent_char(c: char) -> bool {
    valid_name_initial_char(c) || c.is_ascii_digit()
}

/// True if `s` is a non-empty valid bash variable name.
pub fn valid_variable_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        None => false,
        Some(c) if !valid_name_initial_char(c) => false,
        Some(_) => chars.all(valid_name_subsequent_char),
    }
}

// 2^63 is exactly representable as f64; i64::MAX is not, so the usable
// range is [-2^63, 2^63).
const I64_RANGE_END: f64 = 9_223_372_036_854_775_808.0;

/// Convert a float to i64 only when it is a whole number that fits exactly.
fn float_to_i64(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= -I64_RANGE_END && f < I64_RANGE_END {
        Some(f as i64)
    } else {
        None
    }
}

/// Validate every entry of `vars` and build the typed, name-ordered set the
/// encoder consumes. Pure; the input is left untouched.
pub fn validate(vars: &IndexMap<String, DynValue>) -> Result<NamedValueSet, DeclError> {
    let mut names: Vec<&String> = vars.keys().collect();
    names.sort();

    let mut set = NamedValueSet::new();
    for name in names {
        if name.is_empty() {
            return Err(DeclError::EmptyName);
        }
        if !valid_variable_name(name) {
            return Err(DeclError::InvalidName(name.clone()));
        }
        let value = validate_value(name, &vars[name])?;
        set.insert(name.clone(), value);
    }
    Ok(set)
}

fn validate_value(name: &str, value: &DynValue) -> Result<VarValue, DeclError> {
    match value {
        DynValue::String(s) => Ok(VarValue::Scalar(s.clone())),
        DynValue::Int(n) => Ok(VarValue::Integer(*n)),
        DynValue::Float(f) => match float_to_i64(*f) {
            Some(n) => Ok(VarValue::Integer(n)),
            None => Err(DeclError::NotAWholeNumber(name.to_string())),
        },
        DynValue::List(items) => {
            let mut elems = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    DynValue::String(s) => elems.push(s.clone()),
                    DynValue::Null => return Err(DeclError::NullElement(name.to_string())),
                    _ => return Err(DeclError::UnsupportedType(name.to_string())),
                }
            }
            Ok(VarValue::StringList(elems))
        }
        DynValue::Map(entries) => {
            let mut pairs = BTreeMap::new();
            for (key, item) in entries {
                match item {
                    DynValue::String(s) => {
                        pairs.insert(key.clone(), s.clone());
                    }
                    DynValue::Null => return Err(DeclError::NullElement(name.to_string())),
                    _ => return Err(DeclError::UnsupportedType(name.to_string())),
                }
            }
            Ok(VarValue::StringMap(pairs))
        }
        DynValue::Null | DynValue::Bool(_) | DynValue::Unknown => {
            Err(DeclError::UnsupportedType(name.to_string()))
        }
    }
}
