//! Script Generation
//!
//! The exposed operation: prepends a bash script with variable declarations
//! based on given values. Sequences the deferred-value short-circuit,
//! validation, encoding, and insertion; each call is a pure transformation of
//! its arguments.

use crate::encode::encode;
use crate::errors::DeclError;
use crate::validate::validate;
use crate::value::DynValue;

/// Successful outcome of [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Generated {
    /// The final script text.
    Script(String),
    /// The variables are not yet fully known; the caller should invoke
    /// again once they are resolved. Distinct from an error.
    Deferred,
}

/// Splice `decls` into `source`. If the source starts with a `#!`
/// interpreter line, that line stays first and the declarations go directly
/// after it; otherwise the declarations are prepended. Purely textual.
pub fn insert_decls(source: &str, decls: &str) -> String {
    if decls.is_empty() {
        return source.to_string();
    }
    if !source.starts_with("#!") {
        return format!("{}{}", decls, source);
    }
    match source.find('\n') {
        // The whole source is the interpreter line.
        None => format!("{}\n{}", source, decls),
        Some(newline) => {
            let (before, after) = source.split_at(newline + 1);
            format!("{}{}{}", before, decls, after)
        }
    }
}

/// Generate the final script: validate `variables`, encode each as a
/// read-only bash declaration, and insert the declaration block into
/// `source` after any interpreter line.
///
/// Returns [`Generated::Deferred`] without validating when `variables` (or
/// any value inside it, transitively) is not yet known.
pub fn generate(source: &str, variables: &DynValue) -> Result<Generated, DeclError> {
    let vars = match variables {
        DynValue::Unknown => return Ok(Generated::Deferred),
        DynValue::Map(vars) => vars,
        _ => return Err(DeclError::NotAnObject),
    };
    if vars.values().any(|v| !v.is_wholly_known()) {
        return Ok(Generated::Deferred);
    }
    let set = validate(vars)?;
    let decls = encode(&set);
    Ok(Generated::Script(insert_decls(source, &decls)))
}
