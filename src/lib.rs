//! bash-declare - Typed values as bash variable declarations
//!
//! This library translates a set of named, typed values into a block of
//! read-only bash `declare` statements, safely quoted, and inserts that
//! block into an existing script directly after the `#!` interpreter line
//! when one is present.

pub mod encode;
pub mod errors;
pub mod formats;
pub mod script;
pub mod validate;
pub mod value;

pub use errors::DeclError;
pub use script::{generate, insert_decls, Generated};
pub use value::{DynValue, NamedValueSet, VarValue};
