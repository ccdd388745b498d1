//! Variables File Formats
//!
//! Decodes a variables file (JSON, YAML, or TOML) into the dynamic value
//! model the generator consumes. Only used by the CLI front end; library
//! callers build `DynValue` directly.

use indexmap::IndexMap;

use crate::value::DynValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Parse a format name as given on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }
}

pub fn detect_format_from_extension(filename: &str) -> Option<Format> {
    let lower = filename.to_lowercase();
    if lower.ends_with(".json") {
        Some(Format::Json)
    } else if lower.ends_with(".yaml") || lower.ends_with(".yml") {
        Some(Format::Yaml)
    } else if lower.ends_with(".toml") {
        Some(Format::Toml)
    } else {
        None
    }
}

/// Parse `input` in the given format into a `DynValue`.
pub fn parse_variables(input: &str, format: Format) -> Result<DynValue, String> {
    match format {
        Format::Json => {
            let v: serde_json::Value =
                serde_json::from_str(input).map_err(|e| format!("JSON parse error: {}", e))?;
            Ok(json_to_dyn(v))
        }
        Format::Yaml => {
            let v: serde_yaml::Value =
                serde_yaml::from_str(input).map_err(|e| format!("YAML parse error: {}", e))?;
            Ok(yaml_to_dyn(v))
        }
        Format::Toml => {
            let v: toml::Value =
                toml::from_str(input).map_err(|e| format!("TOML parse error: {}", e))?;
            Ok(toml_to_dyn(v))
        }
    }
}

fn json_to_dyn(v: serde_json::Value) -> DynValue {
    match v {
        serde_json::Value::Null => DynValue::Null,
        serde_json::Value::Bool(b) => DynValue::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                DynValue::Int(i)
            } else {
                DynValue::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => DynValue::String(s),
        serde_json::Value::Array(arr) => {
            DynValue::List(arr.into_iter().map(json_to_dyn).collect())
        }
        serde_json::Value::Object(map) => {
            let mut entries = IndexMap::new();
            for (k, v) in map {
                entries.insert(k, json_to_dyn(v));
            }
            DynValue::Map(entries)
        }
    }
}

fn yaml_to_dyn(v: serde_yaml::Value) -> DynValue {
    match v {
        serde_yaml::Value::Null => DynValue::Null,
        serde_yaml::Value::Bool(b) => DynValue::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                DynValue::Int(i)
            } else {
                DynValue::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_yaml::Value::String(s) => DynValue::String(s),
        serde_yaml::Value::Sequence(arr) => {
            DynValue::List(arr.into_iter().map(yaml_to_dyn).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let mut entries = IndexMap::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Number(n) => format!("{}", n),
                    serde_yaml::Value::Bool(b) => format!("{}", b),
                    serde_yaml::Value::Null => "null".to_string(),
                    other => format!("{:?}", other),
                };
                entries.insert(key, yaml_to_dyn(v));
            }
            DynValue::Map(entries)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_dyn(tagged.value),
    }
}

fn toml_to_dyn(v: toml::Value) -> DynValue {
    match v {
        toml::Value::String(s) => DynValue::String(s),
        toml::Value::Integer(i) => DynValue::Int(i),
        toml::Value::Float(f) => DynValue::Float(f),
        toml::Value::Boolean(b) => DynValue::Bool(b),
        toml::Value::Datetime(d) => DynValue::String(d.to_string()),
        toml::Value::Array(arr) => DynValue::List(arr.into_iter().map(toml_to_dyn).collect()),
        toml::Value::Table(table) => {
            let mut entries = IndexMap::new();
            for (k, v) in table {
                entries.insert(k, toml_to_dyn(v));
            }
            DynValue::Map(entries)
        }
    }
}
