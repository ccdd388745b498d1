//! Declaration Encoding
//!
//! Turns a validated set of variables into read-only bash `declare`
//! statements. Output is fully deterministic: declarations appear in sorted
//! name order and associative-array entries in sorted key order. Associative
//! arrays require Bash 4.

use crate::value::{NamedValueSet, VarValue};

/// Quote `s` as a bash single-quoted word. Embedded single quotes close the
/// quoted segment, emit an escaped quote, and reopen it: `'\''`.
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Encode one `declare` statement per variable, each terminated by a
/// newline. An empty set encodes to the empty string.
pub fn encode(vars: &NamedValueSet) -> String {
    let mut out = String::new();
    for (name, value) in vars {
        match value {
            VarValue::Scalar(s) => {
                out.push_str("declare -r ");
                out.push_str(name);
                out.push('=');
                out.push_str(&quote(s));
            }
            VarValue::Integer(n) => {
                out.push_str("declare -ri ");
                out.push_str(name);
                out.push('=');
                out.push_str(&n.to_string());
            }
            VarValue::StringList(items) => {
                out.push_str("declare -ra ");
                out.push_str(name);
                out.push_str("=(");
                for (i, item) in items.iter().enumerate() {
                    if i != 0 {
                        out.push(' ');
                    }
                    out.push_str(&quote(item));
                }
                out.push(')');
            }
            VarValue::StringMap(pairs) => {
                out.push_str("declare -rA ");
                out.push_str(name);
                out.push_str("=(");
                for (i, (key, item)) in pairs.iter().enumerate() {
                    if i != 0 {
                        out.push(' ');
                    }
                    out.push('[');
                    out.push_str(&quote(key));
                    out.push_str("]=");
                    out.push_str(&quote(item));
                }
                out.push(')');
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn set(entries: Vec<(&str, VarValue)>) -> NamedValueSet {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    /// Undo `quote`: parse a single-quoted bash word back to its raw text.
    fn unquote(quoted: &str) -> String {
        let mut out = String::new();
        let mut rest = quoted;
        loop {
            assert!(rest.starts_with('\''), "expected quoted segment: {}", rest);
            let end = rest[1..].find('\'').expect("unterminated quote") + 1;
            out.push_str(&rest[1..end]);
            rest = &rest[end + 1..];
            if rest.is_empty() {
                return out;
            }
            assert!(rest.starts_with("\\'"), "expected escaped quote: {}", rest);
            out.push('\'');
            rest = &rest[2..];
        }
    }

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote("Alex"), "'Alex'");
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn test_quote_embedded_single_quote() {
        assert_eq!(quote("it's"), "'it'\\''s'");
        assert_eq!(quote("'"), "''\\'''");
    }

    #[test]
    fn test_quote_round_trip() {
        for s in ["", "plain", "it's", "''", "a'b'c", "end'", "'start", "$HOME `cmd` \"x\""] {
            assert_eq!(unquote(&quote(s)), s, "round trip failed for {:?}", s);
        }
    }

    #[test]
    fn test_encode_scalar() {
        let out = encode(&set(vec![("name", VarValue::Scalar("Alex".to_string()))]));
        assert_eq!(out, "declare -r name='Alex'\n");
    }

    #[test]
    fn test_encode_integer() {
        let out = encode(&set(vec![("num", VarValue::Integer(12))]));
        assert_eq!(out, "declare -ri num=12\n");
        let out = encode(&set(vec![("neg", VarValue::Integer(-7))]));
        assert_eq!(out, "declare -ri neg=-7\n");
    }

    #[test]
    fn test_encode_list() {
        let out = encode(&set(vec![(
            "names",
            VarValue::StringList(vec!["Alex".to_string(), "Bitty".to_string()]),
        )]));
        assert_eq!(out, "declare -ra names=('Alex' 'Bitty')\n");
    }

    #[test]
    fn test_encode_empty_list() {
        let out = encode(&set(vec![("names", VarValue::StringList(vec![]))]));
        assert_eq!(out, "declare -ra names=()\n");
    }

    #[test]
    fn test_encode_map_sorted_keys() {
        let mut pairs = BTreeMap::new();
        pairs.insert("bleep".to_string(), "bloop".to_string());
        pairs.insert("beep".to_string(), "boop".to_string());
        let out = encode(&set(vec![("noises", VarValue::StringMap(pairs))]));
        assert_eq!(out, "declare -rA noises=(['beep']='boop' ['bleep']='bloop')\n");
    }

    #[test]
    fn test_encode_empty_map() {
        let out = encode(&set(vec![("noises", VarValue::StringMap(BTreeMap::new()))]));
        assert_eq!(out, "declare -rA noises=()\n");
    }

    #[test]
    fn test_encode_empty_set() {
        assert_eq!(encode(&NamedValueSet::new()), "");
    }

    #[test]
    fn test_encode_sorted_name_order() {
        let out = encode(&set(vec![
            ("zeta", VarValue::Scalar("z".to_string())),
            ("alpha", VarValue::Scalar("a".to_string())),
            ("mid", VarValue::Integer(1)),
        ]));
        assert_eq!(
            out,
            "declare -r alpha='a'\ndeclare -ri mid=1\ndeclare -r zeta='z'\n"
        );
    }

    #[test]
    fn test_encode_quotes_in_values_and_keys() {
        let mut pairs = BTreeMap::new();
        pairs.insert("o'clock".to_string(), "it's".to_string());
        let out = encode(&set(vec![("m", VarValue::StringMap(pairs))]));
        assert_eq!(out, "declare -rA m=(['o'\\''clock']='it'\\''s')\n");
    }
}
