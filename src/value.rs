//! Runtime values for the pseudocode dialect
//!
//! Values flow through the whole pipeline: list literals captured by the
//! lexer, bound variables injected from input data, and results computed
//! by the executor all share this representation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A JSON-shaped runtime value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Get the numeric content of this value, if it is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the list content of this value, if it is a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(elements) => Some(elements),
            _ => None,
        }
    }

    /// A short description of the value's kind, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// Format a number the way `JSON.stringify` does: integral values print
/// without a fractional part.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Value {
    /// Compact JSON-like rendering, matching what the generated
    /// JavaScript would produce via `JSON.stringify`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::String(s) => {
                // serde_json handles escaping
                write!(
                    f,
                    "{}",
                    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
                )
            }
            Value::List(elements) => {
                write!(f, "[")?;
                for (i, e) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", e)?;
                }
                write!(f, "]")
            }
            Value::Object(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(
                        f,
                        "{}:{}",
                        serde_json::to_string(k).unwrap_or_else(|_| format!("\"{}\"", k)),
                        v
                    )?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Externally supplied variables, injected into the execution context.
/// Built once per run and discarded at its end.
pub type Bindings = BTreeMap<String, Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_display_matches_json_stringify() {
        let v = Value::List(vec![
            Value::Number(1.0),
            Value::Number(2.5),
            Value::Number(3.0),
        ]);
        assert_eq!(v.to_string(), "[1,2.5,3]");

        let mut obj = BTreeMap::new();
        obj.insert("a".to_string(), Value::Bool(true));
        obj.insert("b".to_string(), Value::Null);
        assert_eq!(Value::Object(obj).to_string(), r#"{"a":true,"b":null}"#);
    }

    #[test]
    fn test_string_escaping() {
        let v = Value::String("he said \"hi\"".to_string());
        assert_eq!(v.to_string(), r#""he said \"hi\"""#);
    }

    #[test]
    fn test_from_json() {
        let json: serde_json::Value = serde_json::from_str("[1, 2, 3]").unwrap();
        let value = Value::from(json);
        assert_eq!(
            value,
            Value::List(vec![
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Number(3.0)
            ])
        );
    }
}
