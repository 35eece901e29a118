//! Input data ingestion
//!
//! Optional user-supplied input data becomes the bound-variable mapping.
//! A JSON object spreads its top-level keys; a bare array binds under the
//! conventional name `lista`. Malformed input is never fatal: it degrades
//! to a warning and an empty mapping.

use crate::console::{ConsoleSink, Severity};
use crate::value::{Bindings, Value};

/// Name a bare array input is bound under
const DEFAULT_LIST_NAME: &str = "lista";

/// Build the bound-variable mapping from raw input data
pub fn ingest_input(input: &str, sink: &mut dyn ConsoleSink) -> Bindings {
    let mut bindings = Bindings::new();
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return bindings;
    }

    let parsed: serde_json::Value = match serde_json::from_str(trimmed) {
        Ok(v) => v,
        Err(e) => {
            sink.log(
                &format!("could not parse input data: {}", e),
                Severity::Warning,
            );
            return bindings;
        }
    };

    match Value::from(parsed) {
        Value::Object(map) => {
            let count = map.len();
            bindings.extend(map);
            sink.log(
                &format!("input data bound: {} variable(s)", count),
                Severity::Success,
            );
        }
        list @ Value::List(_) => {
            sink.log(
                &format!("{} = {}", DEFAULT_LIST_NAME, list),
                Severity::Success,
            );
            bindings.insert(DEFAULT_LIST_NAME.to_string(), list);
        }
        other => {
            sink.log(
                &format!(
                    "input data must be an object or a list, got {}; ignoring",
                    other.kind()
                ),
                Severity::Warning,
            );
        }
    }

    bindings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ConsoleLog;

    #[test]
    fn test_object_spreads_keys() {
        let mut console = ConsoleLog::new();
        let bindings = ingest_input(r#"{"lista": [5, 2], "umbral": 3}"#, &mut console);
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings["umbral"], Value::Number(3.0));
        assert_eq!(
            bindings["lista"],
            Value::List(vec![Value::Number(5.0), Value::Number(2.0)])
        );
        assert_eq!(console.entries()[0].severity, Severity::Success);
    }

    #[test]
    fn test_bare_array_binds_conventional_name() {
        let mut console = ConsoleLog::new();
        let bindings = ingest_input("[1, 2, 3]", &mut console);
        assert_eq!(bindings.len(), 1);
        assert!(bindings.contains_key("lista"));
    }

    #[test]
    fn test_malformed_input_warns_and_yields_empty() {
        let mut console = ConsoleLog::new();
        let bindings = ingest_input("{not json", &mut console);
        assert!(bindings.is_empty());
        assert_eq!(console.entries().len(), 1);
        assert_eq!(console.entries()[0].severity, Severity::Warning);
    }

    #[test]
    fn test_scalar_input_warns() {
        let mut console = ConsoleLog::new();
        let bindings = ingest_input("42", &mut console);
        assert!(bindings.is_empty());
        assert_eq!(console.entries()[0].severity, Severity::Warning);
    }

    #[test]
    fn test_empty_input_is_silent() {
        let mut console = ConsoleLog::new();
        let bindings = ingest_input("   ", &mut console);
        assert!(bindings.is_empty());
        assert!(console.entries().is_empty());
    }
}
