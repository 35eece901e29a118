//! AST executor
//!
//! Walks the statement sequence in source order, keeping a per-run
//! variable environment seeded from the bound variables. Result lines and
//! log entries accumulate in order; any fault aborts the run with an
//! execution error. Message text matches what the generated JavaScript
//! emits, so the two paths are observably equivalent.

use crate::console::{LogEntry, Severity};
use crate::errors::{PseudocError, PseudocResult};
use crate::lexer::Builtin;
use crate::parser::{Expr, Program, Stmt};
use crate::value::{Bindings, Value};
use std::cmp::Ordering;
use std::collections::HashMap;

/// The structured output of one execution: joined result text plus the
/// ordered log produced by the program
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    pub result_text: String,
    pub log: Vec<LogEntry>,
}

/// Execute a program against externally bound variables
pub fn execute(program: &Program, bindings: &Bindings) -> PseudocResult<Execution> {
    let mut executor = Executor::new(bindings);
    for stmt in &program.statements {
        executor.run_statement(stmt)?;
    }
    Ok(Execution {
        result_text: executor.results.join("\n"),
        log: executor.log,
    })
}

struct Executor {
    env: HashMap<String, Value>,
    results: Vec<String>,
    log: Vec<LogEntry>,
}

impl Executor {
    fn new(bindings: &Bindings) -> Self {
        Self {
            env: bindings
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            results: Vec::new(),
            log: Vec::new(),
        }
    }

    fn emit(&mut self, line: String) {
        self.results.push(line);
    }

    fn trace(&mut self, severity: Severity, message: impl Into<String>) {
        self.log.push(LogEntry::new(severity, message));
    }

    fn eval(&self, expr: &Expr) -> PseudocResult<Value> {
        match expr {
            Expr::Number { value } => Ok(Value::Number(*value)),
            Expr::List { elements } => Ok(Value::List(elements.clone())),
            Expr::Var { name } => self.env.get(name).cloned().ok_or_else(|| {
                PseudocError::execution(format!("variable '{}' is not defined", name))
            }),
        }
    }

    fn run_statement(&mut self, stmt: &Stmt) -> PseudocResult<()> {
        match stmt {
            Stmt::Assign { name, value, .. } => {
                let value = self.eval(value)?;
                self.trace(Severity::Info, format!("{} = {}", name, value));
                self.env.insert(name.clone(), value);
                Ok(())
            }
            Stmt::Call { builtin, args, .. } => match builtin {
                Builtin::Sort => self.run_sort(&args[0]),
                Builtin::Search => self.run_search(&args[0], &args[1]),
                Builtin::Result => self.run_result(&args[0]),
            },
        }
    }

    /// `ORDENAR(list)`: sort a private copy ascending by numeric
    /// comparison, then rebind the source variable when the argument was
    /// a variable reference
    fn run_sort(&mut self, arg: &Expr) -> PseudocResult<()> {
        let value = self.eval(arg)?;
        let elements = value.as_list().ok_or_else(|| {
            PseudocError::execution(format!("ORDENAR expects a list, got {}", value.kind()))
        })?;

        let mut sorted = elements.to_vec();
        sorted.sort_by(|a, b| numeric_compare(a, b));
        let sorted = Value::List(sorted);

        if let Expr::Var { name } = arg {
            self.env.insert(name.clone(), sorted.clone());
        }

        self.emit(format!("Sorted list: {}", sorted));
        self.trace(Severity::Success, "ORDENAR completed");
        Ok(())
    }

    /// `BUSCAR(value, list)`: first-occurrence index via linear scan
    fn run_search(&mut self, value: &Expr, list: &Expr) -> PseudocResult<()> {
        let needle = self.eval(value)?;
        let haystack = self.eval(list)?;
        let elements = haystack.as_list().ok_or_else(|| {
            PseudocError::execution(format!("BUSCAR expects a list, got {}", haystack.kind()))
        })?;

        match elements.iter().position(|e| *e == needle) {
            Some(index) => {
                self.emit(format!("Value {} found at index {}", needle, index));
                self.trace(Severity::Success, "BUSCAR completed");
            }
            None => {
                self.emit(format!("Value {} not found", needle));
                self.trace(Severity::Warning, "BUSCAR: value not found");
            }
        }
        Ok(())
    }

    /// `RESULTADO(expr)`: report the runtime value as structured text
    fn run_result(&mut self, arg: &Expr) -> PseudocResult<()> {
        let value = self.eval(arg)?;
        self.emit(format!("Result: {}", value));
        self.trace(Severity::Info, "RESULTADO emitted");
        Ok(())
    }
}

/// Ascending numeric comparison; non-numeric elements compare equal to
/// everything, mirroring the loose semantics of `(a, b) => a - b`
fn numeric_compare(a: &Value, b: &Value) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn run(source: &str) -> PseudocResult<Execution> {
        run_with(source, &Bindings::new())
    }

    fn run_with(source: &str, bindings: &Bindings) -> PseudocResult<Execution> {
        let tokens = Lexer::new(source).tokenize()?;
        let program = Parser::new(tokens).parse()?;
        execute(&program, bindings)
    }

    #[test]
    fn test_sort_then_report() {
        let execution =
            run("lista = [3, 1, 2]\nORDENAR(lista)\nRESULTADO(lista)").expect("should run");
        assert_eq!(
            execution.result_text,
            "Sorted list: [1,2,3]\nResult: [1,2,3]"
        );
    }

    #[test]
    fn test_sort_does_not_mutate_literal_argument() {
        // Sorting a variable rebinds it; sorting a literal leaves the
        // environment untouched
        let execution = run("ORDENAR([9, 4, 7])\nRESULTADO([9, 4, 7])").expect("should run");
        assert_eq!(
            execution.result_text,
            "Sorted list: [4,7,9]\nResult: [9,4,7]"
        );
    }

    #[test]
    fn test_search_found() {
        let execution = run("BUSCAR(5, [1, 9, 5, 3])").expect("should run");
        assert_eq!(execution.result_text, "Value 5 found at index 2");
        assert_eq!(execution.log[0].severity, Severity::Success);
    }

    #[test]
    fn test_search_first_occurrence_wins() {
        let execution = run("BUSCAR(5, [5, 9, 5])").expect("should run");
        assert_eq!(execution.result_text, "Value 5 found at index 0");
    }

    #[test]
    fn test_search_not_found() {
        let execution = run("BUSCAR(8, [1, 9, 5, 3])").expect("should run");
        assert_eq!(execution.result_text, "Value 8 not found");
        assert_eq!(execution.log[0].severity, Severity::Warning);
    }

    #[test]
    fn test_assignment_traces_value() {
        let execution = run("x = [2, 1]").expect("should run");
        assert_eq!(execution.log[0], LogEntry::new(Severity::Info, "x = [2,1]"));
    }

    #[test]
    fn test_bound_variables_are_visible() {
        let mut bindings = Bindings::new();
        bindings.insert(
            "lista".to_string(),
            Value::List(vec![
                Value::Number(6.0),
                Value::Number(1.0),
                Value::Number(4.0),
            ]),
        );
        let execution = run_with("ORDENAR(lista)", &bindings).expect("should run");
        assert_eq!(execution.result_text, "Sorted list: [1,4,6]");
    }

    #[test]
    fn test_bindings_are_not_mutated() {
        let mut bindings = Bindings::new();
        bindings.insert(
            "lista".to_string(),
            Value::List(vec![Value::Number(2.0), Value::Number(1.0)]),
        );
        run_with("ORDENAR(lista)", &bindings).expect("should run");
        assert_eq!(
            bindings["lista"],
            Value::List(vec![Value::Number(2.0), Value::Number(1.0)])
        );
    }

    #[test]
    fn test_undefined_variable() {
        let err = run("ORDENAR(fantasma)").expect_err("should fail");
        assert!(matches!(err, PseudocError::Execution { .. }));
        assert!(err.to_string().contains("fantasma"), "{}", err);
    }

    #[test]
    fn test_sort_requires_list() {
        let err = run("x = 5\nORDENAR(x)").expect_err("should fail");
        assert!(err.to_string().contains("expects a list"), "{}", err);
    }

    #[test]
    fn test_repeated_execution_is_idempotent() {
        let source = "lista = [3, 1, 2]\nORDENAR(lista)\nBUSCAR(2, lista)";
        let first = run(source).expect("should run");
        let second = run(source).expect("should run");
        assert_eq!(first.result_text, second.result_text);
        assert_eq!(first.log, second.log);
    }

    #[test]
    fn test_log_order_follows_statements() {
        let execution = run("x = 1\nRESULTADO(x)\nBUSCAR(9, [1])").expect("should run");
        let severities: Vec<Severity> = execution.log.iter().map(|e| e.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Info, Severity::Info, Severity::Warning]
        );
    }
}
