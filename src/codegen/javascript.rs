//! JavaScript code generator
//!
//! Lowers a parsed program to a self-contained JavaScript expression. The
//! emitted unit is an immediately-invoked function whose completion value
//! is `{ results, log }`; no other identifier escapes it. Temporaries are
//! minted from a per-generation counter and each builtin call lowers into
//! its own block scope, so repeated calls never alias.

use super::CodeGenerator;
use crate::errors::PseudocResult;
use crate::lexer::Builtin;
use crate::parser::{Expr, Program, Stmt};
use crate::value::{format_number, Bindings, Value};
use std::collections::HashSet;

/// JavaScript code generator
pub struct JavaScriptGenerator {
    /// Current indentation level
    indent: usize,
    /// Output buffer
    output: String,
    /// Monotonic counter for fresh temporary names
    counter: u32,
    /// Variables already declared with `let` in this unit
    declared: HashSet<String>,
}

impl JavaScriptGenerator {
    pub fn new() -> Self {
        Self {
            indent: 0,
            output: String::new(),
            counter: 0,
            declared: HashSet::new(),
        }
    }

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn writeln(&mut self, s: &str) {
        for _ in 0..self.indent {
            self.output.push_str("  ");
        }
        self.output.push_str(s);
        self.output.push('\n');
    }

    fn indent(&mut self) {
        self.indent += 1;
    }

    fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Mint a fresh, collision-free temporary name
    fn fresh(&mut self, base: &str) -> String {
        self.counter += 1;
        format!("__{}_{}", base, self.counter)
    }

    /// Render an expression as a JavaScript expression
    fn expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Number { value } => format_number(*value),
            Expr::List { elements } => Value::List(elements.clone()).to_string(),
            Expr::Var { name } => name.clone(),
        }
    }

    fn generate_statement(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Assign { name, value, line } => {
                let js_value = self.expr(value);
                self.writeln(&format!("// line {}: {} = {}", line, name, js_value));
                if self.declared.insert(name.clone()) {
                    self.writeln(&format!("let {} = {};", name, js_value));
                } else {
                    self.writeln(&format!("{} = {};", name, js_value));
                }
                self.writeln(&format!(
                    "__trace(\"info\", \"{} = \" + JSON.stringify({}));",
                    name, name
                ));
            }
            Stmt::Call {
                builtin,
                args,
                line,
            } => {
                let rendered: Vec<String> = args.iter().map(|a| self.expr(a)).collect();
                self.writeln(&format!(
                    "// line {}: {}({})",
                    line,
                    builtin,
                    rendered.join(", ")
                ));
                match builtin {
                    Builtin::Sort => self.generate_sort(&args[0]),
                    Builtin::Search => self.generate_search(&args[0], &args[1]),
                    Builtin::Result => self.generate_result(&args[0]),
                }
            }
        }
        self.writeln("");
    }

    /// Lower `ORDENAR(list)`: copy, sort ascending, and reassign the
    /// source variable when the argument was a variable reference.
    fn generate_sort(&mut self, arg: &Expr) {
        let list = self.expr(arg);
        let sorted = self.fresh("sorted");

        self.writeln("{");
        self.indent();
        self.writeln(&format!(
            "const {} = {}.slice().sort((a, b) => a - b);",
            sorted, list
        ));
        if let Expr::Var { name } = arg {
            self.writeln(&format!("{} = {};", name, sorted));
        }
        self.writeln(&format!(
            "__emit(\"Sorted list: \" + JSON.stringify({}));",
            sorted
        ));
        self.writeln("__trace(\"success\", \"ORDENAR completed\");");
        self.dedent();
        self.writeln("}");
    }

    /// Lower `BUSCAR(value, list)`: first-occurrence linear scan
    fn generate_search(&mut self, value: &Expr, list: &Expr) {
        let needle = self.fresh("needle");
        let index = self.fresh("index");
        let js_value = self.expr(value);
        let js_list = self.expr(list);

        self.writeln("{");
        self.indent();
        self.writeln(&format!("const {} = {};", needle, js_value));
        self.writeln(&format!("const {} = {}.indexOf({});", index, js_list, needle));
        self.writeln(&format!("if ({} !== -1) {{", index));
        self.indent();
        self.writeln(&format!(
            "__emit(\"Value \" + JSON.stringify({}) + \" found at index \" + {});",
            needle, index
        ));
        self.writeln("__trace(\"success\", \"BUSCAR completed\");");
        self.dedent();
        self.writeln("} else {");
        self.indent();
        self.writeln(&format!(
            "__emit(\"Value \" + JSON.stringify({}) + \" not found\");",
            needle
        ));
        self.writeln("__trace(\"warning\", \"BUSCAR: value not found\");");
        self.dedent();
        self.writeln("}");
        self.dedent();
        self.writeln("}");
    }

    /// Lower `RESULTADO(expr)`: report the runtime value
    fn generate_result(&mut self, arg: &Expr) {
        let js_value = self.expr(arg);
        self.writeln(&format!(
            "__emit(\"Result: \" + JSON.stringify({}));",
            js_value
        ));
        self.writeln("__trace(\"info\", \"RESULTADO emitted\");");
    }
}

impl Default for JavaScriptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for JavaScriptGenerator {
    fn generate(&mut self, program: &Program) -> PseudocResult<String> {
        self.output.clear();
        self.counter = 0;
        self.declared.clear();

        self.writeln("// Generated by pseudoc");
        self.writeln("(() => {");
        self.indent();
        self.writeln("const __results = [];");
        self.writeln("const __log = [];");
        self.writeln("const __emit = (line) => __results.push(line);");
        self.writeln("const __trace = (severity, message) => __log.push({ severity, message });");
        self.writeln("");

        for stmt in &program.statements {
            self.generate_statement(stmt);
        }

        self.writeln("return { results: __results, log: __log };");
        self.dedent();
        self.write("})();\n");

        Ok(std::mem::take(&mut self.output))
    }

    fn file_extension(&self) -> &'static str {
        "js"
    }

    fn language_name(&self) -> &'static str {
        "JavaScript"
    }
}

/// Render bound variables as a JavaScript prelude: one declaration per
/// binding, prepended to the generated unit so the program is
/// self-contained. Each declared name is distinct, so order carries no
/// meaning.
pub fn bindings_prelude(bindings: &Bindings) -> String {
    let mut prelude = String::new();
    for (name, value) in bindings {
        prelude.push_str(&format!("let {} = {};\n", name, value));
    }
    prelude
}
