//! Translate-and-run orchestration
//!
//! Drives one invocation end to end: ingest input data, lex, parse,
//! generate JavaScript, execute the AST, and relay the program's log to
//! the diagnostic sink. All state is per-call; nothing survives between
//! invocations. Every abort is logged at error severity before it
//! propagates.

use crate::codegen::{bindings_prelude, CodeGenerator, JavaScriptGenerator};
use crate::console::{ConsoleSink, LogEntry, Severity};
use crate::errors::PseudocResult;
use crate::lexer::Lexer;
use crate::parser::{Parser, Program};
use crate::runtime::{execute, ingest_input};
use crate::value::Bindings;
use tracing::debug;

/// The output of one successful translate-and-run invocation
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// The generated JavaScript, including the bound-variable prelude
    pub javascript: String,
    /// The parsed program, for presentation and export
    pub ast: Program,
    /// Result lines joined with newlines
    pub result_text: String,
    /// The log produced by the executed program, in order
    pub log: Vec<LogEntry>,
}

/// Translate and run one source text with optional input data
pub fn run(
    source: &str,
    input_data: Option<&str>,
    sink: &mut dyn ConsoleSink,
) -> PseudocResult<RunOutput> {
    sink.log("Starting translation", Severity::Info);

    let bindings = match input_data {
        Some(data) => ingest_input(data, sink),
        None => Bindings::new(),
    };

    let result = translate(source, &bindings, sink);
    if let Err(e) = &result {
        sink.log(&e.to_string(), Severity::Error);
    }
    result
}

fn translate(
    source: &str,
    bindings: &Bindings,
    sink: &mut dyn ConsoleSink,
) -> PseudocResult<RunOutput> {
    let tokens = Lexer::new(source).tokenize()?;
    debug!(tokens = tokens.len(), "lexical analysis complete");
    sink.log(
        &format!("Lexical analysis complete: {} token(s)", tokens.len()),
        Severity::Success,
    );

    let ast = Parser::new(tokens).parse()?;
    debug!(statements = ast.statements.len(), "parsing complete");
    sink.log(
        &format!(
            "Syntactic analysis complete: {} statement(s)",
            ast.statements.len()
        ),
        Severity::Success,
    );

    let mut generator = JavaScriptGenerator::new();
    let code = generator.generate(&ast)?;
    let javascript = format!("{}{}", bindings_prelude(bindings), code);
    sink.log("JavaScript generation complete", Severity::Success);

    let execution = execute(&ast, bindings)?;
    for entry in &execution.log {
        sink.log(&entry.message, entry.severity);
    }
    sink.log("Execution finished", Severity::Success);

    Ok(RunOutput {
        javascript,
        ast,
        result_text: execution.result_text,
        log: execution.log,
    })
}
