//! pseudoc - Fixed-vocabulary pseudocode to JavaScript transpiler
//!
//! This crate translates a small pseudocode dialect (assignments, list
//! literals, and the builtins `ORDENAR`, `BUSCAR`, `RESULTADO`) into
//! JavaScript, and executes programs through an embedded AST executor
//! that produces the same observable output as the generated code.

pub mod codegen;
pub mod console;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod runtime;
pub mod value;

// Re-export commonly used types
pub use codegen::{CodeGenerator, JavaScriptGenerator};
pub use console::{ConsoleLog, ConsoleSink, LogEntry, Severity};
pub use errors::{PseudocError, PseudocResult, SourceSpan};
pub use lexer::{Builtin, Lexer, Token, TokenKind};
pub use parser::{Parser, Program};
pub use pipeline::{run, RunOutput};
pub use runtime::{execute, Execution};
pub use value::{Bindings, Value};
