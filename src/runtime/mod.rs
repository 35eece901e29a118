//! Execution of parsed programs
//!
//! The executor evaluates the AST directly against the bound-variable
//! environment, producing the same observable outputs the generated
//! JavaScript would. No same-process `eval` is involved.

mod executor;
mod input;

pub use executor::{execute, Execution};
pub use input::ingest_input;
