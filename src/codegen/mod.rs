//! Code generation for the pseudocode dialect
//!
//! This module provides code generators for target languages.

mod javascript;

pub use javascript::{bindings_prelude, JavaScriptGenerator};

use crate::errors::PseudocResult;
use crate::parser::Program;

/// Trait for code generators
pub trait CodeGenerator {
    /// Generate code from a parsed program
    fn generate(&mut self, program: &Program) -> PseudocResult<String>;

    /// Get the file extension for the target language
    fn file_extension(&self) -> &'static str;

    /// Get the name of the target language
    fn language_name(&self) -> &'static str;
}
