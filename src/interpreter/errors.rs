//! Evaluation error types
//!
//! This module defines [`EvalError`], which represents all errors that can occur
//! while evaluating a statement (as opposed to parse errors).
//!
//! No evaluation error is fatal: it aborts the current statement only. The
//! failing binding itself is skipped, but bindings made earlier in the same
//! statement (for example the inner assignment in `let y = (y = 5)`) are kept.

use crate::parser::ast::SourceLocation;
use thiserror::Error;

/// Errors that can occur during evaluation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Reference to, or assignment of, a name that was never declared
    #[error("Undefined variable '{name}' at line {}", .location.line)]
    UndefinedVariable {
        name: String,
        location: SourceLocation,
    },

    /// `let` of a name that is already bound
    #[error("Variable '{name}' is already declared at line {}", .location.line)]
    DuplicateDeclaration {
        name: String,
        location: SourceLocation,
    },

    /// Calls and function definitions have no evaluation semantics
    #[error("{construct} cannot be evaluated at line {}", .location.line)]
    NotImplemented {
        construct: String,
        location: SourceLocation,
    },
}

impl EvalError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            EvalError::UndefinedVariable { location, .. }
            | EvalError::DuplicateDeclaration { location, .. }
            | EvalError::NotImplemented { location, .. } => location,
        }
    }
}
