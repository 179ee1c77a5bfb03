//! # Introduction
//!
//! kaleido reads statements a line at a time, parses them into an expression
//! tree with precedence climbing, and evaluates the tree against a mutable
//! variable environment. Every value is an `f64`.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source line → Lexer → TokenBuffer → Parser → AST → Evaluator → f64 / EvalError
//! ```
//!
//! 1. [`parser`] — tokenises a line into a [`parser::token_buffer::TokenBuffer`]
//!    and builds [`parser::ast::AstNode`] statements from it.
//! 2. [`interpreter`] — the tree-walking [`interpreter::engine::Evaluator`]
//!    and its error taxonomy.
//! 3. [`repl`] — [`repl::Session`] drives the pipeline for one interactive
//!    session and renders results with terminal colors.
//!
//! ## Language
//!
//! ```text
//! let x = 1 + 2 * 3       # declaration, evaluates to 7
//! x = x / 2               # assignment
//! x < 4 == 1              # comparisons yield 1 or 0
//! function f(a, b) => a   # parsed, but not callable
//! extern sin(x)           # parsed, but not callable
//! ```

pub mod interpreter;
pub mod parser;
pub mod repl;

pub use interpreter::engine::Evaluator;
pub use interpreter::errors::EvalError;
pub use parser::parse::{ParseError, Parser};
pub use repl::{Outcome, Session};
