//! Source parser
//!
//! This module transforms one line of source text into AST statements:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`token_buffer`]: Eager, randomly peekable token sequence for a line
//! - [`parse`]: The [`parse::Parser`] and its error type
//! - [`ast`]: AST node definitions
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary operators.
//! No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token_buffer;
