//! Statement evaluation
//!
//! This module provides the evaluation logic:
//! - [`engine`]: The tree-walking [`engine::Evaluator`] and its environment
//! - [`errors`]: Evaluation error types
//! - [`ops`]: Binary operator arithmetic
//!
//! # Execution Model
//!
//! Each parsed statement is evaluated to completion against a flat
//! name → `f64` environment that lives as long as the evaluator.

pub mod engine;
pub mod errors;
pub mod ops;
