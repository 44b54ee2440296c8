//! # calclang
//!
//! calclang is a minimal interactive calculator written in Rust.
//! It reads nested call expressions such as `add(2, mul(4, 6))`, parses them
//! into expression trees, and evaluates them with a small fixed set of
//! arithmetic operators.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::eval, parser::core::parse_line, value::Value};

/// Defines the structure of parsed input.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of a calculator line as a tree. The tree is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the literal and call expression variants.
/// - Defines the exhaustive operator set and its name resolution.
/// - Attaches source columns to tree nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating a line. It standardizes error reporting and carries
/// detailed information about failures, including source columns for user
/// feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches column numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, and value
/// representations to provide a complete pipeline from one line of text to
/// one numeric result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// This module runs the calculator interactively over explicitly supplied
/// input and output handles, so the loop can be driven by stdin/stdout in the
/// binary and by in-memory buffers in tests.
///
/// # Responsibilities
/// - Prompts for, reads, and evaluates one expression per line.
/// - Prints either the resulting value or the error for that line.
/// - Terminates cleanly when input is exhausted.
pub mod repl;
/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines shared by the evaluator and the
/// value types, chiefly lossless-or-error conversion from `i64` to `f64`.
///
/// # Responsibilities
/// - Safely convert `i64` to `f64` without silent data loss.
pub mod util;

/// Parses and evaluates one line of calculator input.
///
/// This is the main entry point of the library: it tokenizes and parses the
/// line into an expression tree, evaluates the tree, and returns the
/// resulting value. The binary and the interactive loop both route every
/// input line through this function.
///
/// # Errors
/// Returns an error if the line fails to parse, or if evaluation fails with
/// an arithmetic error such as a wrong argument count or division by zero.
///
/// # Examples
/// ```
/// use calclang::{eval_line, interpreter::value::Value};
///
/// // Nested calls evaluate bottom-up.
/// let value = eval_line("add(2, mul(4, 6))").unwrap();
/// assert_eq!(value, Value::Integer(26));
///
/// // A bare numeral is a complete expression.
/// assert_eq!(eval_line("42").unwrap(), Value::Integer(42));
///
/// // Example with an intentional error (sub requires at least 1 argument).
/// assert!(eval_line("sub()").is_err());
/// ```
pub fn eval_line(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let expression = parse_line(source)?;
    let value = eval(&expression)?;
    Ok(value)
}
