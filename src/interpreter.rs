/// The evaluator module walks expression trees and computes results.
///
/// The evaluator traverses the tree bottom-up, evaluates each operand, and
/// applies the node's operator over the resulting values. It is the core
/// execution engine of the calculator.
///
/// # Responsibilities
/// - Evaluates tree nodes, performing all supported operations.
/// - Checks operator arities before dispatch.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes an input line for further parsing.
///
/// The lexer (tokenizer) reads the raw line and produces a stream of tokens,
/// each corresponding to a meaningful element: a delimiter, a numeric
/// literal, or an identifier. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input line into tokens paired with their source columns.
/// - Classifies numeric literals as integers or reals.
/// - Treats any other non-delimiter run as an identifier.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a tree that represents the nested call structure of the line.
///
/// # Responsibilities
/// - Converts tokens into literal and call tree nodes.
/// - Validates delimiters and rejects trailing tokens, reporting errors with
///   column info.
/// - Resolves operator names to the closed operator set.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types produced by evaluation, integers and
/// reals, and provides methods for conversion and promotion between them.
///
/// # Responsibilities
/// - Defines the `Value` enum and its two numeric variants.
/// - Implements negation, display, and safe promotion from integer to real.
pub mod value;
