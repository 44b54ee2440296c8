/// Core parsing logic for expressions.
///
/// Contains the line-level entry point, the recursive expression rule, and
/// the shared parse result type.
pub mod core;

/// Operand-list parsing.
///
/// Handles the comma-separated operand lists of call expressions, including
/// empty lists.
pub mod operands;
