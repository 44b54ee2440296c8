use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::apply::apply, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting value.
///
/// This is the main entry point for evaluation. A literal evaluates to its
/// stored value unchanged. A call first evaluates every operand recursively,
/// left to right, and then applies the operator to the argument values.
/// Evaluation borrows the tree and never mutates it, so the same tree
/// evaluates to the same value every time.
///
/// # Parameters
/// - `expression`: The expression tree to evaluate.
///
/// # Returns
/// The numeric result of the expression.
///
/// # Errors
/// Returns a `RuntimeError` if an operator receives a wrong argument count or
/// an arithmetic operation fails.
///
/// ## Example
/// ```
/// use calclang::interpreter::{
///     evaluator::core::eval,
///     parser::core::parse_line,
///     value::Value,
/// };
///
/// let expression = parse_line("add(2, mul(4, 6))").unwrap();
///
/// assert_eq!(eval(&expression).unwrap(), Value::Integer(26));
/// assert_eq!(eval(&expression).unwrap(), Value::Integer(26));
/// ```
pub fn eval(expression: &Expr) -> EvalResult<Value> {
    match expression {
        Expr::Literal { value, .. } => Ok(Value::from(value)),
        Expr::Call { op, operands, column } => {
            let mut arguments = Vec::with_capacity(operands.len());

            for operand in operands {
                arguments.push(eval(operand)?);
            }

            apply(*op, &arguments, *column)
        },
    }
}
