use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Applies an operator to a list of evaluated argument values.
///
/// Addition and multiplication accept any number of arguments and fold from
/// their identity element, so the empty call yields the identity.
/// Subtraction requires at least one argument: alone it negates, otherwise
/// the tail is subtracted from the first argument left to right. Division
/// requires exactly two arguments.
///
/// # Parameters
/// - `op`: The operator to apply.
/// - `arguments`: Evaluated argument values, in operand order.
/// - `column`: Column of the call, for error reporting.
///
/// # Returns
/// The numeric result of the operator application.
///
/// # Errors
/// - `NotEnoughArguments` for `sub` with no arguments.
/// - `ArgumentCountMismatch` for `div` with other than two arguments.
/// - Any arithmetic error from the individual operations.
pub fn apply(op: Operator, arguments: &[Value], column: usize) -> EvalResult<Value> {
    match op {
        Operator::Add => fold(Value::Integer(0), arguments, Operator::Add, column),

        Operator::Mul => fold(Value::Integer(1), arguments, Operator::Mul, column),

        Operator::Sub => match arguments {
            [] => Err(RuntimeError::NotEnoughArguments { op: op.to_string(),
                                                         minimum: 1,
                                                         column }),
            [operand] => operand.negated(column),
            [first, rest @ ..] => fold(first.clone(), rest, Operator::Sub, column),
        },

        Operator::Div => match arguments {
            [numerator, denominator] => scalar_op(op, numerator, denominator, column),
            _ => Err(RuntimeError::ArgumentCountMismatch { op: op.to_string(),
                                                           expected: 2,
                                                           found: arguments.len(),
                                                           column }),
        },
    }
}

/// Folds an operator over a list of arguments from a starting value.
fn fold(start: Value, arguments: &[Value], op: Operator, column: usize) -> EvalResult<Value> {
    let mut accumulator = start;

    for argument in arguments {
        accumulator = scalar_op(op, &accumulator, argument, column)?;
    }

    Ok(accumulator)
}

/// Evaluates a scalar arithmetic operation.
///
/// Two integer operands stay in integer arithmetic; any real operand promotes
/// the operation to real arithmetic. Division by zero is checked explicitly
/// for both numeric categories.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `column`: Column of the call, for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed scalar.
fn scalar_op(op: Operator, left: &Value, right: &Value, column: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => integer_op(op, *a, *b, column),
        _ => real_op(op, left.as_real(column)?, right.as_real(column)?, column),
    }
}

/// Checked integer arithmetic.
///
/// Overflow is reported rather than wrapped. Division that does not come out
/// even falls back to real arithmetic, so `div(6, 3)` stays integral while
/// `div(7, 2)` produces `3.5`.
fn integer_op(op: Operator, a: i64, b: i64, column: usize) -> EvalResult<Value> {
    let result = match op {
        Operator::Add => a.checked_add(b),
        Operator::Sub => a.checked_sub(b),
        Operator::Mul => a.checked_mul(b),
        Operator::Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero { column });
            }
            match a.checked_rem(b) {
                Some(0) => a.checked_div(b),
                _ => {
                    let left = Value::Integer(a).as_real(column)?;
                    let right = Value::Integer(b).as_real(column)?;
                    return real_op(op, left, right, column);
                },
            }
        },
    };

    result.map_or(Err(RuntimeError::Overflow { column }), |n| Ok(Value::Integer(n)))
}

/// Real arithmetic.
fn real_op(op: Operator, left: f64, right: f64, column: usize) -> EvalResult<Value> {
    match op {
        Operator::Add => Ok(Value::Real(left + right)),
        Operator::Sub => Ok(Value::Real(left - right)),
        Operator::Mul => Ok(Value::Real(left * right)),
        Operator::Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { column });
            }
            Ok(Value::Real(left / right))
        },
    }
}
