use std::io::Cursor;

use calclang::{
    ast::{Expr, LiteralValue, Operator},
    error::{ParseError, RuntimeError},
    eval_line,
    interpreter::{
        evaluator::core::eval,
        lexer::{Token, tokenize},
        parser::core::parse_line,
        value::Value,
    },
    repl::read_eval_print_loop,
    util::num::MAX_SAFE_I64_INT,
};

fn assert_evals(source: &str, expected: Value) {
    match eval_line(source) {
        Ok(value) => assert_eq!(value, expected, "wrong result for '{source}'"),
        Err(e) => panic!("'{source}' failed: {e}"),
    }
}

fn parse_failure(source: &str) -> ParseError {
    match parse_line(source) {
        Ok(expression) => panic!("'{source}' parsed as '{expression}' but was expected to fail"),
        Err(e) => e,
    }
}

fn eval_failure(source: &str) -> RuntimeError {
    let expression =
        parse_line(source).unwrap_or_else(|e| panic!("'{source}' failed to parse: {e}"));
    match eval(&expression) {
        Ok(value) => panic!("'{source}' evaluated to '{value}' but was expected to fail"),
        Err(e) => e,
    }
}

fn token_kinds(source: &str) -> Vec<Token> {
    tokenize(source).unwrap_or_else(|e| panic!("'{source}' failed to tokenize: {e}"))
                    .into_iter()
                    .map(|(token, _)| token)
                    .collect()
}

#[test]
fn addition_folds_all_arguments() {
    assert_evals("add(1, 2, 3)", Value::Integer(6));
    assert_evals("add(1, 2)", Value::Integer(3));
    assert_evals("add(7)", Value::Integer(7));
}

#[test]
fn empty_calls_yield_identity_elements() {
    assert_evals("add()", Value::Integer(0));
    assert_evals("mul()", Value::Integer(1));

    let expression = parse_line("add()").unwrap();
    assert!(matches!(&expression,
                     Expr::Call { op: Operator::Add, operands, .. } if operands.is_empty()));
}

#[test]
fn multiplication_folds_all_arguments() {
    assert_evals("mul(2, 3, 4)", Value::Integer(24));
    assert_evals("mul(2, 0.5)", Value::Real(1.0));
}

#[test]
fn subtraction_negates_and_folds_left() {
    assert_evals("sub(5)", Value::Integer(-5));
    assert_evals("sub(2.5)", Value::Real(-2.5));
    assert_evals("sub(10, 1, 2)", Value::Integer(7));
    assert_evals("sub(1.5, 0.25, 0.25)", Value::Real(1.0));
}

#[test]
fn subtraction_requires_an_argument() {
    let err = eval_failure("sub()");
    assert!(matches!(&err,
                     RuntimeError::NotEnoughArguments { op, minimum: 1, .. } if op == "sub"));
}

#[test]
fn division_is_true_division() {
    assert_evals("div(14, 4)", Value::Real(3.5));
    assert_evals("div(7, -2)", Value::Real(-3.5));
    assert_evals("div(6, 3)", Value::Integer(2));
    assert_evals("div(1, 0.5)", Value::Real(2.0));
}

#[test]
fn division_requires_exactly_two_arguments() {
    let err = eval_failure("div(1, 2, 3)");
    assert!(matches!(&err,
                     RuntimeError::ArgumentCountMismatch { op, expected: 2, found: 3, .. }
                         if op == "div"));

    assert!(matches!(eval_failure("div(1)"),
                     RuntimeError::ArgumentCountMismatch { found: 1, .. }));
}

#[test]
fn division_by_zero_is_reported() {
    assert!(matches!(eval_failure("div(5, 0)"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(eval_failure("div(5.0, 0)"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn symbolic_aliases_resolve_to_the_same_operators() {
    assert_evals("+(1, 2)", Value::Integer(3));
    assert_evals("-(10, 4)", Value::Integer(6));
    assert_evals("*(3, 4)", Value::Integer(12));
    assert_evals("/(9, 2)", Value::Real(4.5));
}

#[test]
fn bare_numerals_are_complete_expressions() {
    let expression = parse_line("42").unwrap();
    assert!(matches!(expression,
                     Expr::Literal { value: LiteralValue::Integer(42), .. }));

    assert_evals("42", Value::Integer(42));
    assert_evals("  3.5 ", Value::Real(3.5));
    assert_evals("-5", Value::Integer(-5));
}

#[test]
fn mixed_arithmetic_promotes_to_real() {
    assert_evals("add(1, 2.5)", Value::Real(3.5));
    assert!(eval_line("add(1, 2.5)").unwrap().is_real());
    assert!(eval_line("add(1, 2)").unwrap().is_integer());
}

#[test]
fn nested_expressions_evaluate_bottom_up() {
    assert_evals("add(2, mul(4, 6))", Value::Integer(26));
    assert_evals("add(1, sub(10, mul(2, 3)), div(9, 3))", Value::Integer(8));
}

#[test]
fn tokenizing_is_whitespace_insensitive() {
    assert_eq!(token_kinds("add(1,2)"), token_kinds("add ( 1 , 2 )"));

    let compact = parse_line("add(1,2)").unwrap();
    let spaced = parse_line("add ( 1 , 2 )").unwrap();
    assert_eq!(compact.to_string(), spaced.to_string());
    assert_eq!(eval(&compact).unwrap(), eval(&spaced).unwrap());
}

#[test]
fn tokens_carry_their_source_columns() {
    let columns = tokenize("add(1, 2)").unwrap()
                                       .into_iter()
                                       .map(|(_, column)| column)
                                       .collect::<Vec<_>>();
    assert_eq!(columns, vec![1, 4, 5, 6, 8, 9]);

    assert_eq!(parse_line("add(1, 2)").unwrap().column(), 1);
}

#[test]
fn trailing_tokens_are_rejected() {
    let err = parse_failure("add(1, 2) 3");
    assert!(matches!(&err,
                     ParseError::UnexpectedTrailingTokens { tokens, column: 11 }
                         if tokens == "3"));

    assert!(matches!(&parse_failure("add(1, 2) ) ,"),
                     ParseError::UnexpectedTrailingTokens { tokens, .. } if tokens == ") ,"));
}

#[test]
fn unknown_operators_are_rejected_at_parse_time() {
    let err = parse_failure(" pow(2, 3)");
    assert!(matches!(&err,
                     ParseError::UnknownOperator { name, column: 2 } if name == "pow"));
}

#[test]
fn mismatched_delimiters_are_rejected() {
    assert!(matches!(parse_failure("add 1, 2)"),
                     ParseError::ExpectedOpeningParen { column: 5 }));

    assert!(matches!(&parse_failure("add(1 2)"),
                     ParseError::UnexpectedToken { token, .. } if token == "2"));

    assert!(matches!(&parse_failure("add(1,)"),
                     ParseError::UnexpectedToken { token, .. } if token == ")"));

    assert!(matches!(&parse_failure("(1)"),
                     ParseError::UnexpectedToken { token, column: 1 } if token == "("));

    assert!(matches!(&parse_failure("add[1, 2)"),
                     ParseError::UnknownOperator { name, .. } if name == "add[1"));
}

#[test]
fn premature_end_of_input_is_reported() {
    assert!(matches!(parse_failure(""), ParseError::UnexpectedEndOfInput { column: 1 }));
    assert!(matches!(parse_failure("sub"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_failure("add("), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_failure("add(1,"), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn printed_trees_parse_back_to_equivalent_trees() {
    for source in ["add(2, mul(4, 6))",
                   "sub(1.5, 2)",
                   "42",
                   "3.5",
                   "mul()",
                   "div(7, 2)",
                   "+(1, -2)"]
    {
        let tree = parse_line(source).unwrap();
        let printed = tree.to_string();
        let reparsed = parse_line(&printed).unwrap();

        assert_eq!(printed, reparsed.to_string(), "round trip of '{source}'");
        assert_eq!(eval(&tree).unwrap(),
                   eval(&reparsed).unwrap(),
                   "round trip of '{source}'");
    }
}

#[test]
fn integer_arithmetic_is_checked() {
    assert!(matches!(eval_failure("add(9223372036854775807, 1)"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(eval_failure("sub(-9223372036854775808)"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn oversized_literals_are_rejected() {
    assert!(matches!(parse_failure("99999999999999999999"),
                     ParseError::LiteralTooLarge { .. }));

    // Integers past 2^53 lex, but cannot be promoted to real losslessly.
    let source = format!("add({}, 0.5)", MAX_SAFE_I64_INT + 1);
    let expression = parse_line(&source).unwrap();
    assert!(matches!(eval(&expression).unwrap_err(),
                     RuntimeError::LiteralTooLarge { .. }));
}

#[test]
fn values_print_in_their_own_numeric_category() {
    assert_eq!(eval_line("div(7, 2)").unwrap().to_string(), "3.5");
    assert_eq!(eval_line("add(0.5, 0.5)").unwrap().to_string(), "1.0");
    assert_eq!(eval_line("add(1, 2)").unwrap().to_string(), "3");
}

#[test]
fn interactive_loop_reports_values_and_errors_per_line() {
    let input = Cursor::new("add(2, mul(4, 6))\nsub()\n42\n");
    let mut output = Vec::new();

    read_eval_print_loop(input, &mut output).unwrap();

    let printed = String::from_utf8(output).unwrap();
    assert!(printed.starts_with("calc> "));
    assert_eq!(printed.matches("calc> ").count(), 4);
    assert!(printed.contains("26\n"));
    assert!(printed.contains("requires at least 1 argument(s)"));
    assert!(printed.contains("42\n"));
}
