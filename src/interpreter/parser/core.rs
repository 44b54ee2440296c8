use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, Operator},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::operands::parse_operands,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one complete line of calculator input.
///
/// This is the entry point for parsing. It tokenizes the line, parses exactly
/// one expression, and requires the token sequence to be fully consumed
/// afterwards.
///
/// Grammar: `line := expr`
///
/// # Parameters
/// - `source`: The raw input line.
///
/// # Returns
/// The parsed expression tree.
///
/// # Errors
/// - Any lexing or expression parsing error.
/// - `UnexpectedTrailingTokens` if tokens remain after a complete expression,
///   carrying the leftover tokens joined by spaces.
///
/// ## Example
/// ```
/// use calclang::interpreter::parser::core::parse_line;
///
/// let expression = parse_line("add(1, mul(2, 3))").unwrap();
/// assert_eq!(expression.to_string(), "add(1, mul(2, 3))");
///
/// assert!(parse_line("add(1, 2) 3").is_err());
/// ```
pub fn parse_line(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let expression = parse_expression(&mut iter, 1)?;

    if let Some((_, column)) = iter.peek() {
        let column = *column;
        let leftover = iter.map(|(token, _)| token.to_string())
                           .collect::<Vec<_>>()
                           .join(" ");
        return Err(ParseError::UnexpectedTrailingTokens { tokens: leftover,
                                                          column });
    }

    Ok(expression)
}

/// Parses a single expression.
///
/// This is the core recursive rule. The next token decides the variant: a
/// numeric literal is a complete expression by itself, while an identifier
/// names an operator and must be followed by a parenthesized operand list.
///
/// Grammar: `expr := NUMBER | IDENT '(' operands ')'`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `column`: Column of the enclosing construct, reported if the tokens run
///   out before an expression starts.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedEndOfInput` if no token remains.
/// - `UnknownOperator` if an identifier names no known operator.
/// - `ExpectedOpeningParen` if an operator name is not followed by `(`.
/// - `UnexpectedToken` if a delimiter appears in expression position.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, column: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((token, column)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { column });
    };

    match token {
        Token::Integer(n) => Ok(Expr::Literal { value:  LiteralValue::Integer(*n),
                                                column: *column, }),

        Token::Real(r) => Ok(Expr::Literal { value:  LiteralValue::Real(*r),
                                             column: *column, }),

        Token::Identifier(name) => {
            let Some(op) = Operator::from_name(name) else {
                return Err(ParseError::UnknownOperator { name:   name.clone(),
                                                         column: *column, });
            };

            match tokens.next() {
                Some((Token::LParen, _)) => {},
                Some((_, paren_column)) => {
                    return Err(ParseError::ExpectedOpeningParen { column: *paren_column });
                },
                None => return Err(ParseError::UnexpectedEndOfInput { column: *column }),
            }

            let operands = parse_operands(tokens, *column)?;

            Ok(Expr::Call { op,
                            operands,
                            column: *column })
        },

        other => Err(ParseError::UnexpectedToken { token:  other.to_string(),
                                                   column: *column, }),
    }
}
