use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses the operand list of a call expression.
///
/// The opening parenthesis has already been consumed. Operands are parsed
/// until the matching `)`; every operand after the first must be preceded by
/// a comma. An immediate `)` produces an empty operand list.
///
/// Grammar: `operands := (expr (',' expr)*)? ')'`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `(`.
/// - `column`: Column of the operator name, reported if the tokens run out
///   before the list is closed.
///
/// # Returns
/// The ordered operand expressions.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the line ends inside the operand list.
/// - `UnexpectedToken` if an operand separator is neither `,` nor `)`.
/// - Propagates any errors from operand sub-expression parsing.
pub fn parse_operands<'a, I>(tokens: &mut Peekable<I>, column: usize) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut operands = Vec::new();

    loop {
        match tokens.peek() {
            None => return Err(ParseError::UnexpectedEndOfInput { column }),

            Some((Token::RParen, _)) => {
                tokens.next();
                return Ok(operands);
            },

            Some((Token::Comma, comma_column)) if !operands.is_empty() => {
                let comma_column = *comma_column;
                tokens.next();
                operands.push(parse_expression(tokens, comma_column)?);
            },

            Some((token, token_column)) if !operands.is_empty() => {
                return Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                                         column: *token_column, });
            },

            Some((_, token_column)) => {
                let token_column = *token_column;
                operands.push(parse_expression(tokens, token_column)?);
            },
        }
    }
}
