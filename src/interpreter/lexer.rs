use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the calculator grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Real literal tokens, such as `3.5`, `.5`, `3.` or `2.1e-10`.
    /// A leading sign is part of the literal.
    #[regex(r"[+-]?[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_real, priority = 4)]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?", parse_real, priority = 4)]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+", parse_real, priority = 4)]
    Real(f64),
    /// Integer literal tokens, such as `42` or `-5`.
    #[regex(r"[+-]?[0-9]+", parse_integer, priority = 3)]
    Integer(i64),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Identifier tokens; operator names such as `add` or `+`.
    /// Any run of characters that is not whitespace, not a delimiter, and not
    /// a numeric literal is one identifier, so every input line tokenizes.
    #[regex(r"[^ \t\r\n\f(),]+", |lex| lex.slice().to_string(), priority = 1)]
    Identifier(String),
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a real literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid real.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the value does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Tokenizes one line of calculator input.
///
/// Produces the ordered token sequence, each token paired with its 1-based
/// source column. Whitespace separates tokens but carries no meaning, so
/// `add(1,2)` and `add ( 1 , 2 )` tokenize to the same sequence.
///
/// # Errors
/// The identifier rule accepts any non-delimiter run, so the only failure is
/// an integer literal too large for an `i64`.
///
/// ## Example
/// ```
/// use calclang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("add(1, 2)").unwrap();
/// assert_eq!(tokens[0], (Token::Identifier("add".to_string()), 1));
/// assert_eq!(tokens[2], (Token::Integer(1), 5));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start + 1;
        if let Ok(tok) = token {
            tokens.push((tok, column));
        } else {
            let slice = lexer.slice();
            if is_integer_literal(slice) {
                return Err(ParseError::LiteralTooLarge { column });
            }
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     column });
        }
    }

    Ok(tokens)
}

/// Tests whether a slice has the form of an integer literal.
///
/// Used to distinguish an oversized integer from a genuinely unlexable token
/// when the lexer reports a failure.
fn is_integer_literal(slice: &str) -> bool {
    let digits = slice.strip_prefix(['+', '-']).unwrap_or(slice);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
