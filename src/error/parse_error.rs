#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The column where the error occurred.
        column: usize,
    },
    /// Reached the end of the line unexpectedly.
    UnexpectedEndOfInput {
        /// The column where the error occurred.
        column: usize,
    },
    /// An opening parenthesis `(` was expected after an operator name.
    ExpectedOpeningParen {
        /// The column where the error occurred.
        column: usize,
    },
    /// An identifier did not name any known operator.
    UnknownOperator {
        /// The unrecognized operator name.
        name:   String,
        /// The column where the error occurred.
        column: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The leftover tokens, joined by spaces.
        tokens: String,
        /// The column of the first leftover token.
        column: usize,
    },
    /// A numeric literal was too large to be represented safely.
    LiteralTooLarge {
        /// The column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { column } => {
                write!(f, "Error at column {column}: Unexpected end of input.")
            },

            Self::ExpectedOpeningParen { column } => write!(f,
                                                            "Error at column {column}: Expected opening parenthesis '(' after operator name."),

            Self::UnknownOperator { name, column } => {
                write!(f, "Error at column {column}: Unknown operator '{name}'.")
            },

            Self::UnexpectedTrailingTokens { tokens, column } => write!(f,
                                                                        "Error at column {column}: Extra token(s) after expression: {tokens}"),

            Self::LiteralTooLarge { column } => {
                write!(f, "Error at column {column}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
