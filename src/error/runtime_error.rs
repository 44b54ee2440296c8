#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An operator received fewer arguments than it requires.
    NotEnoughArguments {
        /// The name of the operator.
        op:      String,
        /// The smallest accepted argument count.
        minimum: usize,
        /// The column where the error occurred.
        column:  usize,
    },
    /// An operator received the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the operator.
        op:       String,
        /// The required argument count.
        expected: usize,
        /// The argument count actually supplied.
        found:    usize,
        /// The column where the error occurred.
        column:   usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The column where the error occurred.
        column: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The column where the error occurred.
        column: usize,
    },
    /// An integer was too large to be promoted to a real without data loss.
    LiteralTooLarge {
        /// The column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEnoughArguments { op, minimum, column } => write!(f,
                                                                      "Error at column {column}: Operator '{op}' requires at least {minimum} argument(s)."),

            Self::ArgumentCountMismatch { op,
                                          expected,
                                          found,
                                          column, } => write!(f,
                                                              "Error at column {column}: Operator '{op}' requires exactly {expected} arguments, but {found} were given."),

            Self::DivisionByZero { column } => {
                write!(f, "Error at column {column}: Division by zero.")
            },

            Self::Overflow { column } => write!(f,
                                                "Error at column {column}: Integer overflow while trying to compute result."),

            Self::LiteralTooLarge { column } => {
                write!(f, "Error at column {column}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
