/// Represents a literal numeric value in the language.
///
/// `LiteralValue` covers the raw constant values that can appear directly in
/// an input line. It is used in the expression tree to represent literal
/// leaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Whole reals keep their fractional point so the printed form
            // classifies as a real again when re-tokenized.
            Self::Real(r) if r.is_finite() && r.fract() == 0.0 => write!(f, "{r:.1}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

/// An expression tree node.
///
/// `Expr` has exactly two variants: a numeric literal leaf, and a call node
/// holding an operator and its ordered operand subtrees. A call exclusively
/// owns its operands, so the tree is free of shared or cyclic references.
/// Trees are immutable after parsing; evaluation borrows them and the same
/// tree evaluates to the same value every time.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal numeric value; a leaf with no children.
    Literal {
        /// The constant value.
        value:  LiteralValue,
        /// Column number in the input line.
        column: usize,
    },
    /// An operator applied to zero or more operand expressions.
    Call {
        /// The operator to apply.
        op:       Operator,
        /// The ordered operand subtrees.
        operands: Vec<Self>,
        /// Column number in the input line.
        column:   usize,
    },
}

impl Expr {
    /// Gets the column number from `self`.
    /// ## Example
    /// ```
    /// use calclang::ast::{Expr, LiteralValue};
    ///
    /// let expr = Expr::Literal { value:  LiteralValue::Integer(5),
    ///                            column: 3, };
    ///
    /// assert_eq!(expr.column(), 3);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Literal { column, .. } | Self::Call { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Call { op, operands, .. } => {
                write!(f, "{op}(")?;

                for (index, operand) in operands.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{operand}")?;
                }

                write!(f, ")")
            },
        }
    }
}

/// Represents an arithmetic operator.
///
/// The operator set is a closed enumeration; every identifier in an input
/// line must resolve to one of these variants during parsing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`add`, `+`)
    Add,
    /// Subtraction and negation (`sub`, `-`)
    Sub,
    /// Multiplication (`mul`, `*`)
    Mul,
    /// Division (`div`, `/`)
    Div,
}

impl Operator {
    /// Resolves an operator name to its variant.
    ///
    /// Each operator is accepted in a long form and a symbolic alias.
    /// Returns `None` for any name outside the operator table.
    ///
    /// ## Example
    /// ```
    /// use calclang::ast::Operator;
    ///
    /// assert_eq!(Operator::from_name("add"), Some(Operator::Add));
    /// assert_eq!(Operator::from_name("+"), Some(Operator::Add));
    /// assert!(Operator::from_name("pow").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "add" | "+" => Some(Self::Add),
            "sub" | "-" => Some(Self::Sub),
            "mul" | "*" => Some(Self::Mul),
            "div" | "/" => Some(Self::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The long form is canonical; printed trees re-parse to the same
        // operator.
        let operator = match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        };
        write!(f, "{operator}")
    }
}
