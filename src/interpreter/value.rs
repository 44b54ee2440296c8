use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value of the calculator.
///
/// This enum models the two numeric types a calculation can produce.
/// Integers and reals coexist; arithmetic promotes to real wherever a real
/// operand participates and stays integral otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A real value (double precision floating-point).
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Real(n) => (*n).into(),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Reals are returned unchanged. For integers, conversion fails if the
    /// value is too large to be represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `column`: Column number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is real or a safe integer.
    /// - `Err(RuntimeError::LiteralTooLarge)`: If the integer is not exactly
    ///   representable.
    ///
    /// # Example
    /// ```
    /// use calclang::interpreter::value::Value;
    ///
    /// let x = Value::Integer(10);
    /// let real = x.as_real(42).unwrap();
    ///
    /// assert_eq!(real, 10.0);
    /// ```
    pub fn as_real(&self, column: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => {
                i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge { column })
            },
        }
    }

    /// Returns the arithmetic negation of the value.
    ///
    /// # Parameters
    /// - `column`: Column number for error reporting.
    ///
    /// # Returns
    /// - `Ok(Value)`: The negated value.
    /// - `Err(RuntimeError::Overflow)`: If integer negation overflows.
    pub fn negated(&self, column: usize) -> EvalResult<Self> {
        match self {
            Self::Integer(n) => {
                n.checked_neg()
                 .map_or(Err(RuntimeError::Overflow { column }), |n| Ok(Self::Integer(n)))
            },
            Self::Real(r) => Ok(Self::Real(-r)),
        }
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Real`].
    ///
    /// [`Real`]: Value::Real
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Whole reals keep their fractional point, so a division result
            // reads as a real.
            Self::Real(r) if r.is_finite() && r.fract() == 0.0 => write!(f, "{r:.1}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
