//! Runtime operator selection.

use std::fmt;
use std::str::FromStr;

/// One of the six relational operators, chosen at runtime.
///
/// # Examples
///
/// ```
/// use dry_comparisons::Operator;
///
/// let op: Operator = "<=".parse().unwrap();
/// assert_eq!(op, Operator::Le);
/// assert_eq!(op.mirrored(), Operator::Ge);
/// assert!(op.apply(&2, &3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Operator; 6] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
    ];

    /// The operator as it is written in source code.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }

    /// The operator that gives the same answer once the operands are swapped.
    ///
    /// `a < b` is `b > a`, `a <= b` is `b >= a`; equality operators are
    /// their own mirror.
    pub const fn mirrored(self) -> Self {
        match self {
            Operator::Eq => Operator::Eq,
            Operator::Ne => Operator::Ne,
            Operator::Lt => Operator::Gt,
            Operator::Le => Operator::Ge,
            Operator::Gt => Operator::Lt,
            Operator::Ge => Operator::Le,
        }
    }

    /// Evaluates `a OP b` with the operand types' own operator methods.
    #[inline]
    pub fn apply<A, B>(self, a: &A, b: &B) -> bool
    where
        A: ?Sized + PartialOrd<B>,
        B: ?Sized,
    {
        match self {
            Operator::Eq => a.eq(b),
            Operator::Ne => a.ne(b),
            Operator::Lt => a.lt(b),
            Operator::Le => a.le(b),
            Operator::Gt => a.gt(b),
            Operator::Ge => a.ge(b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when a string does not spell one of the six operators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown relational operator `{input}` (expected one of ==, !=, <, <=, >, >=)")]
pub struct ParseOperatorError {
    /// The rejected input, as given.
    pub input: String,
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "==" => Ok(Operator::Eq),
            "!=" => Ok(Operator::Ne),
            "<" => Ok(Operator::Lt),
            "<=" => Ok(Operator::Le),
            ">" => Ok(Operator::Gt),
            ">=" => Ok(Operator::Ge),
            _ => Err(ParseOperatorError {
                input: s.to_string(),
            }),
        }
    }
}
