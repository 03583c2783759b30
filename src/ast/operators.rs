use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Relational operators a rule can compare its operands with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RelationalOp {
    /// Less than (`<`)
    LessThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    GreaterThan,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal (`=`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
}

impl RelationalOp {
    pub fn symbol(self) -> &'static str {
        match self {
            RelationalOp::LessThan => "<",
            RelationalOp::LessEqual => "<=",
            RelationalOp::GreaterThan => ">",
            RelationalOp::GreaterEqual => ">=",
            RelationalOp::Equal => "=",
            RelationalOp::NotEqual => "!=",
        }
    }

    /// Compares two operand results.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulecheck::RelationalOp;
    ///
    /// assert!(RelationalOp::GreaterEqual.compare(10, 5));
    /// assert!(!RelationalOp::GreaterEqual.compare(14, 15));
    /// ```
    pub fn compare(self, left: i64, right: i64) -> bool {
        match self {
            RelationalOp::LessThan => left < right,
            RelationalOp::LessEqual => left <= right,
            RelationalOp::GreaterThan => left > right,
            RelationalOp::GreaterEqual => left >= right,
            RelationalOp::Equal => left == right,
            RelationalOp::NotEqual => left != right,
        }
    }
}

impl fmt::Display for RelationalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown relational operator '{0}'")]
pub struct UnknownOperator(pub String);

impl FromStr for RelationalOp {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(RelationalOp::LessThan),
            "<=" => Ok(RelationalOp::LessEqual),
            ">" => Ok(RelationalOp::GreaterThan),
            ">=" => Ok(RelationalOp::GreaterEqual),
            "=" => Ok(RelationalOp::Equal),
            "!=" => Ok(RelationalOp::NotEqual),
            _ => Err(UnknownOperator(s.to_string())),
        }
    }
}

impl TryFrom<String> for RelationalOp {
    type Error = UnknownOperator;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RelationalOp> for String {
    fn from(op: RelationalOp) -> Self {
        op.symbol().to_string()
    }
}

/// Applies `op` to two operand results.
pub fn compare(left: i64, right: i64, op: RelationalOp) -> bool {
    op.compare(left, right)
}
