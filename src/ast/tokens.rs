use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Keyword that introduces a substring count: `count('text')`.
pub const COUNT_KEYWORD: &str = "count";

/// Keyword for the sum of every number found in the input string.
pub const SUM_ALL_KEYWORD: &str = "sumofallnumberfromstring";

/// Keyword for the floored average of every number found in the input string.
pub const AVG_ALL_KEYWORD: &str = "avgofallnumberfromstring";

/// Separator between `count` and its substring in the stored form (`count-aa`).
const COUNT_SEPARATOR: char = '-';

/// A binary function of the rule language.
///
/// Every function takes exactly two arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Larger of the two arguments (`max`)
    Max,
    /// Smaller of the two arguments (`min`)
    Min,
    /// Sum of the two arguments (`sumof2`)
    SumOf2,
    /// Floored average of the two arguments (`avgof2`)
    AvgOf2,
}

impl Function {
    pub const ALL: [Function; 4] = [Function::Max, Function::Min, Function::SumOf2, Function::AvgOf2];

    /// The lower-case keyword of the function.
    pub fn name(self) -> &'static str {
        match self {
            Function::Max => "max",
            Function::Min => "min",
            Function::SumOf2 => "sumof2",
            Function::AvgOf2 => "avgof2",
        }
    }

    /// Looks a function up by its lower-case keyword.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Applies the function to its left and right argument.
    ///
    /// Operands are non-negative in practice, so `avgof2` floors by plain
    /// integer division. Sums saturate instead of overflowing.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulecheck::Function;
    ///
    /// assert_eq!(Function::Max.apply(1, 2), 2);
    /// assert_eq!(Function::AvgOf2.apply(230, 32), 131);
    /// assert_eq!(Function::AvgOf2.apply(6, 3), 4);
    /// ```
    pub fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Function::Max => left.max(right),
            Function::Min => left.min(right),
            Function::SumOf2 => left.saturating_add(right),
            Function::AvgOf2 => left / 2 + right / 2 + (left % 2 + right % 2) / 2,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One atom of an operand expression.
///
/// An operand is a sequence of tokens in prefix order: a [`Token::Function`]
/// is followed by the serialization of its left argument and then its right
/// argument. Every other variant is a leaf.
///
/// Tokens are stored in a flat string form, which is also their serde form:
///
/// ```text
/// max  min  sumof2  avgof2      functions
/// 42                            number literal
/// count-aa                      count occurrences of "aa"
/// sumofallnumberfromstring      sum of all numbers in the input
/// avgofallnumberfromstring      average of all numbers in the input
/// ```
///
/// # Examples
///
/// ```
/// use rulecheck::{Function, Token};
///
/// let token: Token = "count-aa".parse().unwrap();
/// assert_eq!(token, Token::Count("aa".to_string()));
/// assert_eq!(Token::Function(Function::SumOf2).to_string(), "sumof2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Token {
    /// Binary function, always followed by two sub-expressions
    Function(Function),

    /// Non-negative integer literal
    ///
    /// # Examples
    /// ```text
    /// 3
    /// 175
    /// ```
    Number(i64),

    /// Count of (possibly overlapping) occurrences of a substring in the input
    ///
    /// # Examples
    /// ```text
    /// count('a')
    /// count("ab")
    /// ```
    Count(String),

    /// Sum of every digit run in the input string
    SumAll,

    /// Floored average of every digit run in the input string
    AvgAll,
}

impl Token {
    /// Whether the token is a leaf of the expression tree.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Token::Function(_))
    }

    /// Whether the token reads the input string's aggregates.
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Token::SumAll | Token::AvgAll)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Function(func) => write!(f, "{func}"),
            Token::Number(n) => write!(f, "{n}"),
            Token::Count(s) => write!(f, "{COUNT_KEYWORD}{COUNT_SEPARATOR}{s}"),
            Token::SumAll => f.write_str(SUM_ALL_KEYWORD),
            Token::AvgAll => f.write_str(AVG_ALL_KEYWORD),
        }
    }
}

/// A string that is not the stored form of any token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid token")]
pub struct TokenFormatError(pub String);

impl FromStr for Token {
    type Err = TokenFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(func) = Function::from_name(s) {
            return Ok(Token::Function(func));
        }

        match s {
            SUM_ALL_KEYWORD => return Ok(Token::SumAll),
            AVG_ALL_KEYWORD => return Ok(Token::AvgAll),
            _ => {}
        }

        if let Some(substring) = s
            .strip_prefix(COUNT_KEYWORD)
            .and_then(|rest| rest.strip_prefix(COUNT_SEPARATOR))
            .filter(|rest| !rest.is_empty())
        {
            return Ok(Token::Count(substring.to_string()));
        }

        if is_decimal(s) {
            return s
                .parse::<i64>()
                .map(Token::Number)
                .map_err(|_| TokenFormatError(s.to_string()));
        }

        Err(TokenFormatError(s.to_string()))
    }
}

impl TryFrom<String> for Token {
    type Error = TokenFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.to_string()
    }
}

/// Non-empty run of ASCII digits.
pub(crate) fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
