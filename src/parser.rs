use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{
    ast::{RelationalOp, Rule, Token},
    lexer::{parentheses_balanced, LexError, Lexer},
    reduce::Malformed,
    validator,
};

const LOG_TARGET: &str = "parser";

/// Leftmost relational operator. Two-character operators win over their
/// one-character prefixes at the same position.
static OPERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<=|>=|!=|<|>|=").expect("operator pattern is valid"));

/// Which side of a rule an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left operand"),
            Side::Right => write!(f, "right operand"),
        }
    }
}

/// Why an operand was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Structure(#[from] Malformed),
}

/// Errors produced while turning rule text into a [`Rule`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unbalanced parentheses, no operator, or nothing after the operator
    #[error("Rule is not in format")]
    NotInFormat,

    /// An operand that does not tokenize or is not a single binary tree
    #[error("Invalid Rule: {side}: {source}")]
    InvalidRule { side: Side, source: OperandError },
}

/// Parses rule text such as `max(count('a'), 3) >= sumof2(1, 2)`.
///
/// # Examples
///
/// ```
/// use rulecheck::{parse_rule, ParseError, RelationalOp};
///
/// let rule = parse_rule("max(1, 2) != 3").unwrap();
/// assert_eq!(rule.operator, RelationalOp::NotEqual);
///
/// assert_eq!(parse_rule("max(1, 2"), Err(ParseError::NotInFormat));
/// ```
pub fn parse_rule(text: &str) -> Result<Rule, ParseError> {
    if !parentheses_balanced(text) {
        log::debug!(target: LOG_TARGET, "Unbalanced parentheses in '{text}'");
        return Err(ParseError::NotInFormat);
    }

    let found = OPERATOR.find(text).ok_or(ParseError::NotInFormat)?;
    let (left, right) = (&text[..found.start()], &text[found.end()..]);
    if right.is_empty() {
        return Err(ParseError::NotInFormat);
    }

    let operator = found
        .as_str()
        .parse::<RelationalOp>()
        .map_err(|_| ParseError::NotInFormat)?;

    let rule = Rule::new(
        parse_operand(left, Side::Left)?,
        operator,
        parse_operand(right, Side::Right)?,
    );

    log::debug!(target: LOG_TARGET, "Parsed '{text}' into {rule:?}");
    Ok(rule)
}

/// Tokenizes and checks one side of a rule.
pub fn parse_operand(text: &str, side: Side) -> Result<Vec<Token>, ParseError> {
    let invalid = |source: OperandError| ParseError::InvalidRule { side, source };

    let tokens = Lexer::new(text)
        .tokenize()
        .map_err(|e| invalid(e.into()))?;
    validator::check(&tokens).map_err(|e| invalid(e.into()))?;

    Ok(tokens)
}
