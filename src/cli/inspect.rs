//! Show how rule text is tokenized and parsed

use super::CliError;
use crate::{parse_rule, Lexer, Rule, Token};

/// Tokenize a single operand.
pub fn execute_tokenize(operand: &str) -> Result<Vec<Token>, CliError> {
    Ok(Lexer::new(operand).tokenize()?)
}

/// Parse a complete rule into its stored form.
pub fn execute_parse(rule: &str) -> Result<Rule, CliError> {
    Ok(parse_rule(rule)?)
}
