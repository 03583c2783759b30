//! Check an input string against rules given on the command line

use super::CliError;
use crate::{parse_rule, Config, Evaluator, Rule};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Rule texts, checked in order
    pub rules: Vec<String>,
    /// The string the rules are checked against
    pub input: Option<String>,
    /// Evaluation settings
    pub config: Config,
}

/// Parse every rule and check the input against each of them.
///
/// Returns one boolean per rule, in the order the rules were given.
pub fn execute_check(options: &CheckOptions) -> Result<Vec<bool>, CliError> {
    let rules = options
        .rules
        .iter()
        .map(|text| parse_rule(text))
        .collect::<Result<Vec<Rule>, _>>()?;

    let input = options.input.as_deref().ok_or(CliError::NoInput)?;

    let evaluator = Evaluator::new(options.config);
    Ok(evaluator.eval_rules(&rules, input)?)
}
