//! Check a batch of input strings against stored rules

use super::CliError;
use crate::{Config, MemoryRuleStore, Rule, RuleService, RuleStore};

/// Owner the batch rules are loaded under.
const BATCH_OWNER: &str = "batch";

/// Options for the batch command
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// JSON array of stored rules: `[{"operand1": [...], "operator": "<", "operand2": [...]}]`
    pub rules: String,
    /// JSON array of input strings
    pub inputs: Option<String>,
    /// Evaluation settings
    pub config: Config,
}

/// Check every input string against every stored rule.
///
/// Returns one row per input string with one boolean per rule.
pub fn execute_batch(options: &BatchOptions) -> Result<Vec<Vec<bool>>, CliError> {
    let rules: Vec<Rule> = serde_json::from_str(&options.rules)?;

    let inputs_json = options.inputs.as_ref().ok_or(CliError::NoInput)?;
    let inputs: Vec<String> = serde_json::from_str(inputs_json)?;

    let mut store = MemoryRuleStore::new();
    for rule in rules {
        let _ = store.insert(BATCH_OWNER, rule);
    }

    let service = RuleService::new(store, options.config);
    Ok(service.check_batch(BATCH_OWNER, &inputs)?)
}
