use serde::{Deserialize, Serialize};

/// What `sumofallnumberfromstring` and `avgofallnumberfromstring` mean for an
/// input string that contains no digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum EmptyAggregatePolicy {
    /// Both aggregates evaluate to 0
    #[default]
    Zero,
    /// Evaluating an operand that references an aggregate fails
    Reject,
}

/// Evaluation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub empty_aggregates: EmptyAggregatePolicy,
}

impl Config {
    pub fn new(empty_aggregates: EmptyAggregatePolicy) -> Self {
        Config { empty_aggregates }
    }
}
