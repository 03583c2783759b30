use serde::{Deserialize, Serialize};

use super::{RelationalOp, Token};

/// A comparison between two operand expressions.
///
/// Serializes to the stored form:
///
/// ```text
/// {"operand1": ["max", "1", "2"], "operator": ">=", "operand2": ["3"]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub operand1: Vec<Token>,
    pub operator: RelationalOp,
    pub operand2: Vec<Token>,
}

impl Rule {
    pub fn new(operand1: Vec<Token>, operator: RelationalOp, operand2: Vec<Token>) -> Self {
        Rule {
            operand1,
            operator,
            operand2,
        }
    }

    /// Whether either operand reads the input string's aggregates.
    pub fn uses_aggregates(&self) -> bool {
        self.operand1
            .iter()
            .chain(&self.operand2)
            .any(Token::is_aggregate)
    }
}
