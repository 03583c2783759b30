//! Rule storage.
//!
//! The engine never persists anything itself; it talks to storage through
//! [`RuleStore`]. [`MemoryRuleStore`] keeps rules in process.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ast::Rule;

/// Identifier assigned to a rule when it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(pub u64);

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rule together with its id and the owner it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRule {
    pub id: RuleId,
    pub owner: String,
    #[serde(flatten)]
    pub rule: Rule,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("rule {0} does not exist")]
    NotFound(RuleId),
}

/// Storage for rules, keyed by id and grouped by owner.
pub trait RuleStore {
    /// Stores a new rule for `owner` and returns its id.
    fn insert(&mut self, owner: &str, rule: Rule) -> RuleId;

    fn get(&self, id: RuleId) -> Option<StoredRule>;

    /// Replaces the rule stored under `id`, keeping its owner.
    fn update(&mut self, id: RuleId, rule: Rule) -> Result<StoredRule, StoreError>;

    fn remove(&mut self, id: RuleId) -> Result<StoredRule, StoreError>;

    /// Every rule of `owner`, oldest first.
    fn rules_of(&self, owner: &str) -> Vec<StoredRule>;
}

/// In-process [`RuleStore`]. Ids are assigned in increasing order.
#[derive(Debug, Default)]
pub struct MemoryRuleStore {
    rules: BTreeMap<RuleId, StoredRule>,
    next_id: u64,
}

impl MemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl RuleStore for MemoryRuleStore {
    fn insert(&mut self, owner: &str, rule: Rule) -> RuleId {
        self.next_id += 1;
        let id = RuleId(self.next_id);
        self.rules.insert(
            id,
            StoredRule {
                id,
                owner: owner.to_string(),
                rule,
            },
        );
        id
    }

    fn get(&self, id: RuleId) -> Option<StoredRule> {
        self.rules.get(&id).cloned()
    }

    fn update(&mut self, id: RuleId, rule: Rule) -> Result<StoredRule, StoreError> {
        let stored = self.rules.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        stored.rule = rule;
        Ok(stored.clone())
    }

    fn remove(&mut self, id: RuleId) -> Result<StoredRule, StoreError> {
        self.rules.remove(&id).ok_or(StoreError::NotFound(id))
    }

    fn rules_of(&self, owner: &str) -> Vec<StoredRule> {
        self.rules
            .values()
            .filter(|stored| stored.owner == owner)
            .cloned()
            .collect()
    }
}
