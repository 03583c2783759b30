//! Rule management and checking on behalf of an authenticated owner.
//!
//! Authentication happens before these calls; the owner is an opaque key.

use thiserror::Error;

use crate::{
    config::Config,
    evaluator::{EvalContext, EvalError, Evaluator},
    parser::{parse_rule, ParseError},
    store::{RuleId, RuleStore, StoreError, StoredRule},
};

const LOG_TARGET: &str = "service";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("rule {id}: {source}")]
    Eval { id: RuleId, source: EvalError },

    /// The rule does not exist or belongs to another owner
    #[error("rule {0} does not exist or does not belong to the owner")]
    NotFound(RuleId),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ServiceError::NotFound(id),
        }
    }
}

/// Creates, updates, deletes and checks rules held in a [`RuleStore`].
#[derive(Debug)]
pub struct RuleService<S> {
    store: S,
    evaluator: Evaluator,
}

impl<S: RuleStore> RuleService<S> {
    pub fn new(store: S, config: Config) -> Self {
        RuleService {
            store,
            evaluator: Evaluator::new(config),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses `text` and stores the rule for `owner`.
    pub fn create_rule(&mut self, owner: &str, text: &str) -> Result<StoredRule, ServiceError> {
        let rule = parse_rule(text).inspect_err(|e| {
            log::warn!(target: LOG_TARGET, "Rejected rule '{text}' for {owner}: {e}");
        })?;

        let id = self.store.insert(owner, rule.clone());
        log::info!(target: LOG_TARGET, "Stored rule {id} for {owner}");

        Ok(StoredRule {
            id,
            owner: owner.to_string(),
            rule,
        })
    }

    /// Replaces one of `owner`'s rules with newly parsed `text`.
    pub fn update_rule(&mut self, owner: &str, id: RuleId, text: &str) -> Result<StoredRule, ServiceError> {
        self.owned(owner, id)?;
        let rule = parse_rule(text).inspect_err(|e| {
            log::warn!(target: LOG_TARGET, "Rejected update of rule {id} to '{text}': {e}");
        })?;

        let updated = self.store.update(id, rule)?;
        log::info!(target: LOG_TARGET, "Updated rule {id} for {owner}");
        Ok(updated)
    }

    /// Deletes one of `owner`'s rules.
    pub fn delete_rule(&mut self, owner: &str, id: RuleId) -> Result<StoredRule, ServiceError> {
        self.owned(owner, id)?;
        let removed = self.store.remove(id)?;
        log::info!(target: LOG_TARGET, "Deleted rule {id} for {owner}");
        Ok(removed)
    }

    /// Every rule of `owner`, oldest first.
    pub fn rules(&self, owner: &str) -> Vec<StoredRule> {
        self.store.rules_of(owner)
    }

    /// Checks `input` against every rule of `owner`, oldest rule first.
    pub fn check(&self, owner: &str, input: &str) -> Result<Vec<bool>, ServiceError> {
        let rules = self.store.rules_of(owner);
        log::debug!(target: LOG_TARGET, "Checking {} rule(s) of {owner}", rules.len());
        self.check_rules(&rules, input)
    }

    /// Checks each input string against every rule of `owner`.
    ///
    /// Returns one row per input, in input order.
    pub fn check_batch<I>(&self, owner: &str, inputs: I) -> Result<Vec<Vec<bool>>, ServiceError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let rules = self.store.rules_of(owner);
        inputs
            .into_iter()
            .map(|input| self.check_rules(&rules, input.as_ref()))
            .collect()
    }

    fn check_rules(&self, rules: &[StoredRule], input: &str) -> Result<Vec<bool>, ServiceError> {
        let ctx = EvalContext::from_input(input, self.evaluator.config().empty_aggregates);
        rules
            .iter()
            .map(|stored| {
                self.evaluator
                    .eval_rule_in(&stored.rule, &ctx)
                    .map_err(|source| ServiceError::Eval { id: stored.id, source })
            })
            .collect()
    }

    fn owned(&self, owner: &str, id: RuleId) -> Result<StoredRule, ServiceError> {
        self.store
            .get(id)
            .filter(|stored| stored.owner == owner)
            .ok_or(ServiceError::NotFound(id))
    }
}
