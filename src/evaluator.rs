use thiserror::Error;

use crate::{
    aggregate::Aggregates,
    ast::{Rule, Token},
    config::{Config, EmptyAggregatePolicy},
    reduce::{reduce, Malformed},
};

const LOG_TARGET: &str = "evaluator";

/// Everything an operand can read while it is evaluated.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    /// The string `count(...)` searches
    pub input: &'a str,
    /// Value of `sumofallnumberfromstring`, `None` if unavailable
    pub sum: Option<i64>,
    /// Value of `avgofallnumberfromstring`, `None` if unavailable
    pub average: Option<i64>,
}

impl<'a> EvalContext<'a> {
    /// Context with aggregates supplied by the caller.
    pub fn new(input: &'a str, sum: i64, average: i64) -> Self {
        EvalContext {
            input,
            sum: Some(sum),
            average: Some(average),
        }
    }

    /// Context with aggregates extracted from `input`.
    ///
    /// When `input` holds no numbers, `policy` decides whether the aggregates
    /// read as 0 or are unavailable.
    pub fn from_input(input: &'a str, policy: EmptyAggregatePolicy) -> Self {
        let aggregates = Aggregates::extract(input);

        match (aggregates.average(), policy) {
            (Some(average), _) => EvalContext::new(input, aggregates.sum, average),
            (None, EmptyAggregatePolicy::Zero) => EvalContext::new(input, 0, 0),
            (None, EmptyAggregatePolicy::Reject) => EvalContext {
                input,
                sum: None,
                average: None,
            },
        }
    }
}

/// Errors that can occur while evaluating an operand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The operand was not validated before evaluation
    #[error("cannot evaluate a malformed expression: {0}")]
    Malformed(#[from] Malformed),

    /// The operand reads an aggregate of an input string without numbers
    #[error("input contains no numbers to aggregate")]
    NoNumbers,
}

/// Evaluates rules against input strings.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: Config,
}

impl Evaluator {
    pub fn new(config: Config) -> Self {
        Evaluator { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reduces one operand to its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulecheck::{EvalContext, Evaluator};
    /// use rulecheck::lexer::tokenize;
    ///
    /// let tokens = tokenize("sumof2(5, avgof2(6, count('b')))");
    /// let ctx = EvalContext::new("abcabcabc", 0, 0);
    /// assert_eq!(Evaluator::default().eval_operand(&tokens, &ctx), Ok(9));
    /// ```
    pub fn eval_operand(&self, tokens: &[Token], ctx: &EvalContext<'_>) -> Result<i64, EvalError> {
        reduce(
            tokens,
            |token| match token {
                Token::Number(n) => Ok(*n),
                Token::Count(needle) => Ok(count_occurrences(ctx.input, needle)),
                Token::SumAll => ctx.sum.ok_or(EvalError::NoNumbers),
                Token::AvgAll => ctx.average.ok_or(EvalError::NoNumbers),
                Token::Function(_) => Err(EvalError::Malformed(Malformed::Unfinished)),
            },
            |func, left, right| func.apply(left, right),
        )
    }

    /// Evaluates both operands of `rule` and compares them.
    pub fn eval_rule(&self, rule: &Rule, input: &str) -> Result<bool, EvalError> {
        let ctx = EvalContext::from_input(input, self.config.empty_aggregates);
        self.eval_rule_in(rule, &ctx)
    }

    /// Evaluates every rule against one input string.
    ///
    /// The input's aggregates are computed once and shared by all rules.
    pub fn eval_rules<'r>(
        &self,
        rules: impl IntoIterator<Item = &'r Rule>,
        input: &str,
    ) -> Result<Vec<bool>, EvalError> {
        let ctx = EvalContext::from_input(input, self.config.empty_aggregates);
        rules
            .into_iter()
            .map(|rule| self.eval_rule_in(rule, &ctx))
            .collect()
    }

    /// Evaluates `rule` in a context that is already built.
    pub fn eval_rule_in(&self, rule: &Rule, ctx: &EvalContext<'_>) -> Result<bool, EvalError> {
        let left = self.eval_operand(&rule.operand1, ctx)?;
        let right = self.eval_operand(&rule.operand2, ctx)?;
        let result = rule.operator.compare(left, right);

        log::trace!(target: LOG_TARGET, "{left} {} {right} => {result}", rule.operator);
        Ok(result)
    }
}

/// Evaluates a validated operand with explicit aggregates.
///
/// # Examples
///
/// ```
/// use rulecheck::evaluate;
/// use rulecheck::lexer::tokenize;
///
/// assert_eq!(evaluate(&tokenize("max(1, 2)"), "", 0, 0), Ok(2));
/// assert_eq!(evaluate(&tokenize("count('aa')"), "aaaaa aa aaa", 0, 0), Ok(7));
/// ```
pub fn evaluate(tokens: &[Token], input: &str, sum: i64, average: i64) -> Result<i64, EvalError> {
    Evaluator::default().eval_operand(tokens, &EvalContext::new(input, sum, average))
}

/// Counts occurrences of `needle` in `haystack`, overlaps included.
///
/// Each search resumes one character past the start of the previous match.
pub fn count_occurrences(haystack: &str, needle: &str) -> i64 {
    let Some(step) = needle.chars().next().map(char::len_utf8) else {
        return 0;
    };

    let mut count: i64 = 0;
    let mut position = 0;
    while let Some(offset) = haystack.get(position..).and_then(|rest| rest.find(needle)) {
        count += 1;
        position += offset + step;
    }
    count
}
