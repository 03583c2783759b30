pub mod aggregate;
pub mod ast;
pub mod cli;
pub mod config;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod reduce;
pub mod service;
pub mod store;
pub mod validator;

pub use aggregate::{extract_aggregates, Aggregates};
pub use ast::{operators::compare, Function, RelationalOp, Rule, Token};
pub use config::{Config, EmptyAggregatePolicy};
pub use evaluator::{evaluate, EvalContext, EvalError, Evaluator};
pub use lexer::{parentheses_balanced, tokenize, LexError, Lexer};
pub use parser::{parse_rule, ParseError};
pub use reduce::Malformed;
pub use service::{RuleService, ServiceError};
pub use store::{MemoryRuleStore, RuleId, RuleStore, StoredRule};
pub use validator::is_well_formed;
