//! # Rule Language - Syntax Types
//!
//! A rule compares two operand expressions with a relational operator:
//!
//! ```text
//! max(count('a'), sumof2(3, 5)) >= avgofallnumberfromstring
//! ```
//!
//! Operands are written as nested calls but are stored flat, as the prefix
//! (pre-order) serialization of a binary expression tree:
//!
//! ```text
//! max(count('a'), sumof2(3, 5))   =>   [max, count-a, sumof2, 3, 5]
//! ```
//!
//! ## Submodules
//!
//! - **[tokens]** - The atoms of an operand: functions, literals, counts and aggregates
//! - **[operators]** - The relational operators a rule can use
//! - **[rule]** - A complete rule: two token sequences and an operator
//!
//! ## Functions
//!
//! Every function takes exactly two arguments:
//!
//! - `max(a, b)` / `min(a, b)`
//! - `sumof2(a, b)` - `a + b`
//! - `avgof2(a, b)` - `(a + b) / 2`, floored
//!
//! ## Leaves
//!
//! - a non-negative integer literal
//! - `count('text')` - overlapping occurrences of `text` in the input string
//! - `sumofallnumberfromstring` - sum of every digit run in the input string
//! - `avgofallnumberfromstring` - floored average of those digit runs
pub mod operators;
pub mod rule;
pub mod tokens;

pub use operators::RelationalOp;
pub use rule::Rule;
pub use tokens::{Function, Token, TokenFormatError};
