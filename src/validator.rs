use crate::{
    ast::Token,
    reduce::{reduce, Malformed},
};

/// Checks that `tokens` is the prefix serialization of exactly one binary
/// tree: every function has two arguments and nothing is left over.
///
/// # Examples
///
/// ```
/// use rulecheck::lexer::tokenize;
/// use rulecheck::validator::is_well_formed;
///
/// assert!(is_well_formed(&tokenize("avgof2(sumof2(1, 2), 3)")));
/// assert!(!is_well_formed(&tokenize("sumof2(1, 2, 3)")));
/// assert!(!is_well_formed(&[]));
/// ```
pub fn is_well_formed(tokens: &[Token]) -> bool {
    check(tokens).is_ok()
}

/// Like [`is_well_formed`], but says what is wrong.
pub fn check(tokens: &[Token]) -> Result<(), Malformed> {
    reduce(tokens, |_| Ok::<_, Malformed>(()), |_, (), ()| ())
}
