// tests/validator_tests.rs

use rulecheck::ast::Token;
use rulecheck::lexer::tokenize;
use rulecheck::reduce::Malformed;
use rulecheck::validator::{check, is_well_formed};

/// Builds tokens from their stored form.
fn tokens(stored: &[&str]) -> Vec<Token> {
    stored.iter().map(|s| s.parse().unwrap()).collect()
}

// ============================================================================
// Well-formed sequences
// ============================================================================

#[test]
fn test_nested_tree() {
    let seq = tokens(&[
        "max",
        "min",
        "count-a",
        "sumof2",
        "3",
        "5",
        "avgof2",
        "sumofallnumberfromstring",
        "avgofallnumberfromstring",
    ]);
    assert!(is_well_formed(&seq));
}

#[test]
fn test_different_root() {
    let seq = tokens(&[
        "sumof2",
        "min",
        "count-a",
        "sumof2",
        "3",
        "5",
        "avgof2",
        "sumofallnumberfromstring",
        "avgofallnumberfromstring",
    ]);
    assert!(is_well_formed(&seq));
}

#[test]
fn test_left_nested() {
    assert!(is_well_formed(&tokens(&["avgof2", "sumof2", "1", "2", "3"])));
    assert!(is_well_formed(&tokens(&["sumof2", "max", "1", "2", "3"])));
}

#[test]
fn test_right_nested() {
    assert!(is_well_formed(&tokens(&["sumof2", "5", "avgof2", "6", "count-b"])));
}

#[test]
fn test_single_leaf() {
    assert!(is_well_formed(&tokens(&["7"])));
    assert!(is_well_formed(&tokens(&["count-aa"])));
    assert!(is_well_formed(&tokens(&["sumofallnumberfromstring"])));
}

#[test]
fn test_tokenized_text_is_well_formed() {
    let texts = [
        "max(1, 2)",
        "avgof2(sumof2(1, 2), 3)",
        "min(max(count('x'), 4), sumof2(avgofallnumberfromstring, 1))",
        "sumofallnumberfromstring",
    ];
    for text in texts {
        assert!(is_well_formed(&tokenize(text)), "Rejected: {}", text);
    }
}

// ============================================================================
// Malformed sequences
// ============================================================================

#[test]
fn test_extra_operand_inside_tree() {
    let seq = tokens(&[
        "max",
        "min",
        "count-a",
        "sumof2",
        "3",
        "5",
        "7",
        "avgof2",
        "sumofallnumberfromstring",
        "avgofallnumberfromstring",
    ]);
    assert!(!is_well_formed(&seq));
}

#[test]
fn test_trailing_function() {
    let seq = tokens(&[
        "max",
        "min",
        "count-a",
        "sumof2",
        "3",
        "5",
        "avgof2",
        "sumofallnumberfromstring",
        "avgofallnumberfromstring",
        "avgof2",
    ]);
    assert_eq!(check(&seq), Err(Malformed::Unfinished));
}

#[test]
fn test_missing_function() {
    let seq = tokens(&[
        "max",
        "min",
        "count-a",
        "sumof2",
        "3",
        "5",
        "sumofallnumberfromstring",
        "sumofallnumberfromstring",
        "avgofallnumberfromstring",
    ]);
    assert!(!is_well_formed(&seq));
}

#[test]
fn test_infix_order() {
    assert!(!is_well_formed(&tokens(&["1", "sumof2", "2"])));
}

#[test]
fn test_two_roots() {
    assert_eq!(check(&tokens(&["1", "2"])), Err(Malformed::ExtraOperand));
    assert!(!is_well_formed(&tokens(&["max", "1", "2", "3"])));
}

#[test]
fn test_too_few_operands() {
    assert_eq!(check(&tokens(&["max", "1"])), Err(Malformed::Unfinished));
    assert_eq!(check(&tokens(&["max"])), Err(Malformed::Unfinished));
}

#[test]
fn test_empty_sequence() {
    assert_eq!(check(&[]), Err(Malformed::Empty));
}

#[test]
fn test_arity_mismatch_in_text() {
    assert!(!is_well_formed(&tokenize("sumof2(1, 2, 3)")));
    assert!(!is_well_formed(&tokenize("max(1)")));
    assert!(!is_well_formed(&tokenize("max(1, 2), 3")));
}
