// tests/parser_tests.rs

use rulecheck::ast::{Function, RelationalOp, Rule, Token};
use rulecheck::lexer::LexError;
use rulecheck::parser::{parse_operand, parse_rule, OperandError, ParseError, Side};
use rulecheck::reduce::Malformed;

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_every_operator() {
    let test_cases = vec![
        ("1 < 2", RelationalOp::LessThan),
        ("1 <= 2", RelationalOp::LessEqual),
        ("1 > 2", RelationalOp::GreaterThan),
        ("1 >= 2", RelationalOp::GreaterEqual),
        ("1 = 2", RelationalOp::Equal),
        ("1 != 2", RelationalOp::NotEqual),
    ];

    for (input, expected) in test_cases {
        let rule = parse_rule(input).unwrap();
        assert_eq!(rule.operator, expected, "Failed for input: {}", input);
        assert_eq!(rule.operand1, vec![Token::Number(1)]);
        assert_eq!(rule.operand2, vec![Token::Number(2)]);
    }
}

#[test]
fn test_operator_without_spaces() {
    let rule = parse_rule("max(1,2)>=sumof2(1,1)").unwrap();
    assert_eq!(rule.operator, RelationalOp::GreaterEqual);
    assert_eq!(
        rule.operand2,
        vec![Token::Function(Function::SumOf2), Token::Number(1), Token::Number(1)]
    );
}

#[test]
fn test_leftmost_operator_splits() {
    let err = parse_rule("1 < 2 < 3").unwrap_err();
    assert!(matches!(err, ParseError::InvalidRule { side: Side::Right, .. }));
}

// ============================================================================
// Complete rules
// ============================================================================

#[test]
fn test_nested_rule() {
    let rule = parse_rule(
        "max(min(count('a'), sumof2(3, 5)), 7) >= avgof2(sumofallnumberfromstring, avgofallnumberfromstring)",
    )
    .unwrap();

    assert_eq!(
        rule,
        Rule::new(
            vec![
                Token::Function(Function::Max),
                Token::Function(Function::Min),
                Token::Count("a".to_string()),
                Token::Function(Function::SumOf2),
                Token::Number(3),
                Token::Number(5),
                Token::Number(7),
            ],
            RelationalOp::GreaterEqual,
            vec![Token::Function(Function::AvgOf2), Token::SumAll, Token::AvgAll],
        )
    );
    assert!(rule.uses_aggregates());
}

#[test]
fn test_rule_without_aggregates() {
    let rule = parse_rule("count('x') = 0").unwrap();
    assert!(!rule.uses_aggregates());
}

// ============================================================================
// Not in format
// ============================================================================

#[test]
fn test_unbalanced_parentheses() {
    assert_eq!(parse_rule("max(1, 2 > 1"), Err(ParseError::NotInFormat));
    assert_eq!(parse_rule("max(1, 2)) > 1"), Err(ParseError::NotInFormat));
}

#[test]
fn test_missing_operator() {
    assert_eq!(parse_rule("max(1, 2)"), Err(ParseError::NotInFormat));
    assert_eq!(parse_rule(""), Err(ParseError::NotInFormat));
}

#[test]
fn test_nothing_after_operator() {
    assert_eq!(parse_rule("max(1, 2) >="), Err(ParseError::NotInFormat));
    assert_eq!(parse_rule("1 <"), Err(ParseError::NotInFormat));
}

#[test]
fn test_not_in_format_message() {
    assert_eq!(ParseError::NotInFormat.to_string(), "Rule is not in format");
}

// ============================================================================
// Invalid rules
// ============================================================================

#[test]
fn test_unknown_function() {
    let err = parse_rule("sumof(3, 5) > 1").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidRule {
            side: Side::Left,
            source: OperandError::Lex(LexError::UnknownFragment("sumof".to_string())),
        }
    );
    assert!(err.to_string().starts_with("Invalid Rule"));
}

#[test]
fn test_empty_operand() {
    let err = parse_rule(" = 3").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidRule {
            side: Side::Left,
            source: OperandError::Lex(LexError::Empty),
        }
    );
}

#[test]
fn test_wrong_arity_on_either_side() {
    let err = parse_rule("sumof2(1, 2, 3) > 1").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidRule {
            side: Side::Left,
            source: OperandError::Structure(Malformed::ExtraOperand),
        }
    );

    let err = parse_rule("1 > max(2)").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidRule {
            side: Side::Right,
            source: OperandError::Structure(Malformed::Unfinished),
        }
    );
}

#[test]
fn test_double_equals_rejected() {
    assert!(matches!(
        parse_rule("1 == 1"),
        Err(ParseError::InvalidRule { side: Side::Right, .. })
    ));
}

#[test]
fn test_parse_operand() {
    assert_eq!(
        parse_operand("max(1, 2)", Side::Left),
        Ok(vec![Token::Function(Function::Max), Token::Number(1), Token::Number(2)])
    );
    assert!(parse_operand("max(1, 2, 3)", Side::Left).is_err());
}
