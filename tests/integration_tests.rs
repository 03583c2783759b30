use rulecheck::cli::{
    execute_batch, execute_check, execute_parse, execute_tokenize, get_doc_category, BatchOptions,
    CheckOptions, CliError,
};
use rulecheck::{
    evaluate, extract_aggregates, is_well_formed, parentheses_balanced, tokenize, Config,
    EmptyAggregatePolicy, RelationalOp, Rule, StoredRule, Token,
};
use serde_json::json;

const SAMPLE: &str = "abc 23eft fata4s2van bis23woj1t @175sed2xc";

fn check(rules: &[&str], input: &str) -> Result<Vec<bool>, CliError> {
    execute_check(&CheckOptions {
        rules: rules.iter().map(|s| s.to_string()).collect(),
        input: Some(input.to_string()),
        config: Config::default(),
    })
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_text_to_result() {
    let text = "max(min(count('a'),sumof2(3,5)),avgof2(sumofallnumberfromstring,avgofallnumberfromstring))";
    let tokens = tokenize(text);
    assert!(parentheses_balanced(text));
    assert!(is_well_formed(&tokens));

    let aggregates = extract_aggregates(SAMPLE);
    let average = aggregates.average().unwrap();
    assert_eq!(evaluate(&tokens, SAMPLE, aggregates.sum, average), Ok(131));
}

#[test]
fn test_unequal_sides() {
    let left = evaluate(&tokenize("sumof2(count('a'), 10)"), "aaaa", 0, 0).unwrap();
    let right = evaluate(&tokenize("sumof2(5, 10)"), "aaaa", 0, 0).unwrap();
    assert_eq!((left, right), (14, 15));
    assert!(!rulecheck::compare(left, right, RelationalOp::GreaterEqual));
    assert!(rulecheck::compare(10, 5, RelationalOp::GreaterEqual));
}

// ============================================================================
// Stored form
// ============================================================================

#[test]
fn test_rule_serializes_to_stored_form() {
    let rule = rulecheck::parse_rule("max(count('a'), 3) != avgofallnumberfromstring").unwrap();
    let value = serde_json::to_value(&rule).unwrap();
    assert_eq!(
        value,
        json!({
            "operand1": ["max", "count-a", "3"],
            "operator": "!=",
            "operand2": ["avgofallnumberfromstring"],
        })
    );
}

#[test]
fn test_rule_deserializes_from_stored_form() {
    let rule: Rule = serde_json::from_value(json!({
        "operand1": ["sumof2", "count-x-y", "1"],
        "operator": "<=",
        "operand2": ["sumofallnumberfromstring"],
    }))
    .unwrap();

    assert_eq!(rule.operand1[1], Token::Count("x-y".to_string()));
    assert_eq!(rule.operator, RelationalOp::LessEqual);
    assert_eq!(rule.operand2, vec![Token::SumAll]);
}

#[test]
fn test_stored_form_rejects_unknown_tokens() {
    let result: Result<Rule, _> = serde_json::from_value(json!({
        "operand1": ["sumof"],
        "operator": "<",
        "operand2": ["1"],
    }));
    assert!(result.is_err());

    let result: Result<Rule, _> = serde_json::from_value(json!({
        "operand1": ["1"],
        "operator": "==",
        "operand2": ["1"],
    }));
    assert!(result.is_err());

    assert!(serde_json::from_value::<Token>(json!("count-")).is_err());
}

#[test]
fn test_stored_rule_is_flat() {
    let stored = StoredRule {
        id: rulecheck::RuleId(3),
        owner: "alice".to_string(),
        rule: rulecheck::parse_rule("1 < 2").unwrap(),
    };
    assert_eq!(
        serde_json::to_value(&stored).unwrap(),
        json!({"id": 3, "owner": "alice", "operand1": ["1"], "operator": "<", "operand2": ["2"]})
    );
}

// ============================================================================
// CLI commands
// ============================================================================

#[test]
fn test_cli_tokenize() {
    let tokens = execute_tokenize("sumof2(3, count('b'))").unwrap();
    assert_eq!(serde_json::to_value(&tokens).unwrap(), json!(["sumof2", "3", "count-b"]));
    assert!(matches!(execute_tokenize("sumof(3,5)"), Err(CliError::Lex(_))));
}

#[test]
fn test_cli_parse() {
    let rule = execute_parse("count('a') > 2").unwrap();
    assert_eq!(rule.operator, RelationalOp::GreaterThan);
    assert!(matches!(execute_parse("count('a') > 2)"), Err(CliError::Parse(_))));
}

#[test]
fn test_cli_check() {
    let results = check(&["count('a') = 4", "sumofallnumberfromstring < 100"], SAMPLE).unwrap();
    assert_eq!(results, vec![true, false]);
}

#[test]
fn test_cli_check_requires_input() {
    let result = execute_check(&CheckOptions {
        rules: vec!["1 < 2".to_string()],
        input: None,
        config: Config::default(),
    });
    assert!(matches!(result, Err(CliError::NoInput)));
}

#[test]
fn test_cli_check_reject_policy() {
    let result = execute_check(&CheckOptions {
        rules: vec!["sumofallnumberfromstring = 0".to_string()],
        input: Some("none".to_string()),
        config: Config::new(EmptyAggregatePolicy::Reject),
    });
    assert!(matches!(result, Err(CliError::Eval(_))));
}

#[test]
fn test_cli_batch() {
    let rules = json!([
        {"operand1": ["count-a"], "operator": ">", "operand2": ["0"]},
        {"operand1": ["sumofallnumberfromstring"], "operator": "=", "operand2": ["3"]},
    ]);
    let rows = execute_batch(&BatchOptions {
        rules: rules.to_string(),
        inputs: Some(r#"["a1b2", "no digits"]"#.to_string()),
        config: Config::default(),
    })
    .unwrap();
    assert_eq!(rows, vec![vec![true, true], vec![false, false]]);
}

#[test]
fn test_cli_batch_invalid_json() {
    let result = execute_batch(&BatchOptions {
        rules: "[]".to_string(),
        inputs: Some("not json".to_string()),
        config: Config::default(),
    });
    assert!(matches!(result, Err(CliError::Json(_))));
}

#[test]
fn test_cli_batch_malformed_stored_rule() {
    let rules = json!([{"operand1": ["max", "1"], "operator": ">", "operand2": ["0"]}]);
    let result = execute_batch(&BatchOptions {
        rules: rules.to_string(),
        inputs: Some(r#"["x"]"#.to_string()),
        config: Config::default(),
    });
    assert!(matches!(result, Err(CliError::Service(_))));
}

#[test]
fn test_cli_docs() {
    assert!(get_doc_category("functions").unwrap().contains("avgof2"));
    assert!(get_doc_category("ops").unwrap().contains("!="));
    assert!(matches!(get_doc_category("nope"), Err(CliError::UnknownCategory(_))));
}
