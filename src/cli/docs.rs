//! Documentation content for rulecheck CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Rules,
    Functions,
    Leaves,
    Operators,
    Batch,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "rules" | "rule" | "syntax" => Some(Self::Rules),
            "functions" | "function" | "funcs" => Some(Self::Functions),
            "leaves" | "leaf" | "values" => Some(Self::Leaves),
            "operators" | "ops" => Some(Self::Operators),
            "batch" | "stored_rules" => Some(Self::Batch),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"RULECHECK DOCUMENTATION

A rule compares two expressions over the statistics of an input string:
how often a piece of text occurs in it, and the sum or average of the
numbers embedded in it.

DOCUMENTATION CATEGORIES

  rules             Rule shape, normalization and how operands are stored
  functions         max, min, sumof2, avgof2
  leaves            Numbers, count('text') and the input aggregates
  operators         Relational operators
  batch             Checking many inputs against stored rules

QUICK REFERENCE

  max(a, b)                     Larger argument
  min(a, b)                     Smaller argument
  sumof2(a, b)                  a + b
  avgof2(a, b)                  (a + b) / 2, rounded down
  count('aa')                   Occurrences of "aa", overlaps included
  sumofallnumberfromstring      Sum of every number in the input
  avgofallnumberfromstring      Average of those numbers, rounded down
  <  <=  >  >=  =  !=           Comparisons

Run 'rulecheck doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_str(name) {
        Some(DocCategory::Rules) => Ok(RULES_DOC),
        Some(DocCategory::Functions) => Ok(FUNCTIONS_DOC),
        Some(DocCategory::Leaves) => Ok(LEAVES_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Batch) => Ok(BATCH_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const RULES_DOC: &str = r#"RULES

RULE SHAPE
  <expression> <operator> <expression>

  Examples:
    max(count('a'), sumof2(3, 5)) >= avgofallnumberfromstring
    count('error') = 0
    sumof2(count('x'), count('y')) != 10

NORMALIZATION
  Rule text is case-insensitive. Whitespace and quote characters are
  removed before anything else, so these are the same rule:

    MAX( count("A"), 3 ) > 1
    max(count(a),3)>1

  Note that the text inside count() is lower-cased as well.

VALIDATION
  A rule is rejected as "not in format" when:
    - its parentheses are unbalanced
    - it has no operator, or nothing after the operator

  It is rejected as "invalid" when either side:
    - contains an unknown word (e.g. sumof instead of sumof2)
    - gives a function fewer or more than two arguments
    - holds more than one expression

STORED FORM
  Each side is stored as a flat list in prefix order:

    max(min(count('a'), sumof2(3, 5)), 7)
    => ["max", "min", "count-a", "sumof2", "3", "5", "7"]

  Run 'rulecheck parse <rule>' to see the stored form of a rule.
"#;

const FUNCTIONS_DOC: &str = r#"FUNCTIONS

Every function takes exactly two arguments. Arguments may be numbers,
leaves or other function calls.

max(a, b)
  The larger argument.
    max(1, 2)                   => 2

min(a, b)
  The smaller argument.
    min(count('a'), 8)          => count('a') when it is below 8

sumof2(a, b)
  The sum of both arguments.
    sumof2(1, 2)                => 3

avgof2(a, b)
  The average of both arguments, rounded down.
    avgof2(230, 32)             => 131
    avgof2(6, 3)                => 4
"#;

const LEAVES_DOC: &str = r#"LEAVES

NUMBERS
  Non-negative whole numbers written in decimal.
    0   3   175

count('text')
  How many times text occurs in the input string. Overlapping
  occurrences all count.
    count('aa') on "aaaaa aa aaa"   => 7

sumofallnumberfromstring
  Every maximal run of digits in the input is a number; this is their sum.
    on "abc 23eft fata4s2van"       => 23 + 4 + 2 = 29

avgofallnumberfromstring
  The average of those numbers, rounded down.
    on "abc 23eft fata4s2van"       => 29 / 3 = 9

NO NUMBERS IN THE INPUT
  With --empty-aggregates zero (the default) both aggregates are 0.
  With --empty-aggregates reject, a rule that uses either of them fails.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

  <     less than
  <=    less than or equal
  >     greater than
  >=    greater than or equal
  =     equal (a single =)
  !=    not equal

Only the first operator in the rule text splits the rule; a second
operator makes the right-hand side invalid.
"#;

const BATCH_DOC: &str = r#"BATCH

  rulecheck batch --rules rules.json --input '["a1b2", "no digits"]'

rules.json holds rules in their stored form:

  [
    {"operand1": ["count-a"], "operator": ">", "operand2": ["0"]},
    {"operand1": ["sumofallnumberfromstring"], "operator": "=", "operand2": ["3"]}
  ]

The result has one row per input string and one entry per rule:

  [[true, true], [false, false]]

Without --input the JSON array of inputs is read from stdin.
"#;
