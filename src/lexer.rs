use thiserror::Error;

use crate::ast::{
    tokens::{is_decimal, AVG_ALL_KEYWORD, COUNT_KEYWORD, SUM_ALL_KEYWORD},
    Function, Token,
};

const LOG_TARGET: &str = "lexer";

/// Characters dropped before splitting an operand into fragments.
const QUOTES: [char; 2] = ['"', '\''];

/// Characters that separate fragments. Nesting is not tracked here; the
/// prefix order of the fragments carries the tree shape.
const DELIMITERS: [char; 3] = [',', '(', ')'];

/// Reasons an operand cannot be turned into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Nothing but delimiters, quotes and whitespace
    #[error("operand is empty")]
    Empty,

    /// A fragment that is neither a function, a number nor a keyword
    #[error("unknown function or keyword '{0}'")]
    UnknownFragment(String),

    /// `count` as the last fragment, with no substring after it
    #[error("count is missing the text to count")]
    DanglingCount,

    /// A digit run too large for a 64-bit integer
    #[error("number {0} is out of range")]
    NumberOutOfRange(String),
}

/// Splits one operand of a rule into its prefix-ordered tokens.
///
/// The input is normalized first: whitespace and quote characters are
/// dropped and everything is lower-cased. What remains is split on `,`, `(`
/// and `)`, empty fragments are skipped, and each fragment becomes a token.
/// The fragment right after `count` is always the text to count.
///
/// # Examples
///
/// ```
/// use rulecheck::{Function, Lexer, Token};
///
/// let tokens = Lexer::new("MAX(count('a'), 3)").tokenize().unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Function(Function::Max),
///         Token::Count("a".to_string()),
///         Token::Number(3),
///     ]
/// );
/// ```
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input
                .to_lowercase()
                .chars()
                .filter(|ch| !ch.is_whitespace() && !QUOTES.contains(ch))
                .collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_delimiters(&mut self) {
        while let Some(ch) = self.current_char() {
            if DELIMITERS.contains(&ch) {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reads the next non-empty fragment, if any.
    fn next_fragment(&mut self) -> Option<String> {
        self.skip_delimiters();

        let mut fragment = String::new();
        while let Some(ch) = self.current_char() {
            if DELIMITERS.contains(&ch) {
                break;
            }
            fragment.push(ch);
            self.advance();
        }

        (!fragment.is_empty()).then_some(fragment)
    }

    fn read_token(fragment: String) -> Result<Token, LexError> {
        if let Some(func) = Function::from_name(&fragment) {
            return Ok(Token::Function(func));
        }

        match fragment.as_str() {
            SUM_ALL_KEYWORD => Ok(Token::SumAll),
            AVG_ALL_KEYWORD => Ok(Token::AvgAll),
            s if is_decimal(s) => s
                .parse::<i64>()
                .map(Token::Number)
                .map_err(|_| LexError::NumberOutOfRange(fragment)),
            _ => Err(LexError::UnknownFragment(fragment)),
        }
    }

    /// Consumes the lexer and produces every token of the operand.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        let mut counting = false;

        while let Some(fragment) = self.next_fragment() {
            if counting {
                tokens.push(Token::Count(fragment));
                counting = false;
            } else if fragment == COUNT_KEYWORD {
                counting = true;
            } else {
                tokens.push(Self::read_token(fragment)?);
            }
        }

        if counting {
            return Err(LexError::DanglingCount);
        }
        if tokens.is_empty() {
            return Err(LexError::Empty);
        }
        Ok(tokens)
    }
}

/// Tokenizes an operand, returning an empty sequence when it is malformed.
///
/// A well-formed operand always has at least one token, so an empty result
/// is never ambiguous. Use [`Lexer::tokenize`] to learn why an operand was
/// rejected.
///
/// # Examples
///
/// ```
/// use rulecheck::lexer::tokenize;
///
/// assert!(tokenize("sumof(3,5)").is_empty());
/// assert_eq!(tokenize("sumof2(3,5)").len(), 3);
/// ```
pub fn tokenize(operand: &str) -> Vec<Token> {
    Lexer::new(operand).tokenize().unwrap_or_else(|e| {
        log::debug!(target: LOG_TARGET, "Rejected operand '{operand}': {e}");
        Vec::new()
    })
}

/// Checks that the parentheses of a rule's raw text are balanced.
///
/// Every other character is ignored.
///
/// # Examples
///
/// ```
/// use rulecheck::lexer::parentheses_balanced;
///
/// assert!(parentheses_balanced("(()())"));
/// assert!(!parentheses_balanced("(()"));
/// assert!(!parentheses_balanced(")("));
/// ```
pub fn parentheses_balanced(text: &str) -> bool {
    let depth = text.chars().try_fold(0usize, |depth, ch| match ch {
        '(' => Some(depth + 1),
        ')' => depth.checked_sub(1),
        _ => Some(depth),
    });

    depth == Some(0)
}

#[test]
fn test_count_takes_next_fragment() {
    let tokens = Lexer::new("count(max)").tokenize().unwrap();
    assert_eq!(tokens, vec![Token::Count("max".to_string())]);

    let tokens = Lexer::new("count('7')").tokenize().unwrap();
    assert_eq!(tokens, vec![Token::Count("7".to_string())]);
}

#[test]
fn test_errors() {
    assert_eq!(Lexer::new("").tokenize(), Err(LexError::Empty));
    assert_eq!(Lexer::new("(,)").tokenize(), Err(LexError::Empty));
    assert_eq!(Lexer::new("max(count)").tokenize(), Err(LexError::DanglingCount));
    assert_eq!(
        Lexer::new("sumof(3,5)").tokenize(),
        Err(LexError::UnknownFragment("sumof".to_string()))
    );
    assert_eq!(
        Lexer::new("99999999999999999999").tokenize(),
        Err(LexError::NumberOutOfRange("99999999999999999999".to_string()))
    );
}
