//! Single-pass reduction of prefix-ordered token sequences.
//!
//! Both the structural check and the evaluator walk an operand left to right
//! with a stack of slots. A function opens a pending slot; a leaf produces a
//! ready slot, and whenever two ready slots sit on a pending one the three
//! collapse into a single ready slot. A sequence is well-formed exactly when
//! one ready slot is left at the end.

use thiserror::Error;

use crate::ast::{Function, Token};

/// Ways a token sequence fails to describe exactly one binary tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("expression has no tokens")]
    Empty,

    /// Two completed values with no function left to combine them
    #[error("expression has an operand no function takes")]
    ExtraOperand,

    /// A function still waiting for arguments, or values left uncombined
    #[error("expression is missing an operand")]
    Unfinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot<P, V> {
    Pending(P),
    Ready(V),
}

#[derive(Debug)]
pub(crate) struct SlotStack<P, V> {
    slots: Vec<Slot<P, V>>,
}

impl<P, V> SlotStack<P, V> {
    pub(crate) fn new() -> Self {
        SlotStack { slots: Vec::new() }
    }

    /// Opens a slot that waits for two values.
    pub(crate) fn open(&mut self, pending: P) {
        self.slots.push(Slot::Pending(pending));
    }

    /// Pushes a completed value and folds every subtree it completes.
    ///
    /// `combine` receives the pending slot, the left value and the right value.
    pub(crate) fn push(
        &mut self,
        mut value: V,
        mut combine: impl FnMut(P, V, V) -> V,
    ) -> Result<(), Malformed> {
        loop {
            match self.slots.pop() {
                Some(Slot::Ready(left)) => match self.slots.pop() {
                    Some(Slot::Pending(pending)) => value = combine(pending, left, value),
                    _ => return Err(Malformed::ExtraOperand),
                },
                Some(slot) => {
                    self.slots.push(slot);
                    break;
                }
                None => break,
            }
        }

        self.slots.push(Slot::Ready(value));
        Ok(())
    }

    /// Returns the single remaining value.
    pub(crate) fn finish(mut self) -> Result<V, Malformed> {
        match (self.slots.pop(), self.slots.is_empty()) {
            (None, _) => Err(Malformed::Empty),
            (Some(Slot::Ready(value)), true) => Ok(value),
            _ => Err(Malformed::Unfinished),
        }
    }
}

/// Reduces a prefix-ordered operand to one value.
///
/// `leaf` turns each leaf token into a value; `combine` folds a function and
/// its two argument values.
pub(crate) fn reduce<V, E>(
    tokens: &[Token],
    mut leaf: impl FnMut(&Token) -> Result<V, E>,
    mut combine: impl FnMut(Function, V, V) -> V,
) -> Result<V, E>
where
    E: From<Malformed>,
{
    let mut stack = SlotStack::new();

    for token in tokens {
        match token {
            Token::Function(func) => stack.open(*func),
            _ => stack.push(leaf(token)?, &mut combine)?,
        }
    }

    Ok(stack.finish()?)
}
