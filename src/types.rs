//! Core data types and capacity limits.
//!
//! A [`Token`] is an immutable bounded string. Its meaning (number,
//! function, operator, bracket) is never stored: each pipeline stage
//! re-derives it through the symbol tables at the point of use, so the
//! same text is classified identically everywhere.

use crate::error::{Result, RpnError};

/// Maximum byte capacity of a single token, terminator included.
/// The tokenizer emits at most [`MAX_TOKEN_LEN`] - 1 characters per token.
pub const MAX_TOKEN_LEN: usize = 64;

/// Maximum number of tokens in one sequence (infix or postfix).
pub const MAX_TOKENS: usize = 1000;

/// Maximum number of elements either internal stack can hold.
pub const MAX_STACK_SIZE: usize = 1000;

/// Documented bound on expression text length for callers. The tokenizer
/// does not enforce it directly; oversized input fails with
/// [`RpnError::TooManyTokens`] once the sequence capacity runs out.
pub const MAX_EXPR_LEN: usize = 999;

/// Bounded token text storage.
pub type TokenText = heapless::String<MAX_TOKEN_LEN>;

/// A single expression token: a bounded, immutable piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: TokenText,
}

impl Token {
    /// Builds a token from text, failing if it exceeds the token capacity.
    pub fn new(text: &str) -> Result<Self> {
        let mut buffer = TokenText::new();
        buffer
            .push_str(text)
            .map_err(|_| RpnError::CapacityExceeded("token text"))?;
        Ok(Token { text: buffer })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number-shaped: leading digit, or a leading `.` followed by a digit.
    /// This is a shape test only; `1.2.3` passes and is handled by the
    /// evaluator's best-effort numeric parse.
    pub fn is_number(&self) -> bool {
        let mut chars = self.text.chars();
        match chars.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => chars.next().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.text)
    }
}
