//! Lexical tokenization of raw expression text.
//!
//! One left-to-right pass over the input, splitting it into bounded token
//! strings. The lexer only separates; it does not validate. Number-shaped
//! runs are not checked for well-formedness (`1.2.3` is one token) and
//! identifier runs are not checked against the function table — both are
//! resolved downstream through the symbol tables.

use alloc::vec::Vec;

use crate::error::{Result, RpnError};
use crate::types::{MAX_TOKEN_LEN, MAX_TOKENS, Token};

/// Single-character tokens: operators and the three bracket kinds.
const SINGLE_CHAR_TOKENS: &str = "+-*/^!()[]{}";

/// The lexer struct, which produces tokens from an input string.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Peek at the current character.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advance the position by one character.
    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Skip whitespace.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Consume a run of characters accepted by `accept`, capped at one
    /// character below the token capacity. A longer run resumes as a new
    /// token on the next call.
    fn consume_run(&mut self, accept: fn(char) -> bool) -> &'a str {
        let start = self.pos;
        let mut taken = 0;
        while let Some(c) = self.peek() {
            if !accept(c) || taken >= MAX_TOKEN_LEN - 1 {
                break;
            }
            self.advance();
            taken += 1;
        }
        &self.input[start..self.pos]
    }

    /// Get the next token from the input, `None` at end of input.
    pub fn next_token(&mut self) -> Option<Result<Token>> {
        self.skip_whitespace();
        let start_pos = self.pos;
        let c = self.peek()?;

        // Number: greedy run of digits and dots, no validation
        if c.is_ascii_digit() || c == '.' {
            let text = self.consume_run(|c| c.is_ascii_digit() || c == '.');
            return Some(Token::new(text));
        }

        // Identifier (intended as a function name): greedy run of letters
        if c.is_ascii_alphabetic() {
            let text = self.consume_run(|c| c.is_ascii_alphabetic());
            return Some(Token::new(text));
        }

        // Operators and brackets stand alone
        if SINGLE_CHAR_TOKENS.contains(c) {
            self.advance();
            return Some(Token::new(&self.input[start_pos..self.pos]));
        }

        Some(Err(RpnError::UnknownCharacter {
            position: start_pos,
            found: c,
        }))
    }
}

/// Tokenizes an expression into a bounded token sequence.
///
/// Fails fast on the first character outside the accepted alphabet and
/// when the sequence would exceed [`MAX_TOKENS`]; a sequence of exactly
/// [`MAX_TOKENS`] tokens is accepted.
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(expression);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token() {
        let token = token?;
        if tokens.len() >= MAX_TOKENS {
            return Err(RpnError::TooManyTokens);
        }
        tokens.push(token);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(expression: &str) -> Vec<String> {
        tokenize(expression)
            .unwrap()
            .iter()
            .map(|t| t.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_tokenize_mixed_expression() {
        assert_eq!(
            texts("3 + 4.5 * sqrt ( 2 )"),
            ["3", "+", "4.5", "*", "sqrt", "(", "2", ")"]
        );
    }

    #[test]
    fn test_tokenize_without_spaces() {
        assert_eq!(texts("2^3^2"), ["2", "^", "3", "^", "2"]);
        assert_eq!(texts("sin(0)!"), ["sin", "(", "0", ")", "!"]);
        assert_eq!(texts("1+2"), ["1", "+", "2"]);
    }

    #[test]
    fn test_all_bracket_kinds() {
        assert_eq!(
            texts("( [ { 1 } ] )"),
            ["(", "[", "{", "1", "}", "]", ")"]
        );
    }

    #[test]
    fn test_number_runs_keep_extra_dots() {
        assert_eq!(texts("1.2.3"), ["1.2.3"]);
        assert_eq!(texts(".5 + ."), [".5", "+", "."]);
    }

    #[test]
    fn test_identifier_run_splits_from_digits() {
        // letters and digits form separate tokens, no implicit joining
        assert_eq!(texts("sin2"), ["sin", "2"]);
        assert_eq!(texts("2sin"), ["2", "sin"]);
    }

    #[test]
    fn test_unknown_character_is_fatal() {
        assert_eq!(
            tokenize("1 + $ 2").unwrap_err(),
            RpnError::UnknownCharacter {
                position: 4,
                found: '$'
            }
        );
        assert!(matches!(
            tokenize("2 @ 2").unwrap_err(),
            RpnError::UnknownCharacter { found: '@', .. }
        ));
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   \t\n ").unwrap().is_empty());
    }

    #[test]
    fn test_long_run_splits_at_token_capacity() {
        let long_number = "7".repeat(100);
        let tokens = tokenize(&long_number).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].as_str().len(), MAX_TOKEN_LEN - 1);
        assert_eq!(tokens[1].as_str().len(), 100 - (MAX_TOKEN_LEN - 1));
    }

    #[test]
    fn test_token_count_capacity() {
        // 1000 tokens is accepted
        let ok = "1 ".repeat(MAX_TOKENS);
        assert_eq!(tokenize(&ok).unwrap().len(), MAX_TOKENS);

        // 1001 tokens is rejected
        let too_many = "1 ".repeat(MAX_TOKENS + 1);
        assert_eq!(tokenize(&too_many).unwrap_err(), RpnError::TooManyTokens);
    }
}
