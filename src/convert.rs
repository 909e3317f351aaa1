//! Infix to postfix conversion with the shunting-yard algorithm.
//!
//! The converter owns a token stack for pending operators, functions, and
//! open brackets. Numbers pass straight through to the output; operators
//! drain the stack according to precedence and associativity before being
//! pushed; close brackets drain back to the nearest open bracket of any
//! kind. The stack is created fresh per call and fully drained before the
//! converted sequence is returned.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{Result, RpnError};
use crate::stack_ops::TokenStack;
use crate::symbols;
use crate::types::Token;

/// Converts an infix token sequence into postfix (RPN) order.
///
/// Bracket kinds are interchangeable: an open parenthesis may be closed by
/// a square or curly close bracket. A close bracket with no pending open
/// bracket, or an open bracket still pending once the input is exhausted,
/// fails with [`RpnError::UnmatchedBracket`].
pub fn infix_to_postfix(tokens: &[Token]) -> Result<Vec<Token>> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops = TokenStack::for_conversion();

    for token in tokens {
        let text = token.as_str();

        if token.is_number() {
            output.push(token.clone());
            continue;
        }

        // functions wait on the stack for their argument's close bracket
        if symbols::function(text).is_some() {
            ops.push(token.clone())?;
            continue;
        }

        if symbols::is_open_bracket(text) {
            ops.push(token.clone())?;
            continue;
        }

        if symbols::is_close_bracket(text) {
            let mut found_open = false;
            while let Some(top) = ops.pop() {
                if symbols::is_open_bracket(top.as_str()) {
                    found_open = true;
                    break;
                }
                output.push(top);
            }
            if !found_open {
                return Err(RpnError::UnmatchedBracket);
            }

            // a function directly before the open bracket applies to the
            // whole bracketed group
            if ops
                .peek()
                .is_some_and(|t| symbols::function(t.as_str()).is_some())
            {
                if let Some(func) = ops.pop() {
                    output.push(func);
                }
            }
            continue;
        }

        if symbols::operator(text).is_some() {
            let rank = symbols::precedence_of(text)?;
            let right_associative = symbols::is_right_associative(text)?;

            loop {
                let should_pop = match ops.peek() {
                    None => false,
                    Some(top) => {
                        let top_text = top.as_str();
                        if symbols::function(top_text).is_some() {
                            true
                        } else if symbols::operator(top_text).is_some() {
                            // rank 1 is the highest priority, so a
                            // numerically lower rank pops first
                            let top_rank = symbols::precedence_of(top_text)?;
                            top_rank < rank || (top_rank == rank && !right_associative)
                        } else {
                            // an open bracket blocks further draining
                            false
                        }
                    }
                };

                if !should_pop {
                    break;
                }
                if let Some(top) = ops.pop() {
                    output.push(top);
                }
            }

            ops.push(token.clone())?;
            continue;
        }

        return Err(RpnError::InvalidToken {
            text: String::from(text),
        });
    }

    // flush pending operators; a surviving open bracket was never closed
    while let Some(top) = ops.pop() {
        if symbols::is_open_bracket(top.as_str()) {
            return Err(RpnError::UnmatchedBracket);
        }
        output.push(top);
    }

    Ok(output)
}
