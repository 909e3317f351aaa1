//! Stack-based evaluation of postfix token sequences.
//!
//! Numbers are parsed and pushed onto a value stack; operators and
//! functions pop their operands, apply, and push the result. A valid
//! postfix sequence leaves exactly one value on the stack, which becomes
//! the result. The stack is owned by the call and dropped on every exit
//! path, success or failure.

use alloc::string::String;

use crate::Real;
use crate::error::{Result, RpnError};
use crate::functions;
use crate::stack_ops::ValueStack;
use crate::symbols::{self, Operator};
use crate::types::Token;

/// Best-effort numeric parse for number-shaped tokens.
///
/// The tokenizer does not validate number runs, so text like `1.2.3`
/// arrives here. Policy: parse the longest prefix up to the second dot
/// (what `atof` would consume), 0.0 when nothing parses.
fn parse_number(text: &str) -> Real {
    if let Ok(value) = text.parse::<Real>() {
        return value;
    }

    let mut dots = text.char_indices().filter(|(_, c)| *c == '.');
    let _ = dots.next();
    let cut = dots.next().map_or(text.len(), |(index, _)| index);
    text[..cut].parse::<Real>().unwrap_or(0.0)
}

/// Factorial by iterative product, descending to 1. 0! and 1! are 1.
///
/// The loop stops early once the accumulator saturates to infinity;
/// every remaining factor would leave it infinite anyway.
fn factorial(number: u32) -> Real {
    let mut product: Real = 1.0;
    let mut factor = number;
    while factor > 1 {
        product *= factor as Real;
        if product.is_infinite() {
            break;
        }
        factor -= 1;
    }
    product
}

/// Checks the factorial domain (non-negative, integral) before computing.
fn apply_factorial(operand: Real) -> Result<Real> {
    if operand < 0.0 || operand != functions::floor(operand) {
        return Err(RpnError::InvalidFactorial { value: operand });
    }
    Ok(factorial(operand as u32))
}

/// Evaluates a postfix token sequence to a single numeric result.
pub fn evaluate_postfix(postfix: &[Token]) -> Result<Real> {
    let mut values = ValueStack::for_evaluation();

    for token in postfix {
        let text = token.as_str();

        if token.is_number() {
            values.push(parse_number(text))?;
            continue;
        }

        if let Some(op) = symbols::operator(text) {
            match op {
                Operator::Fact => {
                    let operand = values.pop().ok_or(RpnError::StackUnderflow)?;
                    values.push(apply_factorial(operand)?)?;
                }
                _ => {
                    if values.len() < 2 {
                        return Err(RpnError::StackUnderflow);
                    }
                    // b was pushed last: it is the right-hand operand
                    let b = values.pop().ok_or(RpnError::StackUnderflow)?;
                    let a = values.pop().ok_or(RpnError::StackUnderflow)?;
                    values.push(op.apply(a, b)?)?;
                }
            }
            continue;
        }

        if let Some(func) = symbols::function(text) {
            let operand = values.pop().ok_or(RpnError::StackUnderflow)?;
            values.push(func.apply(operand))?;
            continue;
        }

        return Err(RpnError::InvalidToken {
            text: String::from(text),
        });
    }

    if values.len() != 1 {
        return Err(RpnError::MalformedExpression {
            residual: values.len(),
        });
    }
    values.pop().ok_or(RpnError::StackUnderflow)
}
