//! Front door for the full pipeline.

use crate::Real;
use crate::convert::infix_to_postfix;
use crate::error::Result;
use crate::eval::evaluate_postfix;
use crate::lexer::tokenize;

/// Evaluates an infix expression: tokenize, convert to postfix, evaluate.
///
/// Each call allocates its own internal stacks, so concurrent callers and
/// repeated calls never share state.
///
/// ```
/// let result = rpn_rs::calculate("sqrt ( 16 ) + 5 !").unwrap();
/// assert_eq!(result, 124.0);
/// ```
pub fn calculate(expression: &str) -> Result<Real> {
    let tokens = tokenize(expression)?;
    let postfix = infix_to_postfix(&tokens)?;
    evaluate_postfix(&postfix)
}
