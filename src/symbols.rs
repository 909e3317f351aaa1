//! Static symbol tables: operator, function, and bracket identity.
//!
//! Pure lookups over process-wide constant data. Nothing here allocates or
//! mutates; the tables are safe to share across concurrent evaluations.

use alloc::string::String;

use crate::Real;
use crate::error::{Result, RpnError};
use crate::functions;

/// Highest priority precedence rank (functions).
pub const PRECEDENCE_FUNCTION: u8 = 1;

/// Lowest priority precedence rank (addition and subtraction).
pub const PRECEDENCE_LOWEST: u8 = 5;

/// The six recognized operators.
///
/// `Fact` is unary postfix; all others are binary infix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Fact,
}

impl Operator {
    pub fn glyph(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
            Operator::Fact => "!",
        }
    }

    /// Precedence rank, 1 = highest priority, 5 = lowest.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Fact => 2,
            Operator::Pow => 3,
            Operator::Mul | Operator::Div => 4,
            Operator::Add | Operator::Sub => 5,
        }
    }

    pub fn is_right_associative(self) -> bool {
        matches!(self, Operator::Pow | Operator::Fact)
    }

    /// Applies a binary operator. Division by exactly zero is rejected;
    /// factorial is not binary and is dispatched by the evaluator instead.
    pub fn apply(self, a: Real, b: Real) -> Result<Real> {
        match self {
            Operator::Add => Ok(functions::add(a, b)),
            Operator::Sub => Ok(functions::sub(a, b)),
            Operator::Mul => Ok(functions::mul(a, b)),
            Operator::Div => {
                if b == 0.0 {
                    Err(RpnError::DivideByZero)
                } else {
                    Ok(functions::div(a, b))
                }
            }
            Operator::Pow => Ok(functions::pow(a, b)),
            // factorial is unary postfix; the evaluator dispatches it
            // before ever reaching this table
            Operator::Fact => Err(RpnError::InvalidToken {
                text: String::from("!"),
            }),
        }
    }
}

/// The recognized unary math functions.
///
/// The `arc*` spellings classify to the same identity as their short
/// forms, so `arcsin` and `asin` are indistinguishable past the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFunction {
    Sqrt,
    Log,
    Ln,
    Sin,
    Cos,
    Tan,
    Cosh,
    Sinh,
    Tanh,
    Asin,
    Acos,
    Atan,
}

impl MathFunction {
    pub fn apply(self, x: Real) -> Real {
        match self {
            MathFunction::Sqrt => functions::sqrt(x),
            MathFunction::Log => functions::log10(x),
            MathFunction::Ln => functions::ln(x),
            MathFunction::Sin => functions::sin(x),
            MathFunction::Cos => functions::cos(x),
            MathFunction::Tan => functions::tan(x),
            MathFunction::Cosh => functions::cosh(x),
            MathFunction::Sinh => functions::sinh(x),
            MathFunction::Tanh => functions::tanh(x),
            MathFunction::Asin => functions::asin(x),
            MathFunction::Acos => functions::acos(x),
            MathFunction::Atan => functions::atan(x),
        }
    }
}

/// Classifies text as an operator by exact glyph match.
pub fn operator(text: &str) -> Option<Operator> {
    match text {
        "+" => Some(Operator::Add),
        "-" => Some(Operator::Sub),
        "*" => Some(Operator::Mul),
        "/" => Some(Operator::Div),
        "^" => Some(Operator::Pow),
        "!" => Some(Operator::Fact),
        _ => None,
    }
}

/// Classifies text as a function by exact name match. Case-sensitive,
/// lowercase only.
pub fn function(text: &str) -> Option<MathFunction> {
    match text {
        "sqrt" => Some(MathFunction::Sqrt),
        "log" => Some(MathFunction::Log),
        "ln" => Some(MathFunction::Ln),
        "sin" => Some(MathFunction::Sin),
        "cos" => Some(MathFunction::Cos),
        "tan" => Some(MathFunction::Tan),
        "cosh" => Some(MathFunction::Cosh),
        "sinh" => Some(MathFunction::Sinh),
        "tanh" => Some(MathFunction::Tanh),
        "asin" | "arcsin" => Some(MathFunction::Asin),
        "acos" | "arccos" => Some(MathFunction::Acos),
        "atan" | "arctan" => Some(MathFunction::Atan),
        _ => None,
    }
}

pub fn is_open_bracket(text: &str) -> bool {
    matches!(text, "(" | "[" | "{")
}

pub fn is_close_bracket(text: &str) -> bool {
    matches!(text, ")" | "]" | "}")
}

/// Precedence rank of a token: functions rank 1, operators per their
/// table. A token cannot be both; anything else is invalid.
pub fn precedence_of(text: &str) -> Result<u8> {
    if function(text).is_some() {
        return Ok(PRECEDENCE_FUNCTION);
    }
    if let Some(op) = operator(text) {
        return Ok(op.precedence());
    }
    Err(RpnError::InvalidToken {
        text: String::from(text),
    })
}

/// True only for `^` and `!`. Unrecognized text reports left-associative
/// rather than failing; only empty text is an error.
pub fn is_right_associative(text: &str) -> Result<bool> {
    if text.is_empty() {
        return Err(RpnError::EmptyToken);
    }
    Ok(operator(text).is_some_and(Operator::is_right_associative))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_classification() {
        assert_eq!(operator("+"), Some(Operator::Add));
        assert_eq!(operator("!"), Some(Operator::Fact));
        assert_eq!(operator("**"), None);
        assert_eq!(operator(""), None);
    }

    #[test]
    fn test_function_classification_and_aliases() {
        assert_eq!(function("sqrt"), Some(MathFunction::Sqrt));
        assert_eq!(function("arcsin"), Some(MathFunction::Asin));
        assert_eq!(function("asin"), Some(MathFunction::Asin));
        // case-sensitive, lowercase only
        assert_eq!(function("Sin"), None);
        assert_eq!(function("SQRT"), None);
        assert_eq!(function("exp"), None);
    }

    #[test]
    fn test_precedence_table() {
        assert_eq!(precedence_of("sqrt").unwrap(), 1);
        assert_eq!(precedence_of("!").unwrap(), 2);
        assert_eq!(precedence_of("^").unwrap(), 3);
        assert_eq!(precedence_of("*").unwrap(), 4);
        assert_eq!(precedence_of("/").unwrap(), 4);
        assert_eq!(precedence_of("+").unwrap(), 5);
        assert_eq!(precedence_of("-").unwrap(), 5);

        assert!(matches!(
            precedence_of("bogus"),
            Err(RpnError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_associativity_permissive_default() {
        assert!(is_right_associative("^").unwrap());
        assert!(is_right_associative("!").unwrap());
        assert!(!is_right_associative("+").unwrap());
        // unknown operators fall back to left-associative
        assert!(!is_right_associative("%").unwrap());
        assert_eq!(is_right_associative(""), Err(RpnError::EmptyToken));
    }

    #[test]
    fn test_brackets_three_kinds() {
        for open in ["(", "[", "{"] {
            assert!(is_open_bracket(open));
            assert!(!is_close_bracket(open));
        }
        for close in [")", "]", "}"] {
            assert!(is_close_bracket(close));
            assert!(!is_open_bracket(close));
        }
    }

    #[test]
    fn test_binary_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0).unwrap(), 5.0);
        assert_eq!(Operator::Sub.apply(2.0, 3.0).unwrap(), -1.0);
        assert_eq!(Operator::Mul.apply(2.0, 3.0).unwrap(), 6.0);
        assert_eq!(Operator::Div.apply(6.0, 3.0).unwrap(), 2.0);
        assert_eq!(Operator::Pow.apply(2.0, 10.0).unwrap(), 1024.0);
        assert_eq!(
            Operator::Div.apply(1.0, 0.0).unwrap_err(),
            RpnError::DivideByZero
        );
    }
}
