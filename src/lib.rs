#![cfg_attr(not(test), no_std)]
#![doc = r#"
# rpn-rs

A minimal, no_std-friendly infix calculator for Rust, built around explicit
Reverse Polish Notation: expressions are tokenized, converted to postfix form
with the shunting-yard algorithm, and evaluated on a value stack.

## Overview

rpn-rs exposes each pipeline stage as its own function so callers can stop at
any point — keep the token stream, keep the postfix form, or run the whole
pipeline in one call:

- [`lexer::tokenize`]: raw text → bounded token sequence
- [`convert::infix_to_postfix`]: infix tokens → postfix tokens
- [`eval::evaluate_postfix`]: postfix tokens → numeric result
- [`engine::calculate`]: all three stages in one call

Key properties:
- Configurable floating-point precision (f32/f64)
- Fixed operator and function set, no runtime registration
- Bounded everything: 63 characters per token, 1000 tokens per sequence,
  1000 entries per internal stack
- Postfix factorial (`5!`), right-associative power (`2^3^2` is `2^(3^2)`)
- Three interchangeable bracket kinds: `()`, `[]`, `{}`
- Comprehensive error reporting, no panics in library paths
- no_std compatibility (alloc only)

## Quick Start

```rust
use rpn_rs::engine::calculate;

let result = calculate("3 + 4 * 2").unwrap();
assert_eq!(result, 11.0);

let result = calculate("(3 + 4) * 2").unwrap();
assert_eq!(result, 14.0);

let result = calculate("sqrt(16) + 5!").unwrap();
assert_eq!(result, 124.0);
```

## Driving the stages separately

```rust
use rpn_rs::convert::infix_to_postfix;
use rpn_rs::eval::evaluate_postfix;
use rpn_rs::lexer::tokenize;

let tokens = tokenize("2 ^ 3 ^ 2").unwrap();
let postfix = infix_to_postfix(&tokens).unwrap();

let rendered: Vec<&str> = postfix.iter().map(|t| t.as_str()).collect();
assert_eq!(rendered, ["2", "3", "2", "^", "^"]);

assert_eq!(evaluate_postfix(&postfix).unwrap(), 512.0);
```

## Error Handling

```rust
use rpn_rs::engine::calculate;
use rpn_rs::error::RpnError;

match calculate("( 1 + 2") {
    Err(RpnError::UnmatchedBracket) => {}
    other => panic!("unexpected: {:?}", other),
}

match calculate("1 / 0") {
    Err(RpnError::DivideByZero) => {}
    other => panic!("unexpected: {:?}", other),
}

match calculate("2 @ 2") {
    Err(RpnError::UnknownCharacter { found: '@', .. }) => {}
    other => panic!("unexpected: {:?}", other),
}
```

## Supported Grammar

Numbers (integer or decimal, leading `.` allowed), the operators below, the
function names below applied to a bracketed argument, and whitespace, which
is ignored. Any open bracket may be closed by any close bracket.

### Operator Precedence and Associativity

Rank 1 is the highest priority:

| Rank | Tokens               | Associativity |
|------|----------------------|---------------|
| 1    | function names       | —             |
| 2    | `!` (postfix)        | Right         |
| 3    | `^`                  | Right         |
| 4    | `*` `/`              | Left          |
| 5    | `+` `-`              | Left          |

### Built-in Functions

`sqrt`, `log` (base 10), `ln` (natural), `sin`, `cos`, `tan`, `cosh`,
`sinh`, `tanh`, `asin`/`arcsin`, `acos`/`arccos`, `atan`/`arctan`.

Out-of-domain arguments (for example `sqrt(-1)`) yield whatever the
underlying math primitive yields, commonly NaN, rather than an error.

## Feature Flags

- `f32`: use 32-bit floating point for calculations
- `libm` (default): use the `libm` crate for math primitives

Only one of `f32` or the default 64-bit precision is active at a time.
"#]

extern crate alloc;

pub mod convert;
pub mod engine;
pub mod error;
pub mod eval;
pub mod functions;
pub mod lexer;
pub mod stack_ops;
pub mod symbols;
pub mod types;

pub use engine::calculate;
pub use error::{Result, RpnError};
pub use types::Token;

/// Define the floating-point type based on feature flags
#[cfg(feature = "f32")]
pub type Real = f32;

#[cfg(not(feature = "f32"))]
pub type Real = f64;

pub mod constants {
    use super::Real;

    #[cfg(feature = "f32")]
    pub const TEST_PRECISION: Real = 1e-6;

    #[cfg(not(feature = "f32"))]
    pub const TEST_PRECISION: Real = 1e-10;
}

/// Utility macro to check that two floating point values are approximately
/// equal within an epsilon. NaN is considered equal to NaN so that
/// propagated domain failures can be asserted on directly.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $crate::constants::TEST_PRECISION)
    };
    ($left:expr, $right:expr, $epsilon:expr $(,)?) => {{
        let left_val: $crate::Real = $left;
        let right_val: $crate::Real = $right;
        let eps: $crate::Real = $epsilon;

        if left_val.is_nan() && right_val.is_nan() {
            // NaN == NaN for our purposes
        } else {
            assert!(
                (left_val - right_val).abs() < eps,
                "assertion failed: `(left ≈ right)` (left: `{}`, right: `{}`, epsilon: `{}`)",
                left_val,
                right_val,
                eps
            );
        }
    }};
}
