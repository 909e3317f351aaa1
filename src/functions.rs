//! Math primitives backing operator and function application.
//!
//! All transcendental functions use the `libm` crate, which keeps them
//! available in no_std environments. The selected floating-point precision
//! (f32 or f64, controlled by the "f32" feature) picks the matching libm
//! variant. Out-of-domain inputs return whatever libm returns for them
//! (NaN, infinities); callers that want structured domain errors check
//! before calling.

#[cfg(feature = "f32")]
use libm::{
    acosf as libm_acos, asinf as libm_asin, atanf as libm_atan, cosf as libm_cos,
    coshf as libm_cosh, floorf as libm_floor, log10f as libm_log10, logf as libm_ln,
    powf as libm_pow, sinf as libm_sin, sinhf as libm_sinh, sqrtf as libm_sqrt,
    tanf as libm_tan, tanhf as libm_tanh,
};

#[cfg(not(feature = "f32"))]
use libm::{
    acos as libm_acos, asin as libm_asin, atan as libm_atan, cos as libm_cos,
    cosh as libm_cosh, floor as libm_floor, log as libm_ln, log10 as libm_log10,
    pow as libm_pow, sin as libm_sin, sinh as libm_sinh, sqrt as libm_sqrt,
    tan as libm_tan, tanh as libm_tanh,
};

use crate::Real;

pub fn add(a: Real, b: Real) -> Real {
    a + b
}

pub fn sub(a: Real, b: Real) -> Real {
    a - b
}

pub fn mul(a: Real, b: Real) -> Real {
    a * b
}

/// Plain quotient. The evaluator rejects a zero divisor before calling.
pub fn div(a: Real, b: Real) -> Real {
    a / b
}

pub fn pow(a: Real, b: Real) -> Real {
    libm_pow(a, b)
}

pub fn floor(a: Real) -> Real {
    libm_floor(a)
}

pub fn sqrt(a: Real) -> Real {
    libm_sqrt(a)
}

/// Base-10 logarithm; the `log` function name maps here.
pub fn log10(a: Real) -> Real {
    libm_log10(a)
}

/// Natural logarithm; the `ln` function name maps here.
pub fn ln(a: Real) -> Real {
    libm_ln(a)
}

pub fn sin(a: Real) -> Real {
    libm_sin(a)
}

pub fn cos(a: Real) -> Real {
    libm_cos(a)
}

pub fn tan(a: Real) -> Real {
    libm_tan(a)
}

pub fn cosh(a: Real) -> Real {
    libm_cosh(a)
}

pub fn sinh(a: Real) -> Real {
    libm_sinh(a)
}

pub fn tanh(a: Real) -> Real {
    libm_tanh(a)
}

pub fn asin(a: Real) -> Real {
    libm_asin(a)
}

pub fn acos(a: Real) -> Real {
    libm_acos(a)
}

pub fn atan(a: Real) -> Real {
    libm_atan(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_arithmetic() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(sub(5.0, 3.0), 2.0);
        assert_eq!(mul(2.0, 3.0), 6.0);
        assert_eq!(div(6.0, 3.0), 2.0);
        assert_eq!(pow(2.0, 3.0), 8.0);
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(16.0), 4.0);
        assert!(sqrt(-1.0).is_nan());
    }

    #[test]
    fn test_logarithms() {
        assert_approx_eq!(log10(1000.0), 3.0);
        #[cfg(feature = "f32")]
        assert_approx_eq!(ln(core::f32::consts::E), 1.0);
        #[cfg(not(feature = "f32"))]
        assert_approx_eq!(ln(core::f64::consts::E), 1.0);
        assert!(ln(-1.0).is_nan());
    }

    #[test]
    fn test_trig_at_zero() {
        assert_approx_eq!(sin(0.0), 0.0);
        assert_approx_eq!(cos(0.0), 1.0);
        assert_approx_eq!(tan(0.0), 0.0);
        assert_approx_eq!(sinh(0.0), 0.0);
        assert_approx_eq!(cosh(0.0), 1.0);
        assert_approx_eq!(tanh(0.0), 0.0);
    }

    #[test]
    fn test_inverse_trig() {
        assert_approx_eq!(asin(0.0), 0.0);
        #[cfg(feature = "f32")]
        assert_approx_eq!(acos(1.0), 0.0, 1e-6);
        #[cfg(not(feature = "f32"))]
        assert_approx_eq!(acos(1.0), 0.0);
        assert_approx_eq!(atan(0.0), 0.0);
        // out-of-domain propagates the libm sentinel
        assert!(asin(2.0).is_nan());
        assert!(acos(-2.0).is_nan());
    }
}
