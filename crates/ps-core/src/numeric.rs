use crate::PsError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Replace NaN and infinities with zero.
///
/// Calculator inputs go through this before any formula is applied, so a
/// calculator never fails and degrades to a zero-valued result instead.
#[inline]
pub fn coerce(v: Real) -> Real {
    if v.is_finite() { v } else { 0.0 }
}

/// Coerce, then clamp negatives to zero.
#[inline]
pub fn non_negative(v: Real) -> Real {
    coerce(v).max(0.0)
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PsError::NonFinite { what, value: v })
    }
}

/// Finite and >= 0, used by input validation at the file boundary.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, PsError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(PsError::Negative { what, value: v });
    }
    Ok(v)
}
