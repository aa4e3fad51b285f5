use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::NotPositive { what, value: v })
    }
}

/// Finite and inside the closed interval `[lo, hi]`.
pub fn ensure_within(v: Real, lo: Real, hi: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if (lo..=hi).contains(&v) {
        Ok(v)
    } else {
        Err(CoreError::OutOfInterval {
            what,
            value: v,
            lo,
            hi,
        })
    }
}

/// Finite and inside `(0, 1]`.
pub fn ensure_positive_fraction(v: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 && v <= 1.0 {
        Ok(v)
    } else {
        Err(CoreError::OutOfInterval {
            what,
            value: v,
            lo: 0.0,
            hi: 1.0,
        })
    }
}

/// Shorthand for [`ensure_within`] on `[0, 1]`.
pub fn ensure_fraction(v: Real, what: &'static str) -> Result<Real, CoreError> {
    ensure_within(v, 0.0, 1.0, what)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(0.125, "mdot").is_ok());
        assert!(matches!(
            ensure_positive(0.0, "mdot"),
            Err(CoreError::NotPositive { what: "mdot", .. })
        ));
        assert!(ensure_positive(-1.0, "mdot").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "mdot"),
            Err(CoreError::NonFinite { .. })
        ));
    }

    #[test]
    fn ensure_fraction_bounds_are_inclusive() {
        assert!(ensure_fraction(0.0, "x").is_ok());
        assert!(ensure_fraction(1.0, "x").is_ok());
        let err = ensure_fraction(1.01, "x").unwrap_err();
        assert_eq!(err.what(), "x");
        assert_eq!(err.value(), 1.01);
    }

    #[test]
    fn positive_fraction_excludes_zero_only() {
        assert_eq!(ensure_positive_fraction(1.0, "sf").unwrap(), 1.0);
        assert_eq!(ensure_positive_fraction(0.8, "sf").unwrap(), 0.8);
        assert!(matches!(
            ensure_positive_fraction(0.0, "sf"),
            Err(CoreError::OutOfInterval { what: "sf", .. })
        ));
        assert!(ensure_positive_fraction(1.2, "sf").is_err());
        assert!(matches!(
            ensure_positive_fraction(Real::NAN, "sf"),
            Err(CoreError::NonFinite { .. })
        ));
    }

    proptest! {
        #[test]
        fn fraction_accepts_unit_interval(v in 0.0f64..=1.0) {
            prop_assert_eq!(ensure_fraction(v, "v").unwrap(), v);
        }
    }
}
