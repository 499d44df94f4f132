//! Smoothing factor handling.
//!
//! The factor is the weight given to the newest sample. It always lives in
//! the closed range 0.0..=1.0: out-of-range values are folded back in rather
//! than rejected.

use num_traits::float::FloatCore;

/// Factor used when none is supplied.
pub const DEFAULT_FACTOR: f32 = 0.5;

/// Default factor in the filter's sample type.
#[inline]
pub(crate) fn default_factor<T: FloatCore>() -> T {
    T::one() / (T::one() + T::one())
}

/// Fold a requested factor into the valid range: `clamp(|factor|, 0.0, 1.0)`.
///
/// Returns `None` for NaN, which has no meaningful place in the range.
/// Infinities clamp to 1.0.
#[inline]
pub fn sanitize_factor<T: FloatCore>(factor: T) -> Option<T> {
    if factor.is_nan() {
        return None;
    }

    Some(num_traits::clamp(factor.abs(), T::zero(), T::one()))
}

/// Derive a smoothing factor from the sampling period and the time constant
/// of the measured process.
///
/// Computes `1 - e^(-sample_period / time_constant)`, the discrete equivalent
/// of a first-order RC low-pass. Sampling once per time constant gives a
/// factor of about 0.632. Both arguments must use the same unit.
///
/// A non-positive time constant means the process has no inertia worth
/// smoothing, so the result is 1.0 (output tracks input).
///
/// Requires `time-constant` feature and `libm` dependency.
#[cfg(feature = "time-constant")]
pub fn factor_from_time_constant<T>(sample_period: T, time_constant: T) -> T
where
    T: FloatCore + Exp,
{
    if time_constant.is_nan() || time_constant <= T::zero() {
        return T::one();
    }

    let decay = (-(sample_period.abs() / time_constant)).exp_libm();
    sanitize_factor(T::one() - decay).unwrap_or_else(T::one)
}

/// `e^x` for `no_std` float types, backed by `libm`.
#[cfg(feature = "time-constant")]
pub trait Exp: sealed::Sealed {
    fn exp_libm(self) -> Self;
}

#[cfg(feature = "time-constant")]
impl Exp for f32 {
    #[inline]
    fn exp_libm(self) -> Self {
        libm::expf(self)
    }
}

#[cfg(feature = "time-constant")]
impl Exp for f64 {
    #[inline]
    fn exp_libm(self) -> Self {
        libm::exp(self)
    }
}

#[cfg(feature = "time-constant")]
mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
