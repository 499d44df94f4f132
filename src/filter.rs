use num_traits::AsPrimitive;
use num_traits::float::FloatCore;

use crate::factor::{default_factor, sanitize_factor};

/// Exponential smoothing filter: `value = value + factor * (input - value)`
///
/// Equivalent to `factor * input + (1 - factor) * value`. Higher factor means
/// a more responsive output, lower factor means more smoothing. The first
/// sample after construction or [`reset`](Self::reset) becomes the baseline
/// and is returned unchanged.
///
/// Samples are not guarded: NaN or infinite inputs propagate through the
/// recurrence under IEEE-754 rules until the next `reset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFilter<T = f32> {
    factor: T,
    value: T,
    initialized: bool,
    has_value: bool,
}

impl ExponentialFilter<f32> {
    /// Create filter with the default factor (0.5), usable in `static` items.
    pub const fn with_default_factor() -> Self {
        Self {
            factor: 0.5,
            value: 0.0,
            initialized: false,
            has_value: false,
        }
    }
}

impl ExponentialFilter<f64> {
    /// Create filter with the default factor (0.5), usable in `static` items.
    pub const fn with_default_factor() -> Self {
        Self {
            factor: 0.5,
            value: 0.0,
            initialized: false,
            has_value: false,
        }
    }
}

impl<T: FloatCore> ExponentialFilter<T> {
    /// Create new filter with uninitialized state.
    ///
    /// The factor is stored as `clamp(|factor|, 0.0, 1.0)`. NaN falls back to
    /// the default factor.
    pub fn new(factor: T) -> Self {
        let mut filter = Self {
            factor: default_factor(),
            value: T::zero(),
            initialized: false,
            has_value: false,
        };
        filter.set_factor(factor);
        filter
    }

    /// Forget the baseline so the next sample restarts the series.
    ///
    /// The factor is kept, and [`value`](Self::value) keeps reporting the
    /// last output until a new sample arrives.
    pub fn reset(&mut self) {
        self.initialized = false;

        #[cfg(feature = "log")]
        log::trace!("exponential filter reset, factor = {:?}", self.factor.to_f64());
    }

    /// Change the smoothing factor for subsequent samples.
    ///
    /// Out-of-range values are folded into 0.0..=1.0 without error. A NaN
    /// factor is ignored and the previous factor stays in effect. The stored
    /// value is not touched.
    pub fn set_factor(&mut self, factor: T) {
        match sanitize_factor(factor) {
            Some(sanitized) => {
                #[cfg(feature = "log")]
                if sanitized != factor {
                    log::debug!(
                        "smoothing factor {:?} clamped to {:?}",
                        factor.to_f64(),
                        sanitized.to_f64()
                    );
                }

                self.factor = sanitized;
            }
            None => {
                #[cfg(feature = "log")]
                log::warn!(
                    "ignoring NaN smoothing factor, keeping {:?}",
                    self.factor.to_f64()
                );
            }
        }
    }

    /// Current smoothing factor, always within 0.0..=1.0.
    #[inline]
    pub fn factor(&self) -> T {
        self.factor
    }

    /// Feed a new sample and return the filtered value.
    pub fn compute_value(&mut self, input: T) -> T {
        if !self.initialized {
            self.value = input;
            self.initialized = true;
            self.has_value = true;

            #[cfg(feature = "log")]
            log::trace!("exponential filter baseline = {:?}", input.to_f64());

            return input;
        }

        self.value = self.value + self.factor * (input - self.value);
        self.value
    }

    /// Feed a raw reading of any primitive numeric type, e.g. `u16` ADC counts.
    #[inline]
    pub fn compute_value_from<I>(&mut self, raw: I) -> T
    where
        T: 'static,
        I: AsPrimitive<T>,
    {
        self.compute_value(raw.as_())
    }

    /// Last filtered value, or `None` if no sample was ever processed.
    #[inline]
    pub fn value(&self) -> Option<T> {
        if self.has_value {
            Some(self.value)
        } else {
            None
        }
    }

    /// Whether a baseline sample was consumed since construction or reset.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl<T: FloatCore> Default for ExponentialFilter<T> {
    fn default() -> Self {
        Self::new(default_factor())
    }
}
