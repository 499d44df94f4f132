#![no_std]

//! Exponential smoothing for noisy sensor readings on small targets.
//!
//! ```
//! use exp_smooth::ExponentialFilter;
//!
//! let mut filter = ExponentialFilter::new(0.2_f32);
//! assert_eq!(filter.compute_value(150.0), 150.0);
//! assert_eq!(filter.compute_value(200.0), 160.0);
//! ```

mod filter;
pub mod factor;

pub use filter::ExponentialFilter;
pub use factor::{sanitize_factor, DEFAULT_FACTOR};

#[cfg(feature = "time-constant")]
pub use factor::factor_from_time_constant;

/// Human-readable library identifier for diagnostic output.
pub const VERSION: &str = concat!("EXP-SMOOTH ", env!("CARGO_PKG_VERSION"));
