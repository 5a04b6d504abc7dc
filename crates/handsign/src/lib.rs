//! Static hand gesture classification.
//!
//! `handsign` turns the 21 landmarks of a tracked hand into a gesture label like `PEACE` or
//! `THUMBS_UP`. It does not detect hands itself: landmarks come from an external hand-tracking
//! network (eg. MediaPipe's hand landmark model), in normalized image coordinates.
//!
//! # Overview
//!
//! 1. [`HandLandmarks`] validates the detector output (exactly 21 points, all coordinates finite).
//! 2. [`curvature`] measures how much every finger is bent, and decides whether it is open or
//!    closed.
//! 3. [`gesture`] looks up the resulting [`FingerStates`] in a fixed catalogue, falling back to a
//!    string like `OCCCO` for poses that don't match any gesture.
//!
//! [`GestureEstimator`] ties these steps together. Classification is stateless: each hand, in each
//! frame, is classified independently of all others.
//!
//! ```
//! use handsign::{synthetic, FingerStates, GestureEstimator};
//!
//! let hand = synthetic::hand("COOCC".parse::<FingerStates>()?);
//! let estimator = GestureEstimator::new(&hand)?;
//! assert_eq!(estimator.gesture().to_string(), "PEACE");
//! # Ok::<_, handsign::Error>(())
//! ```
//!
//! # Environment Variables
//!
//! The [`overlay`] helpers used by the `handsign` tool are configured through environment
//! variables, see [`config`].

use log::LevelFilter;

pub mod config;
pub mod curvature;
mod error;
pub mod estimator;
pub mod gesture;
pub mod landmark;
pub mod overlay;
pub mod resolution;
pub mod synthetic;

pub use error::{Error, Result};
pub use estimator::{estimate, GestureEstimator};
pub use gesture::{classify, FingerStates, Gesture, GestureLabel};
pub use landmark::{Finger, HandLandmarks, Landmark, LandmarkIdx};

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and `handsign` will log at *trace*
/// level. Otherwise, they will log at *debug* level. `RUST_LOG` overrides both.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
