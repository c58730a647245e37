//! Aspect/scale engine.
//!
//! - [`engine`]: aspect-ratio lock, recalculation and forced relayout
//! - [`property`]: the coerced scale value and its observer hook

pub mod engine;
pub mod property;

pub use engine::{raw_scale, AspectScaleEngine};
pub use property::{RecordingObserver, ScaleChange, ScaleObserver, ScaleValue};
