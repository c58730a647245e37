//! Aspect lock and content scale.
//!
//! On every size-changed event the engine overwrites the axis that did *not*
//! change so the window keeps `min_width / min_height` proportions, then
//! derives the content scale from the corrected size. Overwriting the other
//! axis, never the one that changed, is what keeps the toolkit's follow-up
//! notification from feeding back.

use tracing::{debug, trace, warn};

use crate::model::{Size, SizeChanged};
use crate::window::OverlayWindow;

use super::property::{ScaleObserver, ScaleValue};

/// Raw (uncoerced) content scale for a window of size `actual`.
///
/// The smaller of the two axis scales relative to `reference_width`. NaN if
/// either axis scale is NaN, or if the reference width is zero.
pub fn raw_scale(actual: Size, reference_width: f64) -> f64 {
    if reference_width == 0.0 {
        return f64::NAN;
    }
    let y_scale = actual.height / reference_width;
    let x_scale = actual.width / reference_width;
    // f64::min ignores NaN; the scale must not.
    if x_scale.is_nan() || y_scale.is_nan() {
        f64::NAN
    } else {
        x_scale.min(y_scale)
    }
}

/// Aspect/scale engine state.
#[derive(Debug, Clone)]
pub struct AspectScaleEngine {
    min_width: f64,
    aspect_ratio: f64,
    scale: ScaleValue,
    recalculations: u64,
}

impl AspectScaleEngine {
    /// `min_width` is the design-time minimum width and the scale reference
    /// width. `aspect_ratio` is the lock currently owned by the layout state.
    pub fn new(min_width: f64, aspect_ratio: f64) -> Self {
        Self {
            min_width,
            aspect_ratio,
            scale: ScaleValue::default(),
            recalculations: 0,
        }
    }

    /// Ratio the window is locked to. Reflects the minimum footprint, not the
    /// current size.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Current coerced content scale.
    pub fn scale(&self) -> f64 {
        self.scale.get()
    }

    /// Number of times [`recalculate`](Self::recalculate) has run.
    pub fn recalculations(&self) -> u64 {
        self.recalculations
    }

    /// Handle one size-changed event: lock the aspect ratio, then rescale.
    pub fn handle_size_changed<W, O>(&mut self, event: SizeChanged, window: &mut W, observer: &mut O)
    where
        W: OverlayWindow + ?Sized,
        O: ScaleObserver + ?Sized,
    {
        self.apply_lock(event, window);
        self.calculate_scale(window.size(), observer);
    }

    /// Adopt `aspect_ratio` from the layout state and re-lock the current
    /// size to it.
    ///
    /// The ratio is taken as given, never re-derived from the window, so a
    /// toolkit that ignores or adjusts the new minimum height cannot make the
    /// lock drift from the layout.
    ///
    /// Ends with [`force_relayout`](Self::force_relayout): a change of the
    /// minimum alone does not reach content that only listens for size
    /// changes.
    pub fn recalculate<W, O>(&mut self, aspect_ratio: f64, window: &mut W, observer: &mut O)
    where
        W: OverlayWindow + ?Sized,
        O: ScaleObserver + ?Sized,
    {
        self.recalculations += 1;
        self.aspect_ratio = aspect_ratio;
        debug!(aspect_ratio, "recalculating overlay geometry");

        let current = window.size();
        self.handle_size_changed(SizeChanged::unchanged(current), window, observer);
        Self::force_relayout(window);
    }

    /// Grow the window by exactly one unit of height.
    ///
    /// The resulting size-changed notification re-locks the height, so the
    /// perturbation is undone by the next event and cannot grow.
    pub fn force_relayout<W: OverlayWindow + ?Sized>(window: &mut W) {
        let height = window.size().height;
        window.set_height(height + 1.0);
    }

    /// Recompute the content scale for the window's actual size.
    pub fn calculate_scale<O: ScaleObserver + ?Sized>(&mut self, actual: Size, observer: &mut O) {
        let raw = raw_scale(actual, self.min_width);
        self.scale.set_and_notify(raw, observer);
    }

    fn apply_lock<W: OverlayWindow + ?Sized>(&self, event: SizeChanged, window: &mut W) {
        let ratio = self.aspect_ratio;
        if !(ratio.is_finite() && ratio > 0.0) {
            warn!(aspect_ratio = ratio, "degenerate aspect ratio, leaving size unlocked");
            return;
        }

        if event.width_changed {
            let width = event.new_size.height * ratio;
            trace!(width, "width follows height");
            window.set_width(width);
        } else {
            let height = event.new_size.width / ratio;
            trace!(height, "height follows width");
            window.set_height(height);
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
