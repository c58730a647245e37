//! Window geometry primitives.
//!
//! Sizes are device-independent units, matching what desktop toolkits report
//! for window bounds. Fractional values are expected: the aspect lock derives
//! one axis from the other by multiplication or division.

use serde::Serialize;

/// Width and height of the overlay window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Size from its two axes.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width / height`. NaN or infinite when height is zero.
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// A size-changed notification as reported by the windowing toolkit.
///
/// The flags say which axis the toolkit considers changed. The aspect lock
/// uses them to pick the independent axis for this event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeChanged {
    /// Size after the change.
    pub new_size: Size,
    /// The toolkit reports a new width.
    pub width_changed: bool,
    /// The toolkit reports a new height.
    pub height_changed: bool,
}

impl SizeChanged {
    /// Only the width changed.
    pub fn width(new_size: Size) -> Self {
        Self {
            new_size,
            width_changed: true,
            height_changed: false,
        }
    }

    /// Only the height changed.
    pub fn height(new_size: Size) -> Self {
        Self {
            new_size,
            width_changed: false,
            height_changed: true,
        }
    }

    /// Both axes changed, as for the first layout pass or a corner drag.
    pub fn both(new_size: Size) -> Self {
        Self {
            new_size,
            width_changed: true,
            height_changed: true,
        }
    }

    /// A synthetic event for re-applying the lock to the current size.
    ///
    /// Neither axis is flagged, so height follows width.
    pub fn unchanged(current: Size) -> Self {
        Self {
            new_size: current,
            width_changed: false,
            height_changed: false,
        }
    }

    /// Fold a later notification into this one.
    ///
    /// Flags accumulate and the size is taken from the later event.
    pub fn merge(self, later: SizeChanged) -> Self {
        Self {
            new_size: later.new_size,
            width_changed: self.width_changed || later.width_changed,
            height_changed: self.height_changed || later.height_changed,
        }
    }
}

/// Presentation state of the overlay window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowState {
    /// Shown at its normal bounds.
    #[default]
    Normal,
    /// Minimised to the taskbar.
    Minimized,
}
