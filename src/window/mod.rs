//! Outbound window interface.
//!
//! The presentation layer owns the real window. The engine only needs to
//! read and mutate its bounds and state through [`OverlayWindow`].

pub mod headless;

pub use headless::{HeadlessWindow, WindowCommand};

use crate::model::{Size, SizeChanged, WindowState};

/// Bounds and state mutation supplied by the presentation layer.
///
/// Setters may cause the toolkit to raise a size-changed notification. A
/// toolkit that delivers those notifications synchronously hands them back
/// through [`OverlayWindow::take_size_change`]; one that delivers them from
/// its own event loop leaves the default, and calls
/// [`Overlay::on_size_changed`](crate::overlay::Overlay::on_size_changed)
/// itself.
pub trait OverlayWindow {
    /// Minimum height the toolkit currently enforces.
    fn min_height(&self) -> f64;
    /// Raise or lower the enforced minimum height.
    fn set_min_height(&mut self, min_height: f64);

    /// Current actual size.
    fn size(&self) -> Size;
    /// Request a new width. The toolkit may clamp it.
    fn set_width(&mut self, width: f64);
    /// Request a new height. The toolkit may clamp it.
    fn set_height(&mut self, height: f64);

    /// Show the window normally or minimise it.
    fn set_window_state(&mut self, state: WindowState);

    /// Clear the status line shown when radio data goes stale.
    fn clear_status_text(&mut self) {}

    /// Window opacity in `[0.0, 1.0]`.
    fn set_opacity(&mut self, _opacity: f64) {}

    /// Close the window for good.
    fn close(&mut self) {}

    /// Pending size-changed notification raised by an earlier setter.
    fn take_size_change(&mut self) -> Option<SizeChanged> {
        None
    }
}
