//! Headless overlay window.
//!
//! Models the toolkit behaviour the geometry engine depends on, without a
//! display:
//!
//! - actual size is clamped to the minimum size, and raising the minimum
//!   height grows a window that is now too short;
//! - a setter that changes the size raises a size-changed notification;
//!   notifications raised before the engine drains them are coalesced;
//! - sizes within [`SIZE_TOLERANCE`] of the current value are treated as
//!   unchanged, so recomputing the same locked size settles.
//!
//! Every call the engine makes is appended to a command journal, which tests
//! use to count recalculations and state normalizations.

use crate::model::{Size, SizeChanged, WindowState};

use super::OverlayWindow;

/// Relative tolerance under which two lengths are considered equal.
pub const SIZE_TOLERANCE: f64 = 1e-9;

/// A call made on the window, in the order it was made.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowCommand {
    /// [`OverlayWindow::set_min_height`] with the requested value.
    SetMinHeight(f64),
    /// [`OverlayWindow::set_width`] with the requested, unclamped value.
    SetWidth(f64),
    /// [`OverlayWindow::set_height`] with the requested, unclamped value.
    SetHeight(f64),
    /// [`OverlayWindow::set_window_state`].
    SetWindowState(WindowState),
    /// [`OverlayWindow::clear_status_text`].
    ClearStatusText,
    /// [`OverlayWindow::set_opacity`].
    SetOpacity(f64),
    /// [`OverlayWindow::close`].
    Close,
}

/// In-memory window used by tests and script replay.
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    min_width: f64,
    min_height: f64,
    size: Size,
    state: WindowState,
    opacity: f64,
    status_text: String,
    closed: bool,
    pending: Option<SizeChanged>,
    journal: Vec<WindowCommand>,
}

fn are_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= SIZE_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

impl HeadlessWindow {
    /// Create a window with the given minimum and initial size.
    ///
    /// The initial size is clamped to the minimum.
    pub fn new(min_width: f64, min_height: f64, initial: Size) -> Self {
        Self {
            min_width,
            min_height,
            size: Size::new(
                initial.width.max(min_width),
                initial.height.max(min_height),
            ),
            state: WindowState::Normal,
            opacity: 1.0,
            status_text: String::new(),
            closed: false,
            pending: None,
            journal: Vec::new(),
        }
    }

    /// Simulate the user dragging the window border.
    ///
    /// Not journaled: this is input, not an engine command.
    pub fn resize(&mut self, width: f64, height: f64) {
        let old = self.size;
        self.size = Size::new(width.max(self.min_width), height.max(self.min_height));
        let event = SizeChanged {
            new_size: self.size,
            width_changed: !are_close(old.width, self.size.width),
            height_changed: !are_close(old.height, self.size.height),
        };
        if event.width_changed || event.height_changed {
            self.raise(event);
        }
    }

    /// Simulate the user pressing the minimise button at the toolkit level.
    pub fn minimise(&mut self) {
        self.state = WindowState::Minimized;
    }

    /// Show a status line, as the radio panels do for connection messages.
    pub fn show_status(&mut self, text: impl Into<String>) {
        self.status_text = text.into();
    }

    /// Current presentation state.
    pub fn state(&self) -> WindowState {
        self.state
    }

    /// Last opacity set, 1.0 initially.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Status line currently shown.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Whether [`OverlayWindow::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether a size-changed notification is waiting to be drained.
    pub fn has_pending_size_change(&self) -> bool {
        self.pending.is_some()
    }

    /// Calls made since creation or the last [`take_journal`](Self::take_journal).
    pub fn journal(&self) -> &[WindowCommand] {
        &self.journal
    }

    /// Return and clear the command journal.
    pub fn take_journal(&mut self) -> Vec<WindowCommand> {
        std::mem::take(&mut self.journal)
    }

    /// Number of journaled calls matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&WindowCommand) -> bool) -> usize {
        self.journal.iter().filter(|c| predicate(*c)).count()
    }

    fn raise(&mut self, event: SizeChanged) {
        self.pending = Some(match self.pending.take() {
            Some(earlier) => earlier.merge(event),
            None => event,
        });
    }
}

impl OverlayWindow for HeadlessWindow {
    fn min_height(&self) -> f64 {
        self.min_height
    }

    fn set_min_height(&mut self, min_height: f64) {
        self.journal.push(WindowCommand::SetMinHeight(min_height));
        self.min_height = min_height;
        if self.size.height < min_height {
            self.size.height = min_height;
            self.raise(SizeChanged::height(self.size));
        }
    }

    fn size(&self) -> Size {
        self.size
    }

    fn set_width(&mut self, width: f64) {
        self.journal.push(WindowCommand::SetWidth(width));
        let width = width.max(self.min_width);
        if !are_close(width, self.size.width) {
            self.size.width = width;
            self.raise(SizeChanged::width(self.size));
        }
    }

    fn set_height(&mut self, height: f64) {
        self.journal.push(WindowCommand::SetHeight(height));
        let height = height.max(self.min_height);
        if !are_close(height, self.size.height) {
            self.size.height = height;
            self.raise(SizeChanged::height(self.size));
        }
    }

    fn set_window_state(&mut self, state: WindowState) {
        self.journal.push(WindowCommand::SetWindowState(state));
        self.state = state;
    }

    fn clear_status_text(&mut self) {
        self.journal.push(WindowCommand::ClearStatusText);
        self.status_text.clear();
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.journal.push(WindowCommand::SetOpacity(opacity));
        self.opacity = opacity;
    }

    fn close(&mut self) {
        self.journal.push(WindowCommand::Close);
        self.closed = true;
    }

    fn take_size_change(&mut self) -> Option<SizeChanged> {
        self.pending.take()
    }
}
