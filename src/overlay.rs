//! The overlay coordinator.
//!
//! Owns the layout controller and the aspect/scale engine together with the
//! injected collaborators, and exposes the event entry points the
//! presentation layer calls:
//!
//! - [`Overlay::show`] once, when the window is first laid out
//! - [`Overlay::on_refresh_tick`] on every radio refresh timer tick
//! - [`Overlay::on_size_changed`] for size-changed notifications the toolkit
//!   delivers from its own event loop
//!
//! Everything runs synchronously on the caller's (UI) thread. A refresh that
//! changes the tier completes the whole chain (min height, recalculation,
//! forced relayout, rescale) before returning.

use tracing::warn;

use crate::chrome::{clamp_opacity, minimise_action, MinimiseAction};
use crate::layout::{LayoutController, LayoutState, RefreshOutcome, Tier};
use crate::model::{SizeChanged, WindowState};
use crate::scale::{AspectScaleEngine, ScaleObserver};
use crate::source::{RadioStateSource, SettingsSource};
use crate::window::OverlayWindow;

/// Upper bound on size-changed notifications drained by [`Overlay::settle`].
///
/// A locked window settles in at most two passes; the bound only matters if
/// a toolkit keeps reporting changes.
pub const MAX_SETTLE_PASSES: usize = 16;

/// Radio overlay geometry, wired to its collaborators.
#[derive(Debug)]
pub struct Overlay<S, G, W, O = ()> {
    source: S,
    settings: G,
    window: W,
    observer: O,
    layout: LayoutController,
    engine: AspectScaleEngine,
}

impl<S, G, W, O> Overlay<S, G, W, O>
where
    S: RadioStateSource,
    G: SettingsSource,
    W: OverlayWindow,
    O: ScaleObserver,
{
    /// Wire the collaborators together. Call [`show`](Self::show) once the
    /// window exists.
    pub fn new(layout: LayoutState, source: S, settings: G, window: W, observer: O) -> Self {
        let engine = AspectScaleEngine::new(layout.min_width(), layout.aspect_ratio());
        Self {
            source,
            settings,
            window,
            observer,
            layout: LayoutController::new(layout),
            engine,
        }
    }

    /// First layout pass: lock the initial size and compute the first scale.
    pub fn show(&mut self) {
        let initial = SizeChanged::both(self.window.size());
        self.on_size_changed(initial);
    }

    /// Run one radio refresh tick.
    pub fn on_refresh_tick(&mut self) -> RefreshOutcome {
        let snapshot = self.source.snapshot();
        let outcome = self.layout.refresh(snapshot.as_ref());

        if outcome.clear_status {
            self.window.clear_status_text();
        }

        if let Some(transition) = outcome.transition {
            self.window.set_min_height(transition.min_height);
            let aspect_ratio = self.layout.state().aspect_ratio();
            self.engine
                .recalculate(aspect_ratio, &mut self.window, &mut self.observer);
            self.window.set_window_state(WindowState::Normal);
            self.settle();
        }

        outcome
    }

    /// Handle a size-changed notification, then drain any it caused.
    pub fn on_size_changed(&mut self, event: SizeChanged) {
        self.engine
            .handle_size_changed(event, &mut self.window, &mut self.observer);
        self.settle();
    }

    /// Drain synchronously delivered size-changed notifications.
    ///
    /// Returns the number of notifications handled.
    pub fn settle(&mut self) -> usize {
        let mut passes = 0;
        while passes < MAX_SETTLE_PASSES {
            let Some(event) = self.window.take_size_change() else {
                return passes;
            };
            self.engine
                .handle_size_changed(event, &mut self.window, &mut self.observer);
            passes += 1;
        }
        warn!(
            passes,
            size = ?self.window.size(),
            "window still resizing after settle limit"
        );
        passes
    }

    /// Minimise button. Closes instead when the overlay is hidden from the
    /// taskbar.
    pub fn minimise(&mut self) -> MinimiseAction {
        let action = minimise_action(&self.settings);
        match action {
            MinimiseAction::Close => self.window.close(),
            MinimiseAction::Minimise => self.window.set_window_state(WindowState::Minimized),
        }
        action
    }

    /// Close button.
    pub fn close(&mut self) {
        self.window.close();
    }

    /// Opacity slider moved.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.window.set_opacity(clamp_opacity(opacity));
    }

    /// Current content scale.
    pub fn scale(&self) -> f64 {
        self.engine.scale()
    }

    /// Ratio the engine is locking the window to.
    pub fn aspect_ratio(&self) -> f64 {
        self.engine.aspect_ratio()
    }

    /// Tier selected by the last refresh.
    pub fn tier(&self) -> Tier {
        self.layout.tier()
    }

    /// Geometry owned by the layout controller.
    pub fn layout_state(&self) -> &LayoutState {
        self.layout.state()
    }

    /// The aspect/scale engine.
    pub fn engine(&self) -> &AspectScaleEngine {
        &self.engine
    }

    /// The injected window.
    pub fn window(&self) -> &W {
        &self.window
    }

    /// Mutable access to the window, for feeding user input.
    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    /// Mutable access to the radio source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The scale observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;
