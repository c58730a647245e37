//! Pure core integration functions.
//!
//! Drives an [`Overlay`] over a [`HeadlessWindow`] through a replay script
//! and reports the resulting geometry after every step. No I/O happens here
//! apart from [`write_reports`], which takes any writer.

use serde::Serialize;
use std::io::Write;

use crate::config::ResolvedConfig;
use crate::model::WindowState;
use crate::overlay::Overlay;
use crate::source::{FixedRadioSource, Script, ScriptStep};
use crate::window::{HeadlessWindow, OverlayWindow, WindowCommand};

/// Overlay as assembled for script replay.
pub type ReplayOverlay = Overlay<FixedRadioSource, ResolvedConfig, HeadlessWindow>;

/// Window geometry and state after one script step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    /// Zero-based index of the step in the script.
    pub step: usize,
    /// Step label, see [`ScriptStep::label`].
    pub action: &'static str,
    /// Window width after the step settled.
    pub width: f64,
    /// Window height after the step settled.
    pub height: f64,
    /// Minimum height enforced by the window.
    pub min_height: f64,
    /// Tier index: extra radio rows above the base height.
    pub tier: u8,
    /// Ratio the window is locked to.
    pub aspect_ratio: f64,
    /// Content scale.
    pub scale: f64,
    /// Window opacity.
    pub opacity: f64,
    /// Normal or minimised.
    pub window_state: WindowState,
    /// Whether the window has been closed.
    pub closed: bool,
}

impl StepReport {
    fn capture(step: usize, action: &'static str, overlay: &ReplayOverlay) -> Self {
        let window = overlay.window();
        let size = window.size();
        Self {
            step,
            action,
            width: size.width,
            height: size.height,
            min_height: window.min_height(),
            tier: overlay.tier().index(),
            aspect_ratio: overlay.aspect_ratio(),
            scale: overlay.scale(),
            opacity: window.opacity(),
            window_state: window.state(),
            closed: window.is_closed(),
        }
    }
}

/// Build a shown overlay from resolved configuration.
pub fn build_overlay(config: &ResolvedConfig) -> ReplayOverlay {
    let geometry = &config.geometry;
    let window = HeadlessWindow::new(
        geometry.min_width,
        geometry.base_min_height,
        geometry.initial_size(),
    );
    let mut overlay = Overlay::new(
        geometry.layout_state(),
        FixedRadioSource::default(),
        config.clone(),
        window,
        (),
    );
    overlay.show();
    overlay.window_mut().take_journal();
    overlay
}

/// Apply one step to the overlay and return the window calls it caused.
///
/// The journal is drained, so it never holds more than one step's calls.
pub fn apply_step(overlay: &mut ReplayOverlay, step: &ScriptStep) -> Vec<WindowCommand> {
    match step {
        ScriptStep::Refresh(snapshot) => {
            overlay.source_mut().set(snapshot.clone());
            overlay.on_refresh_tick();
        }
        ScriptStep::Resize { width, height } => {
            overlay.window_mut().resize(*width, *height);
            overlay.settle();
        }
        ScriptStep::Opacity(opacity) => overlay.set_opacity(*opacity),
        ScriptStep::Minimise => {
            overlay.minimise();
        }
        ScriptStep::Close => overlay.close(),
    }
    overlay.window_mut().take_journal()
}

/// Replay `script` and report the geometry after each step.
///
/// Replay stops after the step that closes the window.
pub fn replay(script: &Script, config: &ResolvedConfig) -> Vec<StepReport> {
    let mut overlay = build_overlay(config);
    let mut reports = Vec::with_capacity(script.steps.len());

    for (index, step) in script.steps.iter().enumerate() {
        let commands = apply_step(&mut overlay, step);
        tracing::trace!(step = index, commands = commands.len(), "step applied");
        reports.push(StepReport::capture(index, step.label(), &overlay));
        if overlay.window().is_closed() {
            tracing::debug!(step = index, "overlay closed, stopping replay");
            break;
        }
    }

    reports
}

/// Write reports as JSON lines.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_reports<W: Write>(reports: &[StepReport], mut out: W) -> std::io::Result<()> {
    for report in reports {
        serde_json::to_writer(&mut out, report)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Modulation, RadioSnapshot};

    fn script(steps: Vec<ScriptStep>) -> Script {
        Script { steps }
    }

    #[test]
    fn replay_reports_every_step() {
        let reports = replay(
            &script(vec![
                ScriptStep::Refresh(Some(RadioSnapshot::current([Modulation::Am; 5]))),
                ScriptStep::Resize {
                    width: 1400.0,
                    height: 700.0,
                },
            ]),
            &ResolvedConfig::default(),
        );

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].tier, 1);
        assert_eq!(reports[0].min_height, 350.0);
        // 700 * (600 / 350)
        assert!((reports[1].width / reports[1].height - 600.0 / 350.0).abs() < 1e-9);
        assert_eq!(reports[1].height, 700.0);
    }

    #[test]
    fn replay_stops_after_close() {
        let reports = replay(
            &script(vec![ScriptStep::Close, ScriptStep::Opacity(0.2)]),
            &ResolvedConfig::default(),
        );

        assert_eq!(reports.len(), 1);
        assert!(reports[0].closed);
    }

    #[test]
    fn minimise_with_taskbar_hide_closes_and_stops() {
        let config = ResolvedConfig {
            taskbar_hide: true,
            ..ResolvedConfig::default()
        };

        let reports = replay(
            &script(vec![ScriptStep::Minimise, ScriptStep::Close]),
            &config,
        );

        assert_eq!(reports.len(), 1);
        assert!(reports[0].closed);
        assert_eq!(reports[0].window_state, WindowState::Normal);
    }

    #[test]
    fn build_overlay_locks_initial_size() {
        let mut config = ResolvedConfig::default();
        config.geometry.initial_width = 900.0;
        config.geometry.initial_height = 400.0;

        let overlay = build_overlay(&config);

        assert_eq!(overlay.window().size().width, 800.0);
        assert_eq!(overlay.window().size().height, 400.0);
    }

    #[test]
    fn apply_step_drains_the_window_journal() {
        let mut overlay = build_overlay(&ResolvedConfig::default());
        assert!(overlay.window().journal().is_empty());

        let commands = apply_step(
            &mut overlay,
            &ScriptStep::Refresh(Some(RadioSnapshot::current([Modulation::Am; 5]))),
        );

        assert_eq!(commands.first(), Some(&WindowCommand::SetMinHeight(350.0)));
        assert!(overlay.window().journal().is_empty());

        let commands = apply_step(&mut overlay, &ScriptStep::Opacity(0.5));
        assert_eq!(commands, vec![WindowCommand::SetOpacity(0.5)]);
        assert!(overlay.window().journal().is_empty());
    }

    #[test]
    fn write_reports_emits_one_line_per_report() {
        let reports = replay(
            &script(vec![ScriptStep::Opacity(0.5), ScriptStep::Minimise]),
            &ResolvedConfig::default(),
        );
        let mut out = Vec::new();

        write_reports(&reports, &mut out).expect("writing to a Vec cannot fail");

        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains(r#""window_state":"minimized""#));
    }
}
