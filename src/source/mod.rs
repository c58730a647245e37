//! Inbound collaborators.
//!
//! The overlay never reaches for global client state. The radio source and
//! the settings store are injected through these traits, which keeps the
//! layout and scale engine testable without a running client.
//!
//! - [`RadioStateSource`]: current radio snapshot (may be absent)
//! - [`SettingsSource`]: boolean client settings
//! - [`FixedRadioSource`]: in-memory source driven by tests and script replay

use crate::model::RadioSnapshot;

pub mod script;

pub use script::{load_script, Script, ScriptStep};

/// Provider of the player's radio state.
pub trait RadioStateSource {
    /// Latest snapshot, or `None` when no radio data has arrived yet.
    fn snapshot(&self) -> Option<RadioSnapshot>;
}

/// Boolean client settings read by the overlay chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// Close the overlay instead of minimising it, since a minimised
    /// borderless window without a taskbar entry is left stranded on screen.
    RadioOverlayTaskbarHide,
}

/// Provider of client settings.
pub trait SettingsSource {
    /// Current value of a boolean setting.
    fn get_bool(&self, key: SettingKey) -> bool;
}

/// Radio source holding a snapshot set by its owner.
#[derive(Debug, Clone, Default)]
pub struct FixedRadioSource {
    snapshot: Option<RadioSnapshot>,
}

impl FixedRadioSource {
    /// Source starting out with `snapshot`.
    pub fn new(snapshot: Option<RadioSnapshot>) -> Self {
        Self { snapshot }
    }

    /// Replace the snapshot returned on the next refresh tick.
    pub fn set(&mut self, snapshot: Option<RadioSnapshot>) {
        self.snapshot = snapshot;
    }
}

impl RadioStateSource for FixedRadioSource {
    fn snapshot(&self) -> Option<RadioSnapshot> {
        self.snapshot.clone()
    }
}
