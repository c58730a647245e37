//! Title-bar buttons and the opacity slider.

use crate::source::{SettingKey, SettingsSource};

/// What the minimise button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimiseAction {
    /// Minimise the window.
    Minimise,
    /// The overlay has no taskbar entry when this is set. Minimising would
    /// leave a sliver of the always-on-top window stuck at the screen edge,
    /// so the overlay closes instead.
    Close,
}

/// Resolve the minimise button against the taskbar-hide setting.
pub fn minimise_action<G: SettingsSource + ?Sized>(settings: &G) -> MinimiseAction {
    if settings.get_bool(SettingKey::RadioOverlayTaskbarHide) {
        MinimiseAction::Close
    } else {
        MinimiseAction::Minimise
    }
}

/// Opacity accepted by the window, in `[0.0, 1.0]`. NaN becomes opaque.
pub fn clamp_opacity(opacity: f64) -> f64 {
    if opacity.is_nan() {
        1.0
    } else {
        opacity.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Settings(bool);

    impl SettingsSource for Settings {
        fn get_bool(&self, key: SettingKey) -> bool {
            match key {
                SettingKey::RadioOverlayTaskbarHide => self.0,
            }
        }
    }

    #[test]
    fn taskbar_hide_turns_minimise_into_close() {
        assert_eq!(minimise_action(&Settings(true)), MinimiseAction::Close);
        assert_eq!(minimise_action(&Settings(false)), MinimiseAction::Minimise);
    }

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(clamp_opacity(0.4), 0.4);
        assert_eq!(clamp_opacity(-1.0), 0.0);
        assert_eq!(clamp_opacity(3.0), 1.0);
        assert_eq!(clamp_opacity(f64::NAN), 1.0);
    }
}
