//! Replay scripts: recorded refresh ticks and resize events.
//!
//! A script is a JSON document:
//!
//! ```json
//! {
//!   "steps": [
//!     {"refresh": {"current": true, "radios": [{"modulation": "AM"}]}},
//!     {"refresh": null},
//!     {"resize": {"width": 800.0, "height": 300.0}},
//!     {"opacity": 0.6},
//!     "minimise",
//!     "close"
//!   ]
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::model::{RadioSnapshot, ScriptError};

/// A parsed replay script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Events in replay order.
    pub steps: Vec<ScriptStep>,
}

/// A single scripted event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    /// Publish a new snapshot (or none) and run one refresh tick.
    Refresh(Option<RadioSnapshot>),
    /// User drags the window edge to the given size.
    Resize {
        /// Width the user dragged to.
        width: f64,
        /// Height the user dragged to.
        height: f64,
    },
    /// Opacity slider moved.
    Opacity(f64),
    /// Minimise button pressed.
    Minimise,
    /// Close button pressed.
    Close,
}

impl ScriptStep {
    /// Short label used in replay reports.
    pub fn label(&self) -> &'static str {
        match self {
            ScriptStep::Refresh(_) => "refresh",
            ScriptStep::Resize { .. } => "resize",
            ScriptStep::Opacity(_) => "opacity",
            ScriptStep::Minimise => "minimise",
            ScriptStep::Close => "close",
        }
    }
}

/// Parse a script from JSON text. `path` is only used for error reporting.
pub fn parse_script(contents: &str, path: &Path) -> Result<Script, ScriptError> {
    serde_json::from_str(contents).map_err(|source| ScriptError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a script file.
///
/// # Errors
///
/// Returns [`ScriptError::Read`] if the file cannot be read and
/// [`ScriptError::Parse`] if it is not a valid script.
pub fn load_script(path: &Path) -> Result<Script, ScriptError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&contents, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Modulation;
    use std::fs;

    #[test]
    fn parses_every_step_kind() {
        let json = r#"{"steps":[
            {"refresh":{"current":true,"radios":[{"modulation":"AM"},{"modulation":"DISABLED"}]}},
            {"refresh":null},
            {"resize":{"width":800.0,"height":300.0}},
            {"opacity":0.5},
            "minimise",
            "close"
        ]}"#;

        let script = parse_script(json, Path::new("inline.json")).expect("valid script");

        assert_eq!(
            script.steps,
            vec![
                ScriptStep::Refresh(Some(RadioSnapshot::current([
                    Modulation::Am,
                    Modulation::Disabled
                ]))),
                ScriptStep::Refresh(None),
                ScriptStep::Resize {
                    width: 800.0,
                    height: 300.0
                },
                ScriptStep::Opacity(0.5),
                ScriptStep::Minimise,
                ScriptStep::Close,
            ]
        );
    }

    #[test]
    fn unknown_step_is_a_parse_error() {
        let result = parse_script(r#"{"steps":["explode"]}"#, Path::new("bad.json"));
        match result {
            Err(ScriptError::Parse { path, .. }) => assert_eq!(path, Path::new("bad.json")),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = load_script(Path::new("/nonexistent/radio-overlay/script.json"));
        assert!(matches!(result, Err(ScriptError::Read { .. })));
    }

    #[test]
    fn load_script_reads_file() {
        let path = std::env::temp_dir().join("radio_overlay_test_script.json");
        fs::write(&path, r#"{"steps":["close"]}"#).expect("Failed to write test script");

        let script = load_script(&path).expect("script should load");
        assert_eq!(script.steps, vec![ScriptStep::Close]);

        fs::remove_file(path).ok();
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(ScriptStep::Refresh(None).label(), "refresh");
        assert_eq!(ScriptStep::Opacity(1.0).label(), "opacity");
        assert_eq!(ScriptStep::Minimise.label(), "minimise");
    }
}
