//! Domain model types (pure).
//!
//! Radio snapshots, window geometry and the binary's error taxonomy.

pub mod error;
pub mod geometry;
pub mod radio;

// Re-export for convenience
pub use error::{AppError, ScriptError};
pub use geometry::{Size, SizeChanged, WindowState};
pub use radio::{Modulation, RadioEntry, RadioSnapshot};
