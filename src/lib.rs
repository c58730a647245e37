//! Radio Overlay
//!
//! Geometry and scaling engine for a floating, always-on-top radio overlay
//! window. The window grows its minimum height as a fifth and sixth radio
//! come into use, keeps its proportions locked while the user resizes it,
//! and derives a uniform scale for its content.
//!
//! Pure core, impure shell: everything under [`layout`] and [`scale`] is
//! plain computation over in-memory state. The window and the radio/settings
//! stores are injected through the traits in [`window`] and [`source`].

pub mod chrome;
pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod overlay;
pub mod scale;
pub mod source;
pub mod window;

// Script replay over a headless window
pub mod integration;

pub use overlay::Overlay;
