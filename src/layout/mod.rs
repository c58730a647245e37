//! Layout controller: radio count to minimum-height tier.

pub mod controller;

pub use controller::{select_tier, LayoutController, LayoutState, RefreshOutcome, Tier, TierTransition};
