//! Minimum-height policy driven by the number of active radios.
//!
//! The overlay shows up to six radio panels but is designed around four. The
//! fifth and sixth panels each add one fixed-height row to the minimum
//! height. The minimum height therefore moves between exactly three tiers and
//! is never interpolated.

use tracing::debug;

use crate::model::RadioSnapshot;

/// Minimum-height tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Tier {
    /// Up to four radios.
    #[default]
    Base,
    /// Fifth radio in use.
    OneExtraRow,
    /// Sixth radio in use.
    TwoExtraRows,
}

impl Tier {
    /// Number of radio rows added to the base height (0, 1 or 2).
    pub fn index(self) -> u8 {
        match self {
            Tier::Base => 0,
            Tier::OneExtraRow => 1,
            Tier::TwoExtraRows => 2,
        }
    }
}

/// Pick the tier for a snapshot.
///
/// A missing or stale snapshot selects [`Tier::Base`]. Otherwise the first
/// matching rule wins:
///
/// 1. six active radios, or slot 6 active: [`Tier::TwoExtraRows`]
/// 2. five active radios, or slot 5 active: [`Tier::OneExtraRow`]
/// 3. anything else: [`Tier::Base`]
///
/// The slot check catches a radio whose modulation still reads disabled in
/// the count while it is being switched on, so both checks are kept.
pub fn select_tier(snapshot: Option<&RadioSnapshot>) -> Tier {
    let Some(snapshot) = snapshot.filter(|s| s.is_current()) else {
        return Tier::Base;
    };

    let active = snapshot.active_count();
    if active == 6 || snapshot.is_slot_active(5) {
        Tier::TwoExtraRows
    } else if active == 5 || snapshot.is_slot_active(4) {
        Tier::OneExtraRow
    } else {
        Tier::Base
    }
}

/// Geometry owned by the layout controller.
///
/// `current_min_height` is always `base_min_height + tier * radio_row_height`
/// and `aspect_ratio` is always `min_width / current_min_height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    min_width: f64,
    base_min_height: f64,
    radio_row_height: f64,
    current_min_height: f64,
    aspect_ratio: f64,
}

impl LayoutState {
    /// Layout at the base tier: the minimum height starts at
    /// `base_min_height`.
    pub fn new(min_width: f64, base_min_height: f64, radio_row_height: f64) -> Self {
        Self {
            min_width,
            base_min_height,
            radio_row_height,
            current_min_height: base_min_height,
            aspect_ratio: min_width / base_min_height,
        }
    }

    /// Design-time minimum width, also the scale reference width.
    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    /// Minimum height with up to four radios.
    pub fn base_min_height(&self) -> f64 {
        self.base_min_height
    }

    /// Height added per extra radio row.
    pub fn radio_row_height(&self) -> f64 {
        self.radio_row_height
    }

    /// Minimum height of the current tier.
    pub fn current_min_height(&self) -> f64 {
        self.current_min_height
    }

    /// `min_width / current_min_height`, the ratio the window is locked to.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Minimum height for `tier`.
    pub fn min_height_for(&self, tier: Tier) -> f64 {
        self.base_min_height + f64::from(tier.index()) * self.radio_row_height
    }

    fn apply(&mut self, tier: Tier) {
        self.current_min_height = self.min_height_for(tier);
        self.aspect_ratio = self.min_width / self.current_min_height;
    }
}

/// A change of minimum-height tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierTransition {
    /// Tier before the refresh.
    pub from: Tier,
    /// Tier after the refresh.
    pub to: Tier,
    /// New minimum height to push to the window.
    pub min_height: f64,
}

/// What a refresh tick asks of the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RefreshOutcome {
    /// Set when the tier changed. The caller must recalculate geometry and
    /// normalize the window state exactly once.
    pub transition: Option<TierTransition>,
    /// Set when radio data is missing or stale.
    pub clear_status: bool,
}

/// Layout controller: tracks the tier and the resulting minimum height.
#[derive(Debug, Clone)]
pub struct LayoutController {
    state: LayoutState,
    tier: Tier,
}

impl LayoutController {
    /// Start at [`Tier::Base`].
    pub fn new(state: LayoutState) -> Self {
        Self {
            state,
            tier: Tier::Base,
        }
    }

    /// Current layout geometry.
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Tier selected by the last refresh.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Evaluate one refresh tick.
    ///
    /// Returns no transition when the tier's height equals the current
    /// minimum height, which is the common case.
    pub fn refresh(&mut self, snapshot: Option<&RadioSnapshot>) -> RefreshOutcome {
        let clear_status = !snapshot.is_some_and(RadioSnapshot::is_current);
        let target = select_tier(snapshot);

        if self.state.min_height_for(target) == self.state.current_min_height() {
            return RefreshOutcome {
                transition: None,
                clear_status,
            };
        }

        let from = self.tier;
        self.state.apply(target);
        self.tier = target;
        debug!(
            from = from.index(),
            to = target.index(),
            min_height = self.state.current_min_height(),
            "radio tier changed"
        );

        RefreshOutcome {
            transition: Some(TierTransition {
                from,
                to: target,
                min_height: self.state.current_min_height(),
            }),
            clear_status,
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
