//! Radio snapshot types consumed by the layout controller.
//!
//! The overlay only cares whether a radio slot is in use. Everything else a
//! radio carries (frequency, encryption, volume) belongs to the radio source
//! and is never read here.

use serde::Deserialize;

/// Modulation reported for a single radio slot.
///
/// `Disabled` marks an unused slot. Every other variant counts as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modulation {
    /// Amplitude modulation.
    Am,
    /// Frequency modulation.
    Fm,
    /// Aircraft intercom.
    Intercom,
    /// Slot not in use.
    Disabled,
    /// HAVE QUICK frequency hopping.
    Havequick,
    /// Satellite communication.
    Satcom,
    /// MIDS datalink voice.
    Mids,
    /// SINCGARS frequency hopping.
    Sincgars,
}

impl Modulation {
    /// Whether a radio with this modulation occupies a panel row.
    pub fn is_active(self) -> bool {
        self != Modulation::Disabled
    }
}

/// One radio slot as seen by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RadioEntry {
    /// Modulation currently selected on the radio.
    pub modulation: Modulation,
}

impl RadioEntry {
    /// Entry with the given modulation.
    pub fn new(modulation: Modulation) -> Self {
        Self { modulation }
    }

    /// Whether this slot counts towards the active radios.
    pub fn is_active(&self) -> bool {
        self.modulation.is_active()
    }
}

/// Point-in-time view of the player's radios.
///
/// Owned by the radio source and refreshed on its own cadence. A snapshot
/// that is not current (e.g. the simulator stopped sending updates) is
/// treated exactly like a missing one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RadioSnapshot {
    /// Radio slots in panel order.
    #[serde(default)]
    pub radios: Vec<RadioEntry>,
    /// Validity flag set by the source.
    #[serde(default)]
    pub current: bool,
}

impl RadioSnapshot {
    /// Create a current snapshot from a list of modulations.
    pub fn current(modulations: impl IntoIterator<Item = Modulation>) -> Self {
        Self {
            radios: modulations.into_iter().map(RadioEntry::new).collect(),
            current: true,
        }
    }

    /// Create a stale snapshot. Its radios are ignored by the layout controller.
    pub fn stale(modulations: impl IntoIterator<Item = Modulation>) -> Self {
        Self {
            current: false,
            ..Self::current(modulations)
        }
    }

    /// Whether the source still vouches for this snapshot.
    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Number of radio slots, active or not.
    pub fn len(&self) -> usize {
        self.radios.len()
    }

    /// Whether the snapshot has no radio slots at all.
    pub fn is_empty(&self) -> bool {
        self.radios.is_empty()
    }

    /// Number of radios whose modulation is not `Disabled`.
    pub fn active_count(&self) -> usize {
        self.radios.iter().filter(|r| r.is_active()).count()
    }

    /// Whether the slot at `index` exists and is active.
    ///
    /// Out-of-range slots are inactive.
    pub fn is_slot_active(&self, index: usize) -> bool {
        self.radios.get(index).is_some_and(RadioEntry::is_active)
    }
}
