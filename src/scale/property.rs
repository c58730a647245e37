//! Coerced scale value with change notification.

/// Old and new value of a scale update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleChange {
    /// Value before the update.
    pub old: f64,
    /// Coerced value after the update.
    pub new: f64,
}

/// Receives scale updates. Content renderers implement this to rescale.
pub trait ScaleObserver {
    /// Called after the stored scale changed.
    fn scale_changed(&mut self, _change: ScaleChange) {}
}

/// No-op observer.
impl ScaleObserver for () {}

/// Observer that records every change it receives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingObserver {
    /// Changes in the order they were received.
    pub changes: Vec<ScaleChange>,
}

impl ScaleObserver for RecordingObserver {
    fn scale_changed(&mut self, change: ScaleChange) {
        self.changes.push(change);
    }
}

/// Uniform content scale.
///
/// Every write goes through [`ScaleValue::coerce`], so the stored value is
/// never NaN and never below [`ScaleValue::FLOOR`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleValue {
    value: f64,
}

impl Default for ScaleValue {
    fn default() -> Self {
        Self {
            value: Self::DEFAULT,
        }
    }
}

impl ScaleValue {
    /// Initial value, and the substitute for NaN.
    pub const DEFAULT: f64 = 1.0;
    /// Lower bound. There is no upper bound.
    pub const FLOOR: f64 = 0.1;

    /// Current coerced value.
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Map a raw value into the valid range.
    ///
    /// ```
    /// use radio_overlay::scale::ScaleValue;
    ///
    /// assert_eq!(ScaleValue::coerce(f64::NAN), 1.0);
    /// assert_eq!(ScaleValue::coerce(0.02), 0.1);
    /// assert_eq!(ScaleValue::coerce(3.5), 3.5);
    /// ```
    pub fn coerce(raw: f64) -> f64 {
        if raw.is_nan() {
            return Self::DEFAULT;
        }
        raw.max(Self::FLOOR)
    }

    /// Coerce and store `raw`, returning the old and new value.
    pub fn set(&mut self, raw: f64) -> ScaleChange {
        let old = self.value;
        self.value = Self::coerce(raw);
        ScaleChange {
            old,
            new: self.value,
        }
    }

    /// Coerce and store `raw`, notifying `observer` if the value changed.
    pub fn set_and_notify<O: ScaleObserver + ?Sized>(&mut self, raw: f64, observer: &mut O) {
        let change = self.set(raw);
        if change.old != change.new {
            observer.scale_changed(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one() {
        assert_eq!(ScaleValue::default().get(), 1.0);
    }

    #[test]
    fn nan_is_substituted_with_one() {
        let mut scale = ScaleValue::default();
        scale.set(0.5);
        let change = scale.set(f64::NAN);
        assert_eq!(change, ScaleChange { old: 0.5, new: 1.0 });
    }

    #[test]
    fn small_values_clamp_to_floor() {
        assert_eq!(ScaleValue::coerce(0.0), 0.1);
        assert_eq!(ScaleValue::coerce(-4.0), 0.1);
        assert_eq!(ScaleValue::coerce(0.0999), 0.1);
        assert_eq!(ScaleValue::coerce(0.1), 0.1);
    }

    #[test]
    fn no_ceiling() {
        assert_eq!(ScaleValue::coerce(250.0), 250.0);
        assert_eq!(ScaleValue::coerce(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn observer_sees_old_and_new() {
        let mut scale = ScaleValue::default();
        let mut observer = RecordingObserver::default();

        scale.set_and_notify(2.0, &mut observer);
        scale.set_and_notify(0.01, &mut observer);

        assert_eq!(
            observer.changes,
            vec![
                ScaleChange { old: 1.0, new: 2.0 },
                ScaleChange { old: 2.0, new: 0.1 },
            ]
        );
    }

    #[test]
    fn unchanged_value_does_not_notify() {
        let mut scale = ScaleValue::default();
        let mut observer = RecordingObserver::default();

        scale.set_and_notify(1.0, &mut observer);
        scale.set_and_notify(f64::NAN, &mut observer);

        assert!(observer.changes.is_empty());
    }

    #[test]
    fn unit_observer_is_a_no_op() {
        let mut scale = ScaleValue::default();
        scale.set_and_notify(3.0, &mut ());
        assert_eq!(scale.get(), 3.0);
    }
}
