//! Acceptance tests: radio count drives window geometry end to end.

use radio_overlay::layout::Tier;
use radio_overlay::model::{Modulation::*, RadioSnapshot, Size, SizeChanged, WindowState};
use radio_overlay::scale::{RecordingObserver, ScaleChange};
use radio_overlay::source::{FixedRadioSource, SettingKey, SettingsSource};
use radio_overlay::window::{HeadlessWindow, OverlayWindow, WindowCommand};
use radio_overlay::{layout::LayoutState, Overlay};

struct Settings;

impl SettingsSource for Settings {
    fn get_bool(&self, _key: SettingKey) -> bool {
        false
    }
}

type TestOverlay = Overlay<FixedRadioSource, Settings, HeadlessWindow, RecordingObserver>;

/// Base 300, one radio row 50, design width 600.
fn overlay() -> TestOverlay {
    let mut overlay = Overlay::new(
        LayoutState::new(600.0, 300.0, 50.0),
        FixedRadioSource::default(),
        Settings,
        HeadlessWindow::new(600.0, 300.0, Size::new(600.0, 300.0)),
        RecordingObserver::default(),
    );
    overlay.show();
    overlay.window_mut().take_journal();
    overlay
}

fn tick(overlay: &mut TestOverlay, snapshot: RadioSnapshot) {
    overlay.source_mut().set(Some(snapshot));
    overlay.on_refresh_tick();
}

#[test]
fn radio_counts_zero_to_four_keep_base_height() {
    let mut o = overlay();
    for count in 0..=4 {
        tick(&mut o, RadioSnapshot::current(std::iter::repeat(Am).take(count)));
        assert_eq!(o.tier(), Tier::Base);
        assert_eq!(o.window().min_height(), 300.0);
    }
    assert!(o.window().journal().is_empty(), "no transition, no window calls");
}

#[test]
fn fifth_radio_adds_one_row() {
    let mut o = overlay();
    tick(&mut o, RadioSnapshot::current([Am, Fm, Am, Fm, Intercom]));
    assert_eq!(o.window().min_height(), 350.0);
}

#[test]
fn fifth_slot_alone_adds_one_row() {
    let mut o = overlay();
    tick(
        &mut o,
        RadioSnapshot::current([Disabled, Disabled, Disabled, Disabled, Fm]),
    );
    assert_eq!(o.window().min_height(), 350.0);
}

#[test]
fn sixth_radio_adds_two_rows_and_locks_to_one_and_a_half() {
    // GIVEN base 300 and row 50
    let mut o = overlay();

    // WHEN six radios are active
    tick(&mut o, RadioSnapshot::current([Am; 6]));

    // THEN min height is 400 and the lock ratio is 600 / 400
    assert_eq!(o.window().min_height(), 400.0);
    assert_eq!(o.aspect_ratio(), 1.5);

    // AND a width-changed event reporting height 400 recomputes width to 600
    o.window_mut().resize(640.0, 400.0);
    let event = o.window_mut().take_size_change().expect("user resize");
    assert_eq!(event, SizeChanged::width(Size::new(640.0, 400.0)));
    o.on_size_changed(event);
    assert_eq!(o.window().size().width, 600.0);
}

#[test]
fn each_transition_signals_once() {
    let mut o = overlay();
    let sequence = [
        RadioSnapshot::current([Am; 6]),
        RadioSnapshot::current([Am; 6]),
        RadioSnapshot::current([Am; 5]),
        RadioSnapshot::stale([Am; 5]),
        RadioSnapshot::current([Am; 2]),
    ];
    // Transitions: base→2, 2→1, 1→base. The rest are no-ops.
    for snapshot in sequence {
        tick(&mut o, snapshot);
    }

    assert_eq!(o.engine().recalculations(), 3);
    assert_eq!(
        o.window()
            .count(|c| *c == WindowCommand::SetWindowState(WindowState::Normal)),
        3
    );
}

#[test]
fn scale_follows_locked_size() {
    let mut o = overlay();
    tick(&mut o, RadioSnapshot::current([Am; 6]));

    o.window_mut().resize(1200.0, 800.0);
    o.settle();

    assert_eq!(o.window().size(), Size::new(1200.0, 800.0));
    assert_eq!(o.scale(), 800.0 / 600.0);
    let last = o.observer().changes.last().copied();
    assert_eq!(
        last.map(|c: ScaleChange| c.new),
        Some(800.0 / 600.0)
    );
}

#[test]
fn lost_connection_returns_to_base() {
    let mut o = overlay();
    tick(&mut o, RadioSnapshot::current([Am; 6]));

    o.source_mut().set(None);
    let outcome = o.on_refresh_tick();

    assert!(outcome.clear_status);
    assert_eq!(o.tier(), Tier::Base);
    assert_eq!(o.window().size(), Size::new(600.0, 300.0));
}
