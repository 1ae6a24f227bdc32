//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestShelfBuilder` - Builder pattern for machines preloaded with dividers
//! - `RecordingHost` - Host that records every callback
//! - Pointer helpers (`move_to`, `hover_and_select`, `press_selected`)
//! - Layout assertions shared by the invariant tests

#![allow(dead_code)]

use shelfwright::input::{DividerMachine, HostCallbacks, InteractionEvent, InteractionSnapshot, PixelPosition};
use shelfwright::settings::UnitRules;
use shelfwright::types::{Divider, DividerId, InteriorPoint, Orientation, ShelfConfig, Units};
use shelfwright::{DragReleasePolicy, InteractionSettings};

// ============================================================================
// Fixtures
// ============================================================================

/// 36 x 72 x 12 imperial shelf with 3/4" material (interior 34.5 x 70.5)
pub fn imperial_config() -> ShelfConfig {
    ShelfConfig::new(36.0, 72.0, 12.0, 0.75, Units::Imperial)
}

/// 80 x 100 x 30 metric shelf with 2 unit material (interior 76 x 96)
pub fn metric_config() -> ShelfConfig {
    ShelfConfig::new(80.0, 100.0, 30.0, 2.0, Units::Metric)
}

pub fn horizontal(id: u64, position: f64) -> Divider {
    Divider::new(DividerId(id), position, Orientation::Horizontal)
}

pub fn vertical(id: u64, position: f64) -> Divider {
    Divider::new(DividerId(id), position, Orientation::Vertical)
}

// ============================================================================
// TestShelfBuilder
// ============================================================================

/// Builder for machines with a preloaded layout.
///
/// # Example
/// ```ignore
/// let machine = TestShelfBuilder::new()
///     .with_config(metric_config())
///     .with_horizontal(0, 30.0)
///     .with_horizontal(1, 60.0)
///     .build();
/// ```
pub struct TestShelfBuilder {
    config: ShelfConfig,
    settings: InteractionSettings,
    dividers: Vec<Divider>,
}

impl Default for TestShelfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestShelfBuilder {
    /// Empty imperial shelf with default settings.
    pub fn new() -> Self {
        Self {
            config: imperial_config(),
            settings: InteractionSettings::default(),
            dividers: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_settings(mut self, settings: InteractionSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_drag_release(mut self, policy: DragReleasePolicy) -> Self {
        self.settings.drag_release = policy;
        self
    }

    pub fn with_metric_rules(mut self, rules: UnitRules) -> Self {
        self.settings.metric = rules;
        self
    }

    pub fn with_horizontal(mut self, id: u64, position: f64) -> Self {
        self.dividers.push(horizontal(id, position));
        self
    }

    pub fn with_vertical(mut self, id: u64, position: f64) -> Self {
        self.dividers.push(vertical(id, position));
        self
    }

    pub fn build(self) -> DividerMachine {
        let mut machine = DividerMachine::with_settings(self.config, self.settings);
        restore(&mut machine, &self.dividers);
        machine
    }

    pub fn build_with_host<H: HostCallbacks>(self, host: H) -> DividerMachine<H> {
        let mut machine = DividerMachine::with_host(self.config, self.settings, host);
        restore(&mut machine, &self.dividers);
        machine
    }
}

fn restore<H: HostCallbacks>(machine: &mut DividerMachine<H>, dividers: &[Divider]) {
    for divider in dividers {
        machine.send(InteractionEvent::AddExistingDivider { divider: *divider });
    }
}

// ============================================================================
// RecordingHost
// ============================================================================

/// Host that records every callback it receives.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub camera_toggles: Vec<bool>,
    pub committed: Vec<Divider>,
    pub moved: Vec<Divider>,
    pub deleted: Vec<Divider>,
    pub clears: usize,
}

impl HostCallbacks for RecordingHost {
    fn set_camera_controls_enabled(&mut self, enabled: bool) {
        self.camera_toggles.push(enabled);
    }

    fn divider_committed(&mut self, divider: &Divider) {
        self.committed.push(*divider);
    }

    fn divider_moved(&mut self, divider: &Divider) {
        self.moved.push(*divider);
    }

    fn divider_deleted(&mut self, divider: &Divider) {
        self.deleted.push(*divider);
    }

    fn layout_cleared(&mut self) {
        self.clears += 1;
    }
}

// ============================================================================
// Pointer Helpers
// ============================================================================

/// Move the pointer to `point` (interior units) at `pixel` (screen pixels).
pub fn move_to<H: HostCallbacks>(machine: &mut DividerMachine<H>, pixel: (f64, f64), point: (f64, f64)) {
    machine.send(InteractionEvent::mouse_move(
        PixelPosition::new(pixel.0, pixel.1),
        InteriorPoint::new(point.0, point.1),
        false,
    ));
}

/// Hover a divider and click it.
pub fn hover_and_select<H: HostCallbacks>(machine: &mut DividerMachine<H>, id: u64) -> Divider {
    let divider = *machine
        .context()
        .find(DividerId(id))
        .unwrap_or_else(|| panic!("Divider {} not found", id));
    machine.send(InteractionEvent::HoverDivider { divider });
    machine.send(InteractionEvent::ClickDivider { divider });
    divider
}

/// Hover the selected divider again and press on it at `pixel`.
pub fn press_selected<H: HostCallbacks>(machine: &mut DividerMachine<H>, pixel: (f64, f64)) {
    let divider = *machine.context().selected_divider().expect("No divider selected");
    machine.send(InteractionEvent::HoverDivider { divider });
    machine.send(InteractionEvent::mouse_down(PixelPosition::new(pixel.0, pixel.1)));
}

/// Select divider `id` and drag it to `target` along its axis, then release.
pub fn drag_divider<H: HostCallbacks>(machine: &mut DividerMachine<H>, id: u64, target: f64) {
    let divider = hover_and_select(machine, id);
    press_selected(machine, (100.0, 100.0));
    let point = match divider.orientation {
        Orientation::Horizontal => (0.0, target),
        Orientation::Vertical => (target, 10.0),
    };
    move_to(machine, (100.0, 120.0), point);
    machine.send(InteractionEvent::MouseUp);
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert that every pair of same-orientation dividers keeps `min_gap`.
pub fn assert_min_gap(snapshot: &InteractionSnapshot, min_gap: f64) {
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        let dividers = snapshot.dividers(orientation);
        for (i, a) in dividers.iter().enumerate() {
            for b in &dividers[i + 1..] {
                assert!(
                    (a.position - b.position).abs() + 1e-9 >= min_gap,
                    "{} and {} are {} apart (min gap {})",
                    a.id,
                    b.id,
                    (a.position - b.position).abs(),
                    min_gap
                );
            }
        }
    }
}

/// Assert that every divider is inside its legal range.
pub fn assert_in_bounds(snapshot: &InteractionSnapshot) {
    let bounds = snapshot.shelf_config.interior();
    for divider in snapshot.all_dividers() {
        let (min, max) = bounds.legal_range(divider.orientation);
        assert!(
            divider.position >= min - 1e-9 && divider.position <= max + 1e-9,
            "{} at {} outside [{}, {}]",
            divider.id,
            divider.position,
            min,
            max
        );
    }
}

/// Assert the ghost suppression rule for a snapshot.
pub fn assert_ghost_rule(snapshot: &InteractionSnapshot) {
    if snapshot.selected_divider.is_some() {
        assert!(snapshot.ghost_divider.is_none(), "Ghost visible while a divider is selected");
    }
}
