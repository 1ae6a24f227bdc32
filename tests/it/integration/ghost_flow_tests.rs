//! Ghost preview lifecycle inside the machine.

use crate::helpers::{assert_ghost_rule, hover_and_select, imperial_config, move_to, TestShelfBuilder};
use shelfwright::input::{InteractionEvent, InteractionState, PixelPosition};
use shelfwright::types::{DividerId, InteriorPoint, Orientation};
use shelfwright::DividerMachine;

#[test]
fn test_ghost_tracks_pointer() {
    let mut machine = DividerMachine::new(imperial_config());

    move_to(&mut machine, (0.0, 0.0), (1.0, 30.0));
    assert_eq!(machine.context().ghost().map(|g| g.position), Some(30.0));

    move_to(&mut machine, (0.0, 5.0), (1.0, 30.4));
    assert_eq!(machine.context().ghost().map(|g| g.position), Some(30.4));
}

#[test]
fn test_ghost_cleared_over_panel() {
    let mut machine = DividerMachine::new(imperial_config());
    move_to(&mut machine, (0.0, 0.0), (0.0, 30.0));
    assert!(machine.context().ghost().is_some());

    machine.send(InteractionEvent::mouse_move(
        PixelPosition::new(0.0, 0.0),
        InteriorPoint::new(0.0, 30.0),
        true,
    ));
    assert!(machine.context().ghost().is_none());

    // A click while over a panel adds nothing
    let effects = machine.send(InteractionEvent::click_empty_space(InteriorPoint::new(0.0, 30.0)));
    assert!(effects.is_empty());
}

#[test]
fn test_ghost_cleared_outside_interior() {
    let mut machine = DividerMachine::new(imperial_config());
    move_to(&mut machine, (0.0, 0.0), (0.0, 30.0));
    move_to(&mut machine, (0.0, 0.0), (0.0, 90.0));
    assert!(machine.context().ghost().is_none());
}

#[test]
fn test_ghost_suppressed_while_hovering_and_selected() {
    let mut machine = TestShelfBuilder::new().with_horizontal(0, 20.0).build();
    let divider = *machine.context().find(DividerId(0)).unwrap();

    move_to(&mut machine, (0.0, 0.0), (0.0, 40.0));
    assert!(machine.context().ghost().is_some());

    machine.send(InteractionEvent::HoverDivider { divider });
    assert!(machine.context().ghost().is_none());
    move_to(&mut machine, (0.0, 0.0), (0.0, 20.1));
    assert!(machine.context().ghost().is_none());

    machine.send(InteractionEvent::ClickDivider { divider });
    move_to(&mut machine, (0.0, 0.0), (0.0, 50.0));
    assert_eq!(machine.state(), InteractionState::Selected);
    assert!(machine.context().ghost().is_none());
    assert_ghost_rule(&machine.snapshot());
}

#[test]
fn test_ghost_returns_after_unhover() {
    let mut machine = TestShelfBuilder::new().with_horizontal(0, 20.0).build();
    let divider = *machine.context().find(DividerId(0)).unwrap();

    machine.send(InteractionEvent::HoverDivider { divider });
    machine.send(InteractionEvent::Unhover);
    move_to(&mut machine, (0.0, 0.0), (0.0, 45.0));

    let ghost = machine.context().ghost().copied().unwrap();
    assert_eq!(ghost.orientation, Orientation::Horizontal);
    assert!(ghost.addable);
}

#[test]
fn test_ghost_near_side_wall_is_vertical() {
    let mut machine = DividerMachine::new(imperial_config());
    move_to(&mut machine, (0.0, 0.0), (-12.0, 40.0));
    machine.send(InteractionEvent::click_empty_space(InteriorPoint::new(-12.0, 40.0)));

    let snapshot = machine.snapshot();
    assert_eq!(snapshot.vertical_dividers.len(), 1);
    assert_eq!(snapshot.vertical_dividers[0].position, -12.0);
    assert!(snapshot.horizontal_dividers.is_empty());
}

#[test]
fn test_commit_snaps_ghost_position() {
    let mut machine = DividerMachine::new(imperial_config());
    move_to(&mut machine, (0.0, 0.0), (0.0, 36.1));
    assert_eq!(machine.context().ghost().map(|g| g.position), Some(36.1));

    machine.send(InteractionEvent::click_empty_space(InteriorPoint::new(0.0, 36.1)));
    assert_eq!(machine.context().horizontal_dividers()[0].position, 36.0);
}

#[test]
fn test_ghost_rule_after_deselect_then_move() {
    let mut machine = TestShelfBuilder::new().with_horizontal(0, 20.0).build();
    hover_and_select(&mut machine, 0);
    machine.send(InteractionEvent::ClickElsewhere);

    move_to(&mut machine, (0.0, 0.0), (0.0, 50.0));
    assert!(machine.context().ghost().is_some());
    assert_ghost_rule(&machine.snapshot());
}
