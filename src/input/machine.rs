//! The transition reducer and the machine that owns its state.
//!
//! `transition` is the single place the interaction context is mutated:
//! `(state, context, event) -> (state, context, effects)`. `DividerMachine`
//! wraps it, dispatches the effects to the host and publishes a snapshot to
//! subscribers after every event.

use super::context::{InteractionContext, InteractionSnapshot};
use super::event::{InteractionEvent, PixelPosition};
use super::state::InteractionState;
use crate::geometry::{constrained_position, detect_ghost, fit_to_bounds, is_legal_position};
use crate::profile_scope;
use crate::settings::{DragReleasePolicy, InteractionSettings};
use crate::types::{Divider, Geometry, InteriorPoint, Orientation, ShelfConfig};
use serde::Serialize;
use tracing::{debug, trace, warn};

/// Side effects the host performs on behalf of the machine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    DisableCameraControls,
    EnableCameraControls,
    DividerCommitted { divider: Divider },
    /// A drag finished with the divider at its final position
    DividerMoved { divider: Divider },
    DividerDeleted { divider: Divider },
    LayoutCleared,
}

/// Result of one transition.
#[derive(Debug, Clone)]
pub struct Step {
    pub state: InteractionState,
    pub context: InteractionContext,
    pub effects: Vec<Effect>,
}

/// Apply one event. Invalid requests are absorbed: the returned step then
/// carries the incoming state, an unchanged layout and no effects.
pub fn transition(
    state: InteractionState,
    mut context: InteractionContext,
    event: &InteractionEvent,
    settings: &InteractionSettings,
) -> Step {
    let mut effects = Vec::new();

    let next = match event {
        InteractionEvent::MouseMove {
            x,
            y,
            position_y,
            position_x,
            is_over_panel,
        } => on_mouse_move(
            state,
            &mut context,
            PixelPosition::new(*x, *y),
            InteriorPoint::new(*position_x, *position_y),
            *is_over_panel,
            settings,
            &mut effects,
        ),
        InteractionEvent::ClickEmptySpace {
            position_y,
            position_x,
        } => on_click_empty_space(
            state,
            &mut context,
            InteriorPoint::new(*position_x, *position_y),
            settings,
            &mut effects,
        ),
        InteractionEvent::ClickDivider { divider } => on_click_divider(state, &mut context, divider),
        InteractionEvent::HoverDivider { divider } => on_hover_divider(state, &mut context, divider),
        InteractionEvent::Unhover => {
            context.hovered = None;
            match state {
                InteractionState::Hovering => InteractionState::Normal,
                other => other,
            }
        }
        InteractionEvent::MouseDown { x, y } => {
            on_mouse_down(state, &context, PixelPosition::new(*x, *y), settings)
        }
        InteractionEvent::MouseUp => on_mouse_up(state, &mut context, settings, &mut effects),
        InteractionEvent::ClickDelete => on_click_delete(state, &mut context, &mut effects),
        InteractionEvent::ClickElsewhere => match state {
            InteractionState::Selected => release_to_normal(&mut context),
            other => other,
        },
        InteractionEvent::UpdateShelfConfig { config } => {
            on_update_config(state, &mut context, config, settings, &mut effects)
        }
        InteractionEvent::AddExistingDivider { divider } => {
            on_add_existing(&mut context, divider, &mut effects);
            state
        }
        InteractionEvent::Reset => {
            if state.is_dragging() {
                effects.push(Effect::EnableCameraControls);
            }
            context.clear_layout();
            context.clear_transient();
            effects.push(Effect::LayoutCleared);
            InteractionState::Normal
        }
    };

    enforce_invariants(&next, &mut context);

    if next != state {
        debug!(from = %state, event = event.name(), to = %next, "Transition");
    } else {
        trace!(state = %state, event = event.name(), "Event handled");
    }

    Step {
        state: next,
        context,
        effects,
    }
}

fn on_mouse_move(
    state: InteractionState,
    ctx: &mut InteractionContext,
    pixel: PixelPosition,
    point: InteriorPoint,
    is_over_panel: bool,
    settings: &InteractionSettings,
    effects: &mut Vec<Effect>,
) -> InteractionState {
    ctx.pointer = point;
    ctx.pointer_over_panel = is_over_panel;

    match state {
        InteractionState::Normal | InteractionState::Hovering => {
            ctx.ghost = if is_over_panel || ctx.hovered.is_some() || ctx.selected.is_some() {
                None
            } else {
                let geometry = Geometry::new(&ctx.shelf_config, settings);
                detect_ghost(point, ctx.layout(), &geometry, settings.orientation_threshold)
            };
            trace!(ghost = ?ctx.ghost, "Ghost recomputed");
            state
        }
        InteractionState::Selected => {
            ctx.ghost = None;
            state
        }
        InteractionState::PreparingDrag { anchor } => {
            if anchor.distance_to(pixel) > settings.drag_threshold_px {
                effects.push(Effect::DisableCameraControls);
                drag_selected_to(ctx, point, settings);
                InteractionState::Dragging { anchor }
            } else {
                state
            }
        }
        InteractionState::Dragging { .. } => {
            drag_selected_to(ctx, point, settings);
            state
        }
    }
}

/// Relocate the selected divider toward `point` through the constraint
/// solver. Steps the solver cannot make legal are dropped.
fn drag_selected_to(ctx: &mut InteractionContext, point: InteriorPoint, settings: &InteractionSettings) {
    profile_scope!("drag_selected_to");

    let Some(divider) = ctx.selected_divider().copied() else {
        return;
    };
    let geometry = Geometry::new(&ctx.shelf_config, settings);
    let peers = ctx.dividers(divider.orientation);
    let desired = point.along(divider.orientation);
    let position = constrained_position(desired, divider.orientation, Some(divider.id), peers, &geometry);

    if is_legal_position(position, divider.orientation, Some(divider.id), peers, &geometry) {
        trace!(id = %divider.id, desired, position, "Drag step");
        ctx.set_position(divider.id, position);
    } else {
        trace!(id = %divider.id, desired, "Drag step dropped: no legal position");
    }
}

fn on_click_empty_space(
    state: InteractionState,
    ctx: &mut InteractionContext,
    point: InteriorPoint,
    settings: &InteractionSettings,
    effects: &mut Vec<Effect>,
) -> InteractionState {
    match state {
        InteractionState::Normal => {
            ctx.pointer = point;
            let Some(ghost) = ctx.ghost.filter(|g| g.addable) else {
                return state;
            };

            let geometry = Geometry::new(&ctx.shelf_config, settings);
            let peers = ctx.dividers(ghost.orientation);
            let position = constrained_position(ghost.position, ghost.orientation, None, peers, &geometry);
            if !is_legal_position(position, ghost.orientation, None, peers, &geometry) {
                debug!(orientation = %ghost.orientation, position, "Commit rejected: no legal position");
                return state;
            }

            let Some(id) = ctx.allocate_id() else {
                warn!("Commit rejected: divider ids exhausted");
                return state;
            };
            let divider = Divider::new(id, position, ghost.orientation);
            ctx.insert(divider);
            // The pointer now rests on the new divider; the next move recomputes.
            ctx.ghost = None;
            debug!(id = %id, orientation = %divider.orientation, position, "Divider committed");
            effects.push(Effect::DividerCommitted { divider });
            state
        }
        InteractionState::Selected => release_to_normal(ctx),
        other => other,
    }
}

fn on_click_divider(state: InteractionState, ctx: &mut InteractionContext, divider: &Divider) -> InteractionState {
    if state.is_drag_gesture() || ctx.find(divider.id).is_none() {
        return state;
    }
    ctx.selected = Some(divider.id);
    ctx.hovered = None;
    ctx.ghost = None;
    InteractionState::Selected
}

fn on_hover_divider(state: InteractionState, ctx: &mut InteractionContext, divider: &Divider) -> InteractionState {
    if state.is_drag_gesture() || ctx.find(divider.id).is_none() {
        return state;
    }
    ctx.hovered = Some(divider.id);
    ctx.ghost = None;
    match state {
        InteractionState::Selected => InteractionState::Selected,
        _ => InteractionState::Hovering,
    }
}

fn on_mouse_down(
    state: InteractionState,
    ctx: &InteractionContext,
    pixel: PixelPosition,
    settings: &InteractionSettings,
) -> InteractionState {
    match state {
        InteractionState::Selected if pointer_on_selected(ctx, settings) => {
            InteractionState::PreparingDrag { anchor: pixel }
        }
        other => other,
    }
}

/// The press targets the selected divider when it is the hovered one, or
/// when the last pointer sample lies on its face (plus hit tolerance).
fn pointer_on_selected(ctx: &InteractionContext, settings: &InteractionSettings) -> bool {
    let Some(selected) = ctx.selected_divider() else {
        return false;
    };
    if ctx.hovered.is_some() {
        return ctx.hovered == Some(selected.id);
    }
    let reach = settings.hit_tolerance + ctx.shelf_config.material_thickness / 2.0;
    (ctx.pointer.along(selected.orientation) - selected.position).abs() <= reach
}

fn on_mouse_up(
    state: InteractionState,
    ctx: &mut InteractionContext,
    settings: &InteractionSettings,
    effects: &mut Vec<Effect>,
) -> InteractionState {
    match state {
        InteractionState::PreparingDrag { .. } => InteractionState::Selected,
        InteractionState::Dragging { .. } => {
            effects.push(Effect::EnableCameraControls);
            if let Some(divider) = ctx.selected_divider().copied() {
                debug!(id = %divider.id, position = divider.position, "Drag committed");
                effects.push(Effect::DividerMoved { divider });
            }
            match settings.drag_release {
                DragReleasePolicy::Deselect => release_to_normal(ctx),
                DragReleasePolicy::KeepSelection => InteractionState::Selected,
            }
        }
        other => other,
    }
}

fn on_click_delete(
    state: InteractionState,
    ctx: &mut InteractionContext,
    effects: &mut Vec<Effect>,
) -> InteractionState {
    if state != InteractionState::Selected {
        return state;
    }
    let Some(id) = ctx.selected else {
        return state;
    };
    if let Some(divider) = ctx.remove(id) {
        debug!(id = %id, "Divider deleted");
        effects.push(Effect::DividerDeleted { divider });
    }
    release_to_normal(ctx)
}

fn on_update_config(
    state: InteractionState,
    ctx: &mut InteractionContext,
    config: &ShelfConfig,
    settings: &InteractionSettings,
    effects: &mut Vec<Effect>,
) -> InteractionState {
    if let Err(e) = config.validate() {
        warn!("Ignoring shelf config update: {}", e);
        return state;
    }

    ctx.shelf_config = *config;
    let geometry = Geometry::new(config, settings);
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        let (kept, dropped) = fit_to_bounds(ctx.dividers(orientation), orientation, &geometry);
        *ctx.dividers_mut(orientation) = kept;
        for divider in dropped {
            warn!(id = %divider.id, orientation = %orientation, "Divider no longer fits the shelf; removed");
            effects.push(Effect::DividerDeleted { divider });
        }
    }
    ctx.ghost = None;

    if ctx.selected.is_some_and(|id| ctx.find(id).is_none()) {
        if state.is_dragging() {
            effects.push(Effect::EnableCameraControls);
        }
        return release_to_normal(ctx);
    }
    if ctx.hovered.is_some_and(|id| ctx.find(id).is_none()) {
        ctx.hovered = None;
        if state == InteractionState::Hovering {
            return InteractionState::Normal;
        }
    }
    state
}

fn on_add_existing(ctx: &mut InteractionContext, divider: &Divider, effects: &mut Vec<Effect>) {
    if ctx.find(divider.id).is_some() {
        warn!(id = %divider.id, "Ignoring restore of a divider id already in the layout");
        return;
    }
    if divider.id.0 == u64::MAX {
        warn!(id = %divider.id, "Ignoring restore of a divider id outside the allocatable range");
        return;
    }
    ctx.insert(*divider);
    effects.push(Effect::DividerCommitted { divider: *divider });
}

/// Drop selection and hover together. The host re-reports hover on the
/// next pointer move.
fn release_to_normal(ctx: &mut InteractionContext) -> InteractionState {
    ctx.selected = None;
    ctx.hovered = None;
    InteractionState::Normal
}

fn enforce_invariants(state: &InteractionState, ctx: &mut InteractionContext) {
    if ctx.selected.is_some_and(|id| ctx.find(id).is_none()) {
        ctx.selected = None;
    }
    if ctx.hovered.is_some_and(|id| ctx.find(id).is_none()) {
        ctx.hovered = None;
    }
    if ctx.selected.is_some() || ctx.pointer_over_panel {
        ctx.ghost = None;
    }
    ctx.dragging = state.is_dragging();
}

// ============================================================================
// DividerMachine
// ============================================================================

/// Host-side callbacks. Every method defaults to a no-op.
pub trait HostCallbacks {
    /// Camera/viewport control is suspended while a divider is dragged
    fn set_camera_controls_enabled(&mut self, _enabled: bool) {}
    fn divider_committed(&mut self, _divider: &Divider) {}
    fn divider_moved(&mut self, _divider: &Divider) {}
    fn divider_deleted(&mut self, _divider: &Divider) {}
    fn layout_cleared(&mut self) {}
}

/// Host that ignores every effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl HostCallbacks for NoopHost {}

type Subscriber = Box<dyn FnMut(&InteractionSnapshot)>;

/// Owner of the interaction state. Events are processed strictly in order,
/// each to completion, before the next is accepted.
pub struct DividerMachine<H: HostCallbacks = NoopHost> {
    state: InteractionState,
    context: InteractionContext,
    settings: InteractionSettings,
    host: H,
    subscribers: Vec<Subscriber>,
}

impl DividerMachine<NoopHost> {
    pub fn new(config: ShelfConfig) -> Self {
        Self::with_host(config, InteractionSettings::default(), NoopHost)
    }

    pub fn with_settings(config: ShelfConfig, settings: InteractionSettings) -> Self {
        Self::with_host(config, settings, NoopHost)
    }
}

impl<H: HostCallbacks> DividerMachine<H> {
    pub fn with_host(config: ShelfConfig, settings: InteractionSettings, host: H) -> Self {
        Self {
            state: InteractionState::Normal,
            context: InteractionContext::new(config),
            settings,
            host,
            subscribers: Vec::new(),
        }
    }

    /// Register a listener called with a fresh snapshot after every event
    pub fn subscribe(&mut self, subscriber: impl FnMut(&InteractionSnapshot) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Process one event to completion and return the effects it produced.
    pub fn send(&mut self, event: InteractionEvent) -> Vec<Effect> {
        let state = self.state;
        let context = std::mem::take(&mut self.context);
        let step = transition(state, context, &event, &self.settings);

        self.state = step.state;
        self.context = step.context;

        for effect in &step.effects {
            self.dispatch(effect);
        }

        if !self.subscribers.is_empty() {
            let snapshot = self.snapshot();
            for subscriber in &mut self.subscribers {
                subscriber(&snapshot);
            }
        }

        step.effects
    }

    fn dispatch(&mut self, effect: &Effect) {
        match effect {
            Effect::DisableCameraControls => self.host.set_camera_controls_enabled(false),
            Effect::EnableCameraControls => self.host.set_camera_controls_enabled(true),
            Effect::DividerCommitted { divider } => self.host.divider_committed(divider),
            Effect::DividerMoved { divider } => self.host.divider_moved(divider),
            Effect::DividerDeleted { divider } => self.host.divider_deleted(divider),
            Effect::LayoutCleared => self.host.layout_cleared(),
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn context(&self) -> &InteractionContext {
        &self.context
    }

    pub fn settings(&self) -> &InteractionSettings {
        &self.settings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn snapshot(&self) -> InteractionSnapshot {
        self.context.snapshot(self.state, &self.settings)
    }
}
