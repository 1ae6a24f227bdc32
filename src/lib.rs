//! Divider interaction engine for a shelf and cabinet configurator.
//!
//! Translates pointer input into collision-free divider edits: a finite
//! state machine (`input`) composed with three pure geometry helpers
//! (`geometry`). The engine renders nothing and performs no I/O; renderers
//! and cut-list generators consume the `InteractionSnapshot` it publishes.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod perf;
pub mod settings;
pub mod spatial_index;
pub mod types;

pub use error::{ConfigError, SettingsError};
pub use input::{DividerMachine, Effect, HostCallbacks, InteractionEvent, InteractionSnapshot, InteractionState};
pub use settings::{DragReleasePolicy, InteractionSettings};
pub use types::{Divider, DividerId, GhostDivider, Orientation, ShelfConfig, Units};
