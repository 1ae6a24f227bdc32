//! Pointer and keyboard interaction with dividers.
//!
//! The host view layer forwards normalized events into `DividerMachine`;
//! each event drives exactly one transition of an explicit state machine
//! (`InteractionState`) and the machine publishes a read-only snapshot.
//!
//! ## Modules
//!
//! - `state` - state tagged union and its queries
//! - `event` - inbound event vocabulary
//! - `context` - owned interaction context and published snapshot
//! - `machine` - the transition reducer, effects and the owning machine
//! - `adapter` - pointer-to-hover routing for hosts without hit testing

mod adapter;
mod context;
mod event;
mod machine;
mod state;

pub use adapter::PointerRouter;
pub use context::{InteractionContext, InteractionSnapshot};
pub use event::{InteractionEvent, PixelPosition};
pub use machine::{transition, DividerMachine, Effect, HostCallbacks, NoopHost, Step};
pub use state::InteractionState;
