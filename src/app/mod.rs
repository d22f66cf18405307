//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (main.rs) and the table engine.
//!
//! ```text
//! Keys / Web results → Events → Event Handler → State Mutations → Actions → Host calls
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`edit`]: The per-field edit prompt
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine
//! - [`state`]: Application state container and view model computation

pub mod actions;
pub mod edit;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use edit::EditSession;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::{AppState, DatasetStatus};
