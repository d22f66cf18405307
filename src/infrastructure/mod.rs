//! Sandbox path handling.
//!
//! Inside the Zellij plugin sandbox the host filesystem is mounted under
//! `/host`. Theme files and the trace file both go through these helpers.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
