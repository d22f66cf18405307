//! Domain layer for the admin table plugin.
//!
//! Core types with no dependency on the Zellij host:
//!
//! - [`error`]: Error type and result alias
//! - [`record`]: Record and cell value model
//!
//! # Examples
//!
//! ```
//! use admintable::domain::{FieldValue, Record, Result};
//!
//! fn member() -> Result<Record> {
//!     Ok(Record::from_pairs([
//!         ("id", FieldValue::from("1")),
//!         ("name", FieldValue::from("Aaron Miles")),
//!     ]))
//! }
//! ```

pub mod error;
pub mod record;

pub use error::{AdminTableError, Result};
pub use record::{FieldValue, Record};
