//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → OTLP JSON lines
//! ```
//!
//! The plugin has no network collector to talk to, so spans are written as
//! OTLP JSON, one batch per line, to
//! `~/.local/share/zellij/admintable/admintable-otlp.json`. The file rotates
//! at 10 MB and keeps three backups.
//!
//! The filter level comes from the `trace_level` plugin option and defaults
//! to `info`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider and file span exporter
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE};
