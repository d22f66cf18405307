//! Admintable: a Zellij plugin that shows a remote member list as an admin table.
//!
//! The plugin fetches a JSON array of flat records once at startup and renders
//! it as a paginated grid with:
//! - Case-insensitive substring search across every field
//! - Ten rows per page with First/Previous/page-number/Next/Last navigation
//! - Per-row checkboxes and a select-all checkbox for the visible page
//! - Field-by-field editing, single delete, delete-selected and a bulk delete
//!   of the current page
//!
//! Nothing is written back to the data source.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Input modes
//! │  - Event handling                                   │  ← Edit prompt
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Table Engine  │   │ Data Source   │
//! │ (ui/)         │   │ (table/)      │   │ (source/)     │
//! │ - Rendering   │   │ - Search      │   │ - Request tag │
//! │ - Theming     │   │ - Pagination  │   │ - JSON decode │
//! │ - Components  │   │ - Selection   │   │               │
//! │               │   │ - Mutation    │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Record model (domain/record)                     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Event/action model, input modes and view model computation
//! - [`domain`]: Records and errors
//! - [`infrastructure`]: Sandbox paths
//! - [`source`]: Dataset request tagging and decoding
//! - [`table`]: The table state manager
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/admintable.wasm" {
//!         endpoint "https://example.com/members.json"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, start tracing, build
//!    `AppState`, request web access, subscribe to events.
//! 2. **Permission Granted**: the handler emits `Action::FetchDataset`; the
//!    shim issues the GET with a tagged request context.
//! 3. **Web Result**: the shim decodes the body with
//!    [`source::parse_dataset`] and feeds `DatasetLoaded` or `DatasetFailed`
//!    back into the handler.
//! 4. **Interaction**: keys become [`Event`]s; every table operation re-renders
//!    its display surface and the pane redraws from the view model.
//!
//! # Example
//!
//! ```rust
//! use admintable::domain::Record;
//! use admintable::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let records = (1..=12)
//!     .map(|i| Record::from_pairs([("id", i.to_string())]))
//!     .collect();
//! handle_event(&mut state, &Event::DatasetLoaded { records })?;
//! handle_event(&mut state, &Event::Page(admintable::table::PageTarget::Last))?;
//!
//! assert_eq!(state.table.current_page(), 2);
//! assert_eq!(state.table.display().rows().len(), 2);
//! # Ok::<(), admintable::AdminTableError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod source;
pub mod table;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{AdminTableError, Record, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/admintable.wasm" {
///     endpoint "https://example.com/members.json"
///     theme "catppuccin-latte"
///     theme_file "~/themes/table.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URL the dataset is fetched from.
    ///
    /// Must be an `http` or `https` URL. Default: [`source::DEFAULT_ENDPOINT`]
    pub endpoint: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` means the host home directory.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: source::DEFAULT_ENDPOINT.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `endpoint`: kept if it passes [`Config::validate_endpoint`], otherwise
    ///   the default endpoint is used
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>`
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use admintable::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("endpoint".to_string(), "http://localhost:8000/members.json".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.endpoint, "http://localhost:8000/members.json");
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let endpoint = config
            .get("endpoint")
            .map(|s| s.trim().to_string())
            .filter(|url| match Self::validate_endpoint(url) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring endpoint option");
                    false
                }
            })
            .unwrap_or_else(|| source::DEFAULT_ENDPOINT.to_string());

        Self {
            endpoint,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Checks that `url` can be handed to the host's web request API.
    ///
    /// # Errors
    ///
    /// [`AdminTableError::Config`] unless `url` is an `http://` or `https://`
    /// URL with something after the scheme.
    pub fn validate_endpoint(url: &str) -> Result<()> {
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));
        match rest {
            Some(rest) if !rest.is_empty() => Ok(()),
            _ => Err(AdminTableError::Config(format!(
                "endpoint must be an http(s) URL, got {url:?}"
            ))),
        }
    }
}

/// Builds the initial application state from configuration.
///
/// The theme comes from `theme_file`, then `theme`, then the default; a theme
/// that fails to load is logged and replaced by the default. The table starts
/// empty and waits for the dataset.
///
/// # Example
///
/// ```rust
/// use admintable::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.table.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing admintable plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.endpoint.clone(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());

        assert_eq!(config.endpoint, source::DEFAULT_ENDPOINT);
        assert!(config.theme_name.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn invalid_endpoint_falls_back_to_default() {
        let config = Config::from_zellij(&map(&[("endpoint", "ftp://members")]));
        assert_eq!(config.endpoint, source::DEFAULT_ENDPOINT);

        let config = Config::from_zellij(&map(&[("endpoint", "https://")]));
        assert_eq!(config.endpoint, source::DEFAULT_ENDPOINT);
    }

    #[test]
    fn validate_endpoint_reports_config_error() {
        let err = Config::validate_endpoint("members.json").unwrap_err();
        assert!(matches!(err, AdminTableError::Config(_)));
    }

    #[test]
    fn initialize_prefers_theme_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.toml");
        let latte = include_str!("../themes/catppuccin-latte.toml");
        std::fs::write(&path, latte.replace("catppuccin-latte", "custom")).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            theme_file: Some(path.to_string_lossy().into_owned()),
            ..Config::default()
        };

        assert_eq!(initialize(&config).theme.name, "custom");
    }

    #[test]
    fn unknown_theme_name_falls_back_to_default() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Config::default()
        };

        assert_eq!(initialize(&config).theme.name, Theme::default().name);
    }

    #[test]
    fn initialize_carries_endpoint() {
        let config = Config {
            endpoint: "http://localhost/members.json".to_string(),
            ..Config::default()
        };

        assert_eq!(initialize(&config).endpoint, "http://localhost/members.json");
    }
}
