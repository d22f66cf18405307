//! Zellij plugin wrapper and entry point.
//!
//! Binds the admintable library to the Zellij host: decodes keys and web
//! results into library events, runs the handler, and turns the returned
//! actions into host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult`, `PermissionRequestResult`
//! 3. **Permission**: A `WebAccess` grant makes the handler emit `FetchDataset`
//! 4. **Fetch**: One GET, tagged with the dataset request context
//! 5. **Update**: Handle events, delegate to library layer
//! 6. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `PermissionRequestResult` → `Event::PermissionsResult { granted }`
//! - `WebRequestResult` (tagged) → `Event::DatasetLoaded` or `Event::DatasetFailed`
//! - `Key` → depends on the input mode, see below
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: Move row cursor
//! - `Space`: Toggle row checkbox
//! - `a`: Toggle select-all
//! - `e`: Edit row
//! - `x`: Delete row
//! - `D`: Delete selected
//! - `B`: Delete every record of the current page
//! - `g`/`Home`, `h`/`Left`, `l`/`Right`, `G`/`End`: First, previous, next, last page
//! - `1`-`9`: Go to that page
//! - `/`: Focus search
//! - `q`: Close plugin
//!
//! Search mode: type, `Backspace`, `Enter` to search, `Esc` to return to the table.
//!
//! Editing: type, `Backspace`, `Enter` to save the field, `Esc` to skip it.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use admintable::source::{is_dataset_response, parse_dataset, request_context};
use admintable::table::PageTarget;
use admintable::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: admintable::app::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: admintable::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the application state, asks for web
    /// access and subscribes to the events the plugin reacts to.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        admintable::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(endpoint = %config.endpoint, "parsed configuration");
        self.app = admintable::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a host event, runs the handler and executes its actions.
    ///
    /// Returns whether the pane should redraw.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Event::PermissionsResult {
                    granted: matches!(status, PermissionStatus::Granted),
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                if !is_dataset_response(&context) {
                    tracing::debug!(?context, "ignoring unrelated web result");
                    return false;
                }
                Self::map_web_result_event(status, &body)
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    self.execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        admintable::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Decodes the dataset response into a load or failure event.
    fn map_web_result_event(status: u16, body: &[u8]) -> Event {
        match parse_dataset(status, body) {
            Ok(records) => {
                tracing::debug!(record_count = records.len(), "dataset decoded");
                Event::DatasetLoaded { records }
            }
            Err(e) => Event::DatasetFailed {
                error: e.to_string(),
            },
        }
    }

    /// Maps keyboard events to application events for the current input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if !self.app.input_mode.accepts_text() {
            return Self::map_normal_key(key);
        }

        let editing = matches!(self.app.input_mode, InputMode::Editing(_));
        Some(match key.bare_key {
            BareKey::Enter if editing => Event::EditCommit,
            BareKey::Enter => Event::SubmitSearch,
            BareKey::Esc if editing => Event::EditCancel,
            BareKey::Esc => Event::ExitSearch,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_normal_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Char(' ') => Event::ToggleRow,
            BareKey::Char('a') => Event::ToggleSelectAll,
            BareKey::Char('e') => Event::EditRow,
            BareKey::Char('x') => Event::DeleteRow,
            BareKey::Char('D') => Event::DeleteSelected,
            BareKey::Char('B') => Event::BulkDeletePage,
            BareKey::Home | BareKey::Char('g') => Event::Page(PageTarget::First),
            BareKey::Left | BareKey::Char('h') => Event::Page(PageTarget::Previous),
            BareKey::Right | BareKey::Char('l') => Event::Page(PageTarget::Next),
            BareKey::End | BareKey::Char('G') => Event::Page(PageTarget::Last),
            BareKey::Char(c @ '1'..='9') => {
                Event::PageNumber(c.to_digit(10).map_or(0, |d| d as usize))
            }
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchDataset { ref url } => {
                tracing::debug!(url = %url, "requesting dataset");
                web_request(
                    url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request_context(),
                );
            }
        }
    }
}
