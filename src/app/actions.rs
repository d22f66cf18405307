//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to the Zellij host itself. It returns a
//! `Vec<Action>` and the plugin shim in `main.rs` carries them out in order.
//!
//! # Example
//!
//! ```rust
//! use admintable::app::Action;
//!
//! let actions = vec![Action::FetchDataset {
//!     url: "https://example.com/members.json".to_string(),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the one-time GET for the dataset.
    ///
    /// The response comes back as a web result tagged with the dataset
    /// request context.
    FetchDataset {
        /// Endpoint to fetch.
        url: String,
    },
}
