//! The admin table engine.
//!
//! Everything the user can do to the table lands on [`TableState`]:
//!
//! - [`store`]: Record arena, load and the full re-render
//! - [`query`]: Substring search
//! - [`pagination`]: Page window and navigation
//! - [`selection`]: Row and select-all selection
//! - [`mutation`]: Edit and the three deletions
//! - [`display`]: What was last drawn
//!
//! The engine has no knowledge of the terminal. The UI layer reads the display
//! surface and the page window back out of it.

pub mod display;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod selection;
pub mod store;

pub use display::{DisplayRow, DisplaySurface, ACTIONS_COLUMN, SELECT_COLUMN};
pub use pagination::{
    clamp_page, page_bounds, page_range, page_strip, total_pages, PageControl, PageTarget,
    PageWindow, PAGE_SIZE,
};
pub use query::matches;
pub use selection::SelectionSet;
pub use store::TableState;
