//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer reads [`crate::app::state::AppState`] and turns it into cells
//! on the terminal.  No motion simulation happens here.

pub mod layout;
pub mod popup;
pub mod terms_window;
pub mod theme;
