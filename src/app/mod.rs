//! Application orchestration: state, input handling, and the host side of
//! the shake-to-scroll boundary (window and scrollable view).

pub mod document;
pub mod event;
pub mod handler;
pub mod state;
pub mod terms;
pub mod window;
