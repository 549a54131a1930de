//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* view models and app state and turns them
//! into cells on the terminal.  No diffing or I/O happens here.

pub mod dashboard;
pub mod diff_view;
pub mod editor;
pub mod layout;
pub mod popup;
pub mod theme;
