//! Core algorithms – line diffing, diff view models, text editing, and the
//! dashboard's canned data.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Every type is `Send + Sync` so it can be shared across async tasks.

pub mod buffer;
pub mod dashboard;
pub mod diff;
pub mod greeting;
pub mod render;
