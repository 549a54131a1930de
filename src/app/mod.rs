//! Application orchestration — state management, event plumbing, the clock
//! timer, and input handling.

pub mod clock;
pub mod event;
pub mod handler;
pub mod state;
