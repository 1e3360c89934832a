//! Generation session orchestration.
//!
//! One `SessionController` owns the state of one generation session: the
//! current text, the last image summary and the active scene. Each user
//! action (new text, new image, regenerate) runs the pipeline end to end
//! and replaces the scene wholesale.

mod controller;
mod state;

pub use controller::{SessionConfig, SessionController};
pub use state::{SessionPhase, SessionSnapshot, SessionState};
