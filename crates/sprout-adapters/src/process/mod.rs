//! Process runner adapters.

mod scripted;
mod system;

pub use scripted::{ScriptedFailure, ScriptedRunner};
pub use system::SystemRunner;
