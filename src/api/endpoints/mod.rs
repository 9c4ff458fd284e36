//! API endpoint handlers.
//!
//! One module per route group; handlers stay thin and delegate to the
//! copilot and history modules.

pub mod assistant;
pub mod health;
pub mod history;
