//! Library definitions.
//!
//! Exports the password generation core, the strength evaluator, the bounded
//! generation history, and the CLI/API surfaces built on top of them.

pub mod api;
pub mod cli;
pub mod core;
pub mod generators;
pub mod history;
pub mod models;
pub mod strength;
pub mod utils;

pub use generators::password::{generate_password, DEFAULT_CHARSET};
pub use history::PasswordHistory;
pub use models::GenerationOptions;
pub use strength::{score_password, suggest_stronger, StrengthLabel};
