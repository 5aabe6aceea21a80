//! Core module - Application infrastructure
//!
//! - `error` - [`CoreError`] and [`CoreResult`]
//! - `settings_persistence` - [`SessionSettings`] and their JSON file

pub mod error;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use settings_persistence::{load_settings, SessionSettings};
