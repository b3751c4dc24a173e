//! CLI command handlers
//!
//! This module contains the implementation of CLI commands and the
//! interactive menu, bridging raw user input with the record store.

pub mod input;
pub mod menu;
pub mod record;

pub use menu::{run_menu, Menu};
pub use record::{handle_record_command, RecordCommands};
