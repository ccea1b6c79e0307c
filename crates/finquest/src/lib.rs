//! Command-line front end for the finquest game
//!
//! The engine lives in `finquest_core`; this crate owns everything around it:
//! - Argument parsing and command dispatch
//! - The data directory (`config.yaml`, one YAML save per slot)
//! - File logging with size-based rotation
//! - Human-readable output

pub mod cli;
pub mod commands;
pub mod data;
pub mod logging;
pub mod util;

pub use cli::{Args, Command};
pub use data::{DataConfig, DataDirectory, StorageError};
pub use logging::init_logging;
