//! On-disk data for the CLI

mod storage;

pub use storage::{
    DEFAULT_SLOT, DataConfig, DataDirectory, StorageError, check_slot_name, sanitize_filename,
};
