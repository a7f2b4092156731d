// src/forms/systems/io/mod.rs

use bevy::prelude::error;
use std::path::PathBuf;

pub mod pick_file;
pub mod save;
pub mod startup;

pub const DEFAULT_DATA_DIR: &str = "checksheet_data";

/// Default document directory: next to the executable, so portable installs
/// keep their documents with the binary. Falls back to the working directory.
pub fn get_default_data_base_path() -> PathBuf {
    let base_dir = if let Ok(exe_path) = std::env::current_exe() {
        exe_path.parent().map(|p| p.to_path_buf()).unwrap_or_else(|| {
            error!("Could not get parent directory of executable, using current working directory '.' instead.");
            PathBuf::from(".")
        })
    } else {
        error!("Failed to get current executable path, using current working directory '.' instead.");
        PathBuf::from(".")
    };
    base_dir.join(DEFAULT_DATA_DIR)
}

pub use pick_file::handle_pick_cell_payload;
pub use save::{handle_save_record_request, handle_save_template_request};
pub use startup::{load_open_documents, resolve_editor_paths};
