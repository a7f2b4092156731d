pub mod io;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone, Default, Resource)]
pub struct AppSettings {
    /// Overrides the exe-relative default document directory.
    #[serde(default)]
    pub data_dir_override: Option<PathBuf>,
    /// Template reopened on the next launch.
    #[serde(default)]
    pub last_template: Option<String>,
}
