// src/forms/resources.rs
use bevy::prelude::Resource;
use std::path::PathBuf;

use super::dataset::Dataset;
use super::definitions::TableStructure;
use super::documents;

/// The one authoritative in-memory copy of the open template and its record
/// data. The UI is a pure projection of this resource; every mutation goes
/// through a request event handled in `forms::systems::logic`.
#[derive(Resource, Debug, Clone)]
pub struct FormSession {
    pub template_name: String,
    pub structure: TableStructure,
    /// The designer's read/write document field. Only rewritten by the
    /// commit action (and resize release), not on every edit.
    pub structure_field: String,
    pub dataset: Dataset,
    /// The record screen's submission buffer, re-serialized after every
    /// dataset mutation (write-through).
    pub data_field: String,
}

impl Default for FormSession {
    fn default() -> Self {
        let structure = TableStructure::default();
        let dataset = Dataset::default();
        let structure_field = documents::serialize_structure(&structure);
        let data_field = documents::serialize_dataset(&dataset);
        FormSession {
            template_name: "Untitled".to_string(),
            structure,
            structure_field,
            dataset,
            data_field,
        }
    }
}

impl FormSession {
    /// Resynchronizes the submission buffer from the dataset. Idempotent:
    /// the same dataset always yields the same string.
    pub fn refresh_data_field(&mut self) {
        self.data_field = documents::serialize_dataset(&self.dataset);
    }

    /// Serializes the live structure into the designer's document field.
    pub fn commit_structure_field(&mut self) {
        self.structure_field = documents::serialize_structure(&self.structure);
    }
}

/// Where documents live on disk, resolved at startup from the CLI and the
/// persisted settings.
#[derive(Resource, Debug, Clone, Default)]
pub struct EditorPaths {
    pub data_dir: PathBuf,
    /// Explicit template file from the CLI, overriding the data directory.
    pub template_file: Option<PathBuf>,
    /// Explicit record file from the CLI.
    pub record_file: Option<PathBuf>,
}

impl EditorPaths {
    pub fn templates_dir(&self) -> PathBuf {
        self.data_dir.join("templates")
    }

    pub fn records_dir(&self) -> PathBuf {
        self.data_dir.join("records")
    }

    pub fn template_path(&self, template_name: &str) -> PathBuf {
        match &self.template_file {
            Some(path) => path.clone(),
            None => self.templates_dir().join(format!("{}.json", template_name)),
        }
    }

    pub fn record_path(&self, template_name: &str) -> PathBuf {
        match &self.record_file {
            Some(path) => path.clone(),
            None => self.records_dir().join(format!("{}.json", template_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::dataset::CellValue;

    #[test]
    fn data_field_refresh_is_write_through_and_idempotent() {
        let mut session = FormSession::default();
        assert_eq!(session.data_field, "[{}]");
        session
            .dataset
            .set_value(0, "Device", CellValue::Text("Pump-1".to_string()))
            .unwrap();
        session.refresh_data_field();
        let once = session.data_field.clone();
        session.refresh_data_field();
        assert_eq!(session.data_field, once);
    }

    #[test]
    fn commit_rewrites_structure_field_only_on_demand() {
        let mut session = FormSession::default();
        let before = session.structure_field.clone();
        session.structure.add_column();
        assert_eq!(session.structure_field, before);
        session.commit_structure_field();
        assert_ne!(session.structure_field, before);
        assert!(session.structure_field.contains("Column1"));
    }
}
