// src/forms/systems/io/startup.rs
use bevy::prelude::*;
use std::fs;
use std::path::Path;

use super::get_default_data_base_path;
use crate::cli::CliArgs;
use crate::forms::documents;
use crate::forms::resources::{EditorPaths, FormSession};
use crate::sample_template::sample_inspection_template;
use crate::settings::{io as settings_io, AppSettings};

/// Resolves where documents live: CLI override, then persisted settings,
/// then the exe-relative default.
pub fn resolve_editor_paths(mut commands: Commands, cli: Res<CliArgs>) {
    let settings: AppSettings = settings_io::load_settings_from_file().unwrap_or_else(|e| {
        warn!("Could not load app settings ({}). Using defaults.", e);
        AppSettings::default()
    });

    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| settings.data_dir_override.clone())
        .unwrap_or_else(get_default_data_base_path);

    info!("Using data directory {:?}.", data_dir);
    commands.insert_resource(EditorPaths {
        data_dir,
        template_file: cli.template.clone(),
        record_file: cli.record.clone(),
    });
    commands.insert_resource(settings);
}

/// Loads the template (and record document, when present) into the session.
/// A missing or malformed template degrades to an empty structure; a missing
/// data directory is seeded with the sample inspection template.
pub fn load_open_documents(
    paths: Res<EditorPaths>,
    settings: Res<AppSettings>,
    mut session: ResMut<FormSession>,
) {
    let (template_name, template_path) = match &paths.template_file {
        Some(path) => (stem_of(path), path.clone()),
        None => {
            let templates_dir = paths.templates_dir();
            if !templates_dir.exists() {
                seed_sample_template(&mut session, &paths);
                return;
            }
            let name = settings
                .last_template
                .clone()
                .or_else(|| first_template_name(&templates_dir))
                .unwrap_or_else(|| "Untitled".to_string());
            (name.clone(), paths.template_path(&name))
        }
    };

    session.template_name = template_name;
    match fs::read_to_string(&template_path) {
        Ok(text) => {
            session.structure = documents::parse_structure_or_empty(&text);
            info!(
                "Loaded template '{}' from {:?} ({} columns).",
                session.template_name,
                template_path,
                session.structure.len()
            );
        }
        Err(e) => {
            warn!(
                "Could not read template {:?} ({}). Starting with an empty structure.",
                template_path, e
            );
            session.structure = Default::default();
        }
    }
    session.commit_structure_field();

    let record_path = paths.record_path(&session.template_name);
    match fs::read_to_string(&record_path) {
        Ok(text) => {
            session.dataset = documents::parse_dataset_or_default(&text);
            info!(
                "Loaded record document from {:?} ({} rows).",
                record_path,
                session.dataset.len()
            );
        }
        Err(e) => {
            info!(
                "No record document at {:?} ({}). Starting with one empty row.",
                record_path, e
            );
            session.dataset = Default::default();
        }
    }
    session.refresh_data_field();
}

fn seed_sample_template(session: &mut FormSession, paths: &EditorPaths) {
    info!(
        "Data directory {:?} does not exist. Seeding the sample inspection template.",
        paths.data_dir
    );
    let (name, structure) = sample_inspection_template();
    session.template_name = name;
    session.structure = structure;
    session.commit_structure_field();
    session.dataset = Default::default();
    session.refresh_data_field();

    let templates_dir = paths.templates_dir();
    if let Err(e) = fs::create_dir_all(&templates_dir) {
        error!(
            "Failed to create templates directory {:?}: {}. Sample not written.",
            templates_dir, e
        );
        return;
    }
    let path = paths.template_path(&session.template_name);
    if let Err(e) = fs::write(&path, &session.structure_field) {
        error!("Failed to write sample template {:?}: {}", path, e);
    } else {
        info!("Wrote sample template to {:?}.", path);
    }
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}

fn first_template_name(templates_dir: &Path) -> Option<String> {
    let mut names: Vec<String> = fs::read_dir(templates_dir)
        .ok()?
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().map(|ext| ext == "json").unwrap_or(false) {
                path.file_stem().map(|s| s.to_string_lossy().into_owned())
            } else {
                None
            }
        })
        .collect();
    names.sort_unstable();
    names.into_iter().next()
}
