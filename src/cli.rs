// src/cli.rs
use bevy::prelude::Resource;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default, Resource)]
#[command(name = "checksheet")]
#[command(about = "Excel-style check-sheet template designer and record editor", long_about = None)]
pub struct CliArgs {
    /// Directory holding template and record documents
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Open a specific template document instead of the last-used one
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Open a specific record document alongside the template
    #[arg(long, value_name = "FILE")]
    pub record: Option<PathBuf>,
}
