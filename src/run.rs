// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run: process every catalogue group in a JSON directory
//!
//! Each group is loaded, processed in memory and written back whole before
//! the next one starts. Missing group files are reported and skipped; a
//! record that cannot be classified stops the run before its group is
//! written, so no half-generated group ever reaches disk.

use crate::groups::{self, Group};
use crate::names::NameDirectory;
use crate::process::{Engine, Options};
use crate::report::{GroupReport, ReportFormatter, RunReport};
use crate::storage;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration for a run
pub struct RunConfig {
    /// Directory holding the group files
    pub json_dir: PathBuf,
    pub options: Options,
    /// Extra performer names merged over the built-in table
    pub names_file: Option<PathBuf>,
    /// Suppress progress output
    pub quiet: bool,
}

/// Build the engine for a run, merging any extra names file.
pub fn engine_for(config: &RunConfig) -> Result<Engine> {
    let mut names = NameDirectory::builtin();
    if let Some(path) = &config.names_file {
        names
            .merge_file(path)
            .with_context(|| format!("loading names from {}", path.display()))?;
    }
    Engine::new(names, config.options)
}

/// Run over the full group catalogue.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    run_groups(config, &groups::catalogue())
}

pub fn run_groups(config: &RunConfig, groups: &[Group]) -> Result<RunReport> {
    if !config.json_dir.is_dir() {
        anyhow::bail!("Not a directory: {}", config.json_dir.display());
    }

    let engine = engine_for(config)?;
    let formatter = ReportFormatter::new(config.quiet);
    let options = engine.options();
    let mut report = RunReport::new(options.lang, options.force);

    for group in groups {
        let Some(mut records) = storage::load_group(&config.json_dir, group)? else {
            formatter.print_missing(&group.file_name);
            report.groups.push(GroupReport::missing(group));
            continue;
        };

        let group_report = engine.process_group(group, &mut records)?;
        storage::save_group(&config.json_dir, group, &records)?;
        formatter.print_group(&group_report);
        report.groups.push(group_report);
    }

    Ok(report)
}
