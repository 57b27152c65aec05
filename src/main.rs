// SPDX-License-Identifier: PMPL-1.0-or-later

//! ticket-desc: generate localized ticket item descriptions
//!
//! Walks the ticket group files in a JSON directory and fills in missing
//! descriptions in the selected language.

use anyhow::{anyhow, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use ticket_desc::locale::Lang;
use ticket_desc::process::Options;
use ticket_desc::report::{output, ReportFormatter, ReportOutputFormat};
use ticket_desc::run::{self, RunConfig};

#[derive(Parser)]
#[command(name = "ticket-desc")]
#[command(version)]
#[command(about = "Translates ticket item descriptions.")]
#[command(long_about = None)]
struct Cli {
    /// Language to translate into: 0 (EN), 1 (KO) or 2 (RU)
    #[arg(
        short = 'l',
        value_name = "N",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=2)
    )]
    lang: u8,

    /// Force all ticket descriptions to be processed, even if already translated
    #[arg(short = 'r')]
    redo: bool,

    /// Directory containing the ticket group files
    #[arg(long, value_name = "DIR", default_value = "../json")]
    json_dir: PathBuf,

    /// YAML or JSON file with extra voice actor names
    #[arg(long, value_name = "FILE")]
    names: Option<PathBuf>,

    /// Write a run summary to this file
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Summary format (defaults to the summary file's extension)
    #[arg(long, value_enum, requires = "summary")]
    summary_format: Option<ReportOutputFormat>,

    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lang = Lang::from_index(cli.lang)
        .ok_or_else(|| anyhow!("unsupported language index {}", cli.lang))?;

    let config = RunConfig {
        json_dir: cli.json_dir,
        options: Options {
            lang,
            force: cli.redo,
        },
        names_file: cli.names,
        quiet: cli.quiet,
    };

    let report = match run::run(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    ReportFormatter::new(cli.quiet).print_summary(&report);

    if let Some(path) = cli.summary {
        output::write_summary(&report, &path, cli.summary_format)?;
        if !cli.quiet {
            println!("Summary saved to: {}", path.display());
        }
    }

    Ok(())
}
