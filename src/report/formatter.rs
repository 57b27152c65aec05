// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console output for runs

use crate::names::NameWarning;
use crate::report::{GeneratedItem, GroupReport, GroupStatus, RunReport};
use colored::*;

pub struct ReportFormatter {
    quiet: bool,
}

impl ReportFormatter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn print_missing(&self, file_name: &str) {
        if self.quiet {
            return;
        }
        println!("\t{} not found.", file_name.yellow());
    }

    /// Per-group progress block: one line per new description, preceded by
    /// any name warnings raised for it.
    pub fn print_group(&self, report: &GroupReport) {
        if self.quiet {
            return;
        }

        println!("{} loaded. {{", report.file_name.bold());
        for item in &report.generated {
            self.print_item(item);
        }
        if report.generated.is_empty() {
            println!("\t{}", "No new translations.".dimmed());
        }
        println!("}}");
    }

    fn print_item(&self, item: &GeneratedItem) {
        for warning in &item.warnings {
            match warning {
                NameWarning::UnknownPerformer { name } => println!(
                    "\t{} Voice ticket {} has a new voice actor: {}",
                    "WARNING:".yellow().bold(),
                    item.name,
                    name.bold()
                ),
                other => println!("\t{} {}", "WARNING:".yellow().bold(), other),
            }
        }
        println!("\tTranslated description for {}", item.name.green());
    }

    pub fn print_summary(&self, report: &RunReport) {
        if self.quiet {
            return;
        }

        println!("\n{}", "=== TICKET DESCRIPTION SUMMARY ===".bold().cyan());
        println!(
            "Language: {}  |  Forced: {}  |  Generated: {}  |  Warnings: {}",
            report.lang,
            report.force,
            report.total_generated(),
            report.total_warnings()
        );
        println!();
        println!(
            "  {:<36} {:>9} {:>8} {:>8}",
            "Group file", "Generated", "No name", "Present"
        );
        println!("  {}", "-".repeat(64));
        for group in &report.groups {
            match group.status {
                GroupStatus::Missing => {
                    println!("  {:<36} {}", group.file_name, "not found".yellow());
                }
                GroupStatus::Processed => println!(
                    "  {:<36} {:>9} {:>8} {:>8}",
                    group.file_name,
                    group.generated.len(),
                    group.skipped_no_name,
                    group.skipped_present
                ),
            }
        }
        println!();
        println!("{}", "Ticket translation complete.".green());
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}
