//! Terminal output for a generator run

use std::path::Path;

use console::{style, Emoji};

use crate::manifest::PROJECT_DIR_NAME;
use crate::scaffolder::Materialization;

static CHECK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
static NEW: Emoji<'_, '_> = Emoji("🆕 ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "");

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Print the title banner and the default location
pub fn print_banner(default_project_root: &Path) {
    println!("{}", rule());
    println!("{}", style("RTGC Project Structure Generator").bold());
    println!("{}", rule());
    println!();
    println!(
        "Default location: {}",
        style(default_project_root.display()).cyan()
    );
    println!();
}

/// Print the cancellation notice
pub fn print_aborted() {
    println!();
    println!("{}", style("Operation cancelled by user.").yellow());
}

/// Print the summary after a successful run
pub fn print_summary(result: &Materialization) {
    println!();
    println!("{}", rule());
    println!(
        "{}{}",
        CHECK,
        style("Project structure created successfully!").green().bold()
    );
    println!("{FOLDER}Path: {}", style(result.project_root.display()).cyan());
    println!("{NEW}New files created: {}", result.created);
    if result.skipped > 0 {
        println!("{INFO}Existing files skipped: {}", result.skipped);
    }
    println!();
    println!("{}", style("Next step:").bold());
    println!(
        "  {} {}",
        style("$").dim(),
        style(format!("cd {}", next_step_dir(&result.project_root))).cyan()
    );
}

/// Print a fatal error with its cause chain
pub fn print_failure(err: &anyhow::Error) {
    eprintln!();
    eprintln!("{}{}", CROSS, style(FAILURE_HEADING).red().bold());
    for line in failure_causes(err) {
        eprintln!("  {} {line}", style("-").dim());
    }
}

const FAILURE_HEADING: &str = "Error";

fn failure_causes(err: &anyhow::Error) -> Vec<String> {
    err.chain().map(ToString::to_string).collect()
}

fn next_step_dir(project_root: &Path) -> String {
    project_root.file_name().map_or_else(
        || PROJECT_DIR_NAME.to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
