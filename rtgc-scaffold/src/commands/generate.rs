//! Project generation command

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::manifest::Manifest;
use crate::prompt::Prompter;
use crate::report;
use crate::scaffolder::{EntryOutcome, Materialization, Scaffolder};
use crate::wizard::{Target, Wizard, WizardOutcome};

/// How a run ended without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Project structure was materialized
    Completed(Materialization),
    /// Operator cancelled before anything was written
    Aborted,
}

/// Interactive RTGC project generation
pub struct GenerateCommand {
    wizard: Wizard,
    scaffolder: Scaffolder,
}

impl GenerateCommand {
    /// Create a command from an explicit wizard and manifest
    #[must_use]
    pub const fn new(wizard: Wizard, manifest: Manifest) -> Self {
        Self {
            wizard,
            scaffolder: Scaffolder::new(manifest),
        }
    }

    /// Create a command for the RTGC layout in the current environment
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Wizard::from_env()?, Manifest::rtgc()))
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An answer cannot be read from the prompter
    /// - Any directory or file cannot be created or written
    pub fn execute<P>(&self, prompter: &mut P) -> Result<RunOutcome>
    where
        P: Prompter + ?Sized,
    {
        report::print_banner(&self.wizard.default_project_root());

        let target = match self.wizard.plan(prompter)? {
            WizardOutcome::Proceed(target) => target,
            WizardOutcome::Aborted => {
                info!("Run cancelled at final confirmation");
                report::print_aborted();
                return Ok(RunOutcome::Aborted);
            }
        };

        let result = self.materialize(&target)?;
        report::print_summary(&result);

        Ok(RunOutcome::Completed(result))
    }

    fn materialize(&self, target: &Target) -> Result<Materialization> {
        info!(
            base = %target.base.display(),
            creates_base = target.creates_base,
            "Creating project structure"
        );

        let progress = ProgressBar::new(self.scaffolder.manifest().len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .context("Failed to set progress style")?
                .progress_chars("=>-"),
        );

        let result = self
            .scaffolder
            .materialize_with(&target.base, |entry, outcome| {
                let verb = match outcome {
                    EntryOutcome::Created => "created",
                    EntryOutcome::Skipped => "exists",
                };
                progress.set_message(format!("{verb} {}", entry.path()));
                progress.inc(1);
            })
            .with_context(|| {
                format!(
                    "Failed to create project structure in {}",
                    target.project_root.display()
                )
            });

        progress.finish_and_clear();
        result
    }
}
