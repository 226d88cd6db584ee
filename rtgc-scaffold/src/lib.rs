//! RTGC project structure generator library
//!
//! Creates the fixed RTGC source tree under a chosen base directory without
//! ever overwriting a file that already exists.
//!
//! ```rust,no_run
//! use rtgc_scaffold::{Manifest, Scaffolder};
//!
//! # fn main() -> anyhow::Result<()> {
//! let scaffolder = Scaffolder::new(Manifest::rtgc());
//! let result = scaffolder.materialize(std::path::Path::new("/tmp/work"))?;
//! println!("{} created, {} skipped", result.created, result.skipped);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod error;
pub mod manifest;
pub mod observability;
pub mod paths;
pub mod prompt;
pub mod report;
pub mod scaffolder;
pub mod wizard;

pub use commands::{GenerateCommand, RunOutcome};
pub use error::{PathValidationError, ScaffoldError};
pub use manifest::{ContentPolicy, Manifest, ManifestEntry, PROJECT_DIR_NAME};
pub use prompt::{Answer, Prompter, ScriptedPrompter, TerminalPrompter};
pub use scaffolder::{EntryOutcome, Materialization, Scaffolder};
pub use wizard::{Target, Wizard, WizardOutcome};
