//! Interactive target selection
//!
//! Asks the operator where the project should go and loops until a usable
//! base directory is chosen or the run is cancelled:
//!
//! ```text
//! AskPath -> Validate -> (ConfirmCreate) -> ConfirmRun -> Proceed | Aborted
//!    ^          |              |
//!    +----------+--------------+   (invalid path, creation declined)
//! ```
//!
//! The wizard never touches the filesystem. A missing base directory is only
//! recorded and gets created together with the project tree.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::paths::{self, PathStatus};
use crate::prompt::Prompter;
use crate::scaffolder::Scaffolder;

/// Prompt asking for the base directory
pub const PATH_PROMPT: &str = "Target directory (press Enter for the current directory)";

/// Where the project will be materialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Base directory chosen by the operator
    pub base: PathBuf,
    /// `base/RTGC`
    pub project_root: PathBuf,
    /// Whether `base` does not exist yet and will be created
    pub creates_base: bool,
}

impl Target {
    fn new(base: PathBuf, creates_base: bool) -> Self {
        Self {
            project_root: Scaffolder::project_root(&base),
            base,
            creates_base,
        }
    }
}

/// How the wizard ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Operator confirmed the target
    Proceed(Target),
    /// Operator declined the final confirmation
    Aborted,
}

#[derive(Debug)]
enum Step {
    AskPath,
    Validate(PathBuf),
    ConfirmCreate(PathBuf),
    ConfirmRun(Target),
}

/// Interactive target selection state machine
#[derive(Debug, Clone)]
pub struct Wizard {
    cwd: PathBuf,
    home: Option<PathBuf>,
}

impl Wizard {
    /// Create a wizard resolving paths against `cwd` and expanding `~` to `home`
    #[must_use]
    pub const fn new(cwd: PathBuf, home: Option<PathBuf>) -> Self {
        Self { cwd, home }
    }

    /// Create a wizard from the process working directory and home directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self::new(cwd, dirs::home_dir()))
    }

    /// Project root used when the operator just presses Enter
    #[must_use]
    pub fn default_project_root(&self) -> PathBuf {
        Scaffolder::project_root(&self.cwd)
    }

    /// Run the prompt loop until the operator confirms or cancels
    ///
    /// # Errors
    ///
    /// Returns an error only if reading an answer fails. Invalid paths are
    /// reported through the prompter and asked for again.
    pub fn plan<P>(&self, prompter: &mut P) -> Result<WizardOutcome>
    where
        P: Prompter + ?Sized,
    {
        let mut step = Step::AskPath;

        loop {
            debug!(?step, "Wizard step");

            step = match step {
                Step::AskPath => {
                    let answer = prompter.input(PATH_PROMPT)?;
                    let base = paths::resolve(&answer, &self.cwd, self.home.as_deref());
                    Step::Validate(base)
                }

                Step::Validate(base) => match paths::inspect(&base) {
                    Ok(PathStatus::Ready) => Step::ConfirmRun(Target::new(base, false)),
                    Ok(PathStatus::Missing) => Step::ConfirmCreate(base),
                    Err(err) => {
                        warn!(error = %err, path = %base.display(), "Rejected base path");
                        prompter.warn(&format!("{err}. Please try again."));
                        Step::AskPath
                    }
                },

                Step::ConfirmCreate(base) => {
                    let question =
                        format!("Directory '{}' does not exist. Create it?", base.display());
                    if !prompter.confirm(&question)? {
                        prompter.warn("Please enter an existing path.");
                        Step::AskPath
                    } else if let Err(err) = paths::ensure_creatable(&base) {
                        warn!(error = %err, path = %base.display(), "Base path cannot be created");
                        prompter.warn(&format!("{err}. Please choose another path."));
                        Step::AskPath
                    } else {
                        Step::ConfirmRun(Target::new(base, true))
                    }
                }

                Step::ConfirmRun(target) => {
                    let question = format!(
                        "Create project structure in {}?",
                        target.project_root.display()
                    );
                    return if prompter.confirm(&question)? {
                        Ok(WizardOutcome::Proceed(target))
                    } else {
                        Ok(WizardOutcome::Aborted)
                    };
                }
            };
        }
    }
}
