//! Clipboard and terminal orchestration for a resolved [`ShowTarget`].
//!
//! The launcher runs three external commands in a fixed order and stops at
//! the first failure:
//!
//! 1. the clipboard utility with the quoted file name;
//! 2. the clipboard utility with the primary-selection flag;
//! 3. the terminal emulator, started in the parent directory, running a
//!    shell that lists the file and then replaces itself with an
//!    interactive session.
//!
//! Completed steps are not rolled back and nothing is retried.

use std::ffi::OsString;

use shell_escape::unix::escape;
use tracing::{debug, warn};

use crate::config::LauncherConfig;
use crate::request::ShowTarget;

mod error;
mod runner;

pub use error::{LaunchError, Step};
pub use runner::{CommandOutput, CommandRunner, ProcessCommandRunner, SpawnError};

/// Runs the launch sequence through a [`CommandRunner`].
#[derive(Clone, Debug)]
pub struct Launcher<R: CommandRunner> {
    config: LauncherConfig,
    runner: R,
}

impl Launcher<ProcessCommandRunner> {
    /// Convenience constructor that wires the real process runner.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Config`] when validation fails.
    pub fn with_process_runner(config: LauncherConfig) -> Result<Self, LaunchError> {
        Self::new(config, ProcessCommandRunner)
    }
}

impl<R: CommandRunner> Launcher<R> {
    /// Creates a launcher using the provided runner and configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Config`] when configuration validation fails.
    pub fn new(config: LauncherConfig, runner: R) -> Result<Self, LaunchError> {
        config.validate()?;
        Ok(Self { config, runner })
    }

    /// Copies the quoted file name to both selections, then opens the
    /// terminal.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Spawn`] or [`LaunchError::CommandFailure`] for
    /// the first step that fails; later steps are not attempted.
    pub fn show(&self, target: &ShowTarget) -> Result<(), LaunchError> {
        self.run_step(
            Step::Clipboard,
            &self.config.clipboard_bin,
            &Self::clipboard_args(target),
        )?;
        self.run_step(
            Step::PrimarySelection,
            &self.config.clipboard_bin,
            &self.primary_selection_args(target),
        )?;
        self.run_step(
            Step::Terminal,
            &self.config.terminal_bin,
            &self.terminal_args(target),
        )
    }

    fn run_step(&self, step: Step, program: &str, args: &[OsString]) -> Result<(), LaunchError> {
        debug!(%step, program, ?args, "running step");
        let output = self
            .runner
            .run(program, args)
            .map_err(|source| LaunchError::Spawn { step, source })
            .inspect_err(|err| warn!(%step, error = %err, "step could not start"))?;
        if output.is_success() {
            return Ok(());
        }

        let status_text = output
            .code
            .map_or_else(|| String::from("unknown"), |code| code.to_string());
        warn!(%step, program, status = %status_text, "step failed");
        Err(LaunchError::CommandFailure {
            step,
            program: program.to_owned(),
            status: output.code,
            status_text,
        })
    }

    fn clipboard_args(target: &ShowTarget) -> Vec<OsString> {
        vec![OsString::from(&target.quoted_file_name)]
    }

    fn primary_selection_args(&self, target: &ShowTarget) -> Vec<OsString> {
        vec![
            OsString::from(&self.config.primary_flag),
            OsString::from(&target.quoted_file_name),
        ]
    }

    fn terminal_args(&self, target: &ShowTarget) -> Vec<OsString> {
        vec![
            OsString::from("--working-directory"),
            OsString::from(target.directory.as_str()),
            OsString::from("-e"),
            OsString::from(&self.config.shell_bin),
            OsString::from("-c"),
            OsString::from(self.shell_script(target)),
        ]
    }

    fn shell_script(&self, target: &ShowTarget) -> String {
        let shell = escape(self.config.shell_bin.as_str().into());
        format!(
            "{} {} ; exec {shell} -i",
            self.config.list_command, target.quoted_file_name
        )
    }
}
