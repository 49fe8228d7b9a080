//! Errors raised while running the launch sequence.

use std::fmt;

use thiserror::Error;

use super::runner::SpawnError;
use crate::config::ConfigError;

/// External step of the launch sequence, in execution order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    /// Copy the quoted file name to the regular clipboard.
    Clipboard,
    /// Copy the quoted file name to the primary selection.
    PrimarySelection,
    /// Open a terminal in the parent directory.
    Terminal,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Clipboard => "clipboard copy",
            Self::PrimarySelection => "primary selection copy",
            Self::Terminal => "terminal launch",
        };
        f.write_str(label)
    }
}

/// Errors surfaced by [`super::Launcher`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum LaunchError {
    /// Raised when the launcher configuration is incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Raised when a step's command cannot be started.
    #[error("{step} failed: {source}")]
    Spawn {
        /// Step that was being performed.
        step: Step,
        /// Underlying spawn failure.
        #[source]
        source: SpawnError,
    },
    /// Raised when a step's command exits unsuccessfully.
    #[error("{step} failed: {program} exited with status {status_text}")]
    CommandFailure {
        /// Step that was being performed.
        step: Step,
        /// Command that was run.
        program: String,
        /// Exit status as reported by the OS.
        status: Option<i32>,
        /// Human readable representation of the exit status.
        status_text: String,
    },
}

impl LaunchError {
    /// Step that failed, if the failure came from an external command.
    #[must_use]
    pub const fn step(&self) -> Option<Step> {
        match self {
            Self::Config(_) => None,
            Self::Spawn { step, .. } | Self::CommandFailure { step, .. } => Some(*step),
        }
    }

    /// Process exit code to report for this failure.
    ///
    /// A failed command's own non-zero exit code is propagated; every other
    /// failure maps to `1`.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailure {
                status: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}
