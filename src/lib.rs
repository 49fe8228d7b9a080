//! Core library for the `aperi-show-items` URI scheme handler.
//!
//! The handler receives one `aperi-show-items://<percent encoded path>`
//! argument, copies the file's shell-quoted base name to the clipboard and
//! the primary selection, and opens a terminal in the file's parent
//! directory with a long listing of the file.

pub mod config;
pub mod launch;
pub mod logging;
pub mod path;
pub mod request;
pub mod test_support;
pub mod uri;

pub use config::{ConfigError, LauncherConfig};
pub use launch::{
    CommandOutput, CommandRunner, LaunchError, Launcher, ProcessCommandRunner, SpawnError, Step,
};
pub use request::{InvocationRequest, RequestError, ShowTarget};
pub use uri::SCHEME_PREFIX;
