//! Configuration loading via `ortho-config`.
//!
//! Every field defaults to the tool the handler was written for, so an
//! absent configuration file reproduces the stock behaviour: `wl-copy` for
//! both selections and `alacritty` running `zsh`.

use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use serde::Deserialize;
use thiserror::Error;

/// Default clipboard utility.
pub const DEFAULT_CLIPBOARD_BIN: &str = "wl-copy";
/// Default flag that makes the clipboard utility target the primary selection.
pub const DEFAULT_PRIMARY_FLAG: &str = "-p";
/// Default terminal emulator.
pub const DEFAULT_TERMINAL_BIN: &str = "alacritty";
/// Default interactive shell started inside the terminal.
pub const DEFAULT_SHELL_BIN: &str = "zsh";
/// Default listing command run before the interactive shell.
pub const DEFAULT_LIST_COMMAND: &str = "ls -l";

/// External tools used by the launcher, loaded via `ortho-config`.
#[derive(Clone, Debug, Deserialize, OrthoConfig, PartialEq, Eq)]
#[ortho_config(
    prefix = "APERI_SHOW_ITEMS",
    discovery(
        app_name = "aperi-show-items",
        env_var = "APERI_SHOW_ITEMS_CONFIG_PATH",
        config_file_name = "aperi-show-items.toml",
        dotfile_name = ".aperi-show-items.toml",
        project_file_name = "aperi-show-items.toml"
    )
)]
pub struct LauncherConfig {
    /// Clipboard utility invoked for both selections.
    #[ortho_config(default = DEFAULT_CLIPBOARD_BIN.to_owned())]
    pub clipboard_bin: String,
    /// Flag passed to the clipboard utility for the primary selection.
    #[ortho_config(default = DEFAULT_PRIMARY_FLAG.to_owned())]
    pub primary_flag: String,
    /// Terminal emulator accepting `--working-directory` and `-e`.
    #[ortho_config(default = DEFAULT_TERMINAL_BIN.to_owned())]
    pub terminal_bin: String,
    /// Shell accepting `-c` and `-i`.
    #[ortho_config(default = DEFAULT_SHELL_BIN.to_owned())]
    pub shell_bin: String,
    /// Command that lists the file before the interactive shell starts.
    #[ortho_config(default = DEFAULT_LIST_COMMAND.to_owned())]
    pub list_command: String,
}

/// Errors raised during configuration loading and validation.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// Indicates a configured value is empty. The message names the
    /// environment variable and the TOML key that provide it.
    #[error(
        "missing {field}: set APERI_SHOW_ITEMS_{env_suffix} or add {field} to aperi-show-items.toml",
        env_suffix = field.to_uppercase()
    )]
    InvalidField {
        /// Configuration field that failed validation.
        field: String,
    },
    /// Surfaces errors from the `ortho-config` loader.
    #[error("configuration parsing failed: {0}")]
    Parse(String),
}

impl From<Arc<OrthoError>> for ConfigError {
    fn from(value: Arc<OrthoError>) -> Self {
        Self::Parse(value.to_string())
    }
}

impl LauncherConfig {
    /// Loads configuration from defaults, configuration files, and
    /// environment variables without parsing the process's own arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when merging sources fails.
    pub fn load_without_cli_args() -> Result<Self, ConfigError> {
        Self::load_from_iter([std::ffi::OsString::from("aperi-show-items")])
            .map_err(ConfigError::from)
    }

    /// Ensures every value is present after trimming whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::require_value(&self.clipboard_bin, "clipboard_bin")?;
        Self::require_value(&self.primary_flag, "primary_flag")?;
        Self::require_value(&self.terminal_bin, "terminal_bin")?;
        Self::require_value(&self.shell_bin, "shell_bin")?;
        Self::require_value(&self.list_command, "list_command")?;
        Ok(())
    }

    fn require_value(value: &str, field: &str) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: field.to_owned(),
            });
        }
        Ok(())
    }
}
