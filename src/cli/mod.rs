//! Command-line interface definitions for the `aperi-show-items` binary.
//!
//! The build script renders the manual page from this definition. The binary
//! itself validates its raw arguments so that option-like values such as
//! `--help` or `--` are rejected with the handler's usage line.

use clap::Parser;

/// Top-level CLI for the `aperi-show-items` binary.
///
/// Help and version flags are disabled because any argument other than a
/// single `aperi-show-items://` URI is a usage error.
#[derive(Debug, Parser)]
#[command(
    name = "aperi-show-items",
    version,
    disable_help_flag = true,
    disable_version_flag = true,
    about = "Copy a file's name to the clipboard and open a terminal beside it",
    long_about = "Handles aperi-show-items:// URIs. The percent-encoded path is decoded, its \
                  shell-quoted base name is copied to the clipboard and the primary selection, \
                  and a terminal is opened in the parent directory showing `ls -l` of the file."
)]
pub(crate) struct Cli {
    /// URI of the form `aperi-show-items://<percent encoded path>`.
    #[arg(value_name = "URI", allow_hyphen_values = true)]
    pub(crate) uris: Vec<String>,
}
