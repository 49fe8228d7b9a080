//! Binary entry point for the `aperi-show-items` URI scheme handler.

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process;

use camino::Utf8PathBuf;
use thiserror::Error;
use tracing::debug;

use aperi_show_items::{
    ConfigError, InvocationRequest, LaunchError, Launcher, LauncherConfig, RequestError,
    SCHEME_PREFIX, logging,
};

const DEFAULT_PROGRAM_NAME: &str = "aperi-show-items";

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid invocation: {0}")]
    Usage(#[from] RequestError),
    #[error("cannot determine working directory: {0}")]
    WorkingDirectory(String),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl CliError {
    const fn exit_code(&self) -> i32 {
        match self {
            Self::Launch(err) => err.exit_code(),
            Self::Usage(_) | Self::WorkingDirectory(_) | Self::Config(_) => 1,
        }
    }
}

fn main() {
    logging::init();

    let args: Vec<OsString> = env::args_os().collect();
    let program = program_name(&args);
    let exit_code = match dispatch(&user_arguments(&args)) {
        Ok(()) => 0,
        Err(err) => {
            report_error(&program, &err);
            err.exit_code()
        }
    };

    process::exit(exit_code);
}

/// Arguments after the program name, untouched by any option parsing, so
/// `--`, `--help` and friends count towards the single expected argument.
fn user_arguments(args: &[OsString]) -> Vec<String> {
    args.iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

fn dispatch(args: &[String]) -> Result<(), CliError> {
    let request = InvocationRequest::from_args(args)?;
    let target = request.resolve_with(current_dir)?;
    debug!(
        decoded = %target.decoded_path,
        directory = %target.directory,
        file_name = %target.file_name,
        "resolved request"
    );

    let config = LauncherConfig::load_without_cli_args()?;
    let launcher = Launcher::with_process_runner(config)?;
    launcher.show(&target)?;
    Ok(())
}

fn current_dir() -> Result<Utf8PathBuf, CliError> {
    let cwd = env::current_dir().map_err(|err| CliError::WorkingDirectory(err.to_string()))?;
    Utf8PathBuf::from_path_buf(cwd).map_err(|path| {
        CliError::WorkingDirectory(format!("not valid UTF-8: {}", path.display()))
    })
}

fn program_name(args: &[OsString]) -> String {
    args.first().map_or_else(
        || String::from(DEFAULT_PROGRAM_NAME),
        |arg0| arg0.to_string_lossy().into_owned(),
    )
}

fn report_error(program: &str, err: &CliError) {
    match err {
        CliError::Usage(_) => write_usage(io::stderr(), program),
        _ => write_error(io::stderr(), err),
    }
}

fn write_usage(mut target: impl Write, program: &str) {
    writeln!(target, "Usage: {program} {SCHEME_PREFIX}<percent encoded path>").ok();
}

fn write_error(mut target: impl Write, err: &CliError) {
    writeln!(target, "{DEFAULT_PROGRAM_NAME}: {err}").ok();
}
