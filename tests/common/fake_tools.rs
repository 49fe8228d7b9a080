//! Fake external tools for driving the binary end to end.
//!
//! Each fake is a small `sh` script that appends its name and arguments to a
//! shared log file and exits with a chosen status. Integration tests select
//! the fakes through the `APERI_SHOW_ITEMS_*_BIN` environment variables.
//!
//! ```rust
//! #[path = "common/fake_tools.rs"]
//! mod fake_tools;
//! ```

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Environment variable read by the fake scripts to locate the log.
pub const LOG_ENV: &str = "FAKE_TOOL_LOG";

pub struct FakeTools {
    root: TempDir,
    log: PathBuf,
}

impl FakeTools {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap_or_else(|err| panic!("create fake tool dir: {err}"));
        let log = root.path().join("invocations.log");
        Self { root, log }
    }

    /// Writes an executable fake named `name` that exits with `exit_code`.
    pub fn tool(&self, name: &str, exit_code: i32) -> PathBuf {
        let path = self.root.path().join(name);
        let script = format!(
            "#!/bin/sh\n\
             {{ printf '%s' \"$(basename \"$0\")\"; \
             for arg in \"$@\"; do printf ' [%s]' \"$arg\"; done; \
             printf '\\n'; }} >> \"${LOG_ENV}\"\n\
             exit {exit_code}\n"
        );
        fs::write(&path, script).unwrap_or_else(|err| panic!("write fake {name}: {err}"));
        let mut permissions = fs::metadata(&path)
            .unwrap_or_else(|err| panic!("stat fake {name}: {err}"))
            .permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(&path, permissions)
            .unwrap_or_else(|err| panic!("chmod fake {name}: {err}"));
        path
    }

    /// Directory used as the working directory and config home of the run.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Lines appended by the fakes, in invocation order.
    pub fn log_lines(&self) -> Vec<String> {
        match fs::read_to_string(&self.log) {
            Ok(contents) => contents.lines().map(str::to_owned).collect(),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => panic!("read invocation log: {err}"),
        }
    }

    /// Builds a command for the binary wired to `clipboard` and `terminal`.
    pub fn command(&self, clipboard: &Path, terminal: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("aperi-show-items");
        cmd.current_dir(self.home());
        self.wire(&mut cmd, clipboard, terminal);
        cmd
    }

    /// Like [`FakeTools::command`], but a shell enters `dir`, removes it and
    /// then execs the binary, which therefore starts without a working
    /// directory. Arguments added to the returned command reach the binary.
    pub fn command_in_removed_dir(&self, dir: &Path, clipboard: &Path, terminal: &Path) -> Command {
        let mut cmd = Command::new("sh");
        cmd.current_dir(self.home())
            .arg("-c")
            .arg("cd \"$1\" && rmdir \"$1\" && shift && exec \"$@\"")
            .arg("sh")
            .arg(dir)
            .arg(env!("CARGO_BIN_EXE_aperi-show-items"));
        self.wire(&mut cmd, clipboard, terminal);
        cmd
    }

    fn wire(&self, cmd: &mut Command, clipboard: &Path, terminal: &Path) {
        cmd.env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home())
            .env_remove("RUST_LOG")
            .env(LOG_ENV, &self.log)
            .env("APERI_SHOW_ITEMS_CLIPBOARD_BIN", clipboard)
            .env("APERI_SHOW_ITEMS_TERMINAL_BIN", terminal);
    }
}
