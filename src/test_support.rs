//! Test support utilities shared across unit and integration tests.

use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use std::env;
use std::ffi::OsString;
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::{
    DEFAULT_CLIPBOARD_BIN, DEFAULT_LIST_COMMAND, DEFAULT_PRIMARY_FLAG, DEFAULT_SHELL_BIN,
    DEFAULT_TERMINAL_BIN, LauncherConfig,
};
use crate::launch::{CommandOutput, CommandRunner, SpawnError};

/// Builds a configuration holding the stock tool names.
#[must_use]
pub fn stock_config() -> LauncherConfig {
    LauncherConfig {
        clipboard_bin: String::from(DEFAULT_CLIPBOARD_BIN),
        primary_flag: String::from(DEFAULT_PRIMARY_FLAG),
        terminal_bin: String::from(DEFAULT_TERMINAL_BIN),
        shell_bin: String::from(DEFAULT_SHELL_BIN),
        list_command: String::from(DEFAULT_LIST_COMMAND),
    }
}

/// Scripted command runner that returns pre-seeded outputs in FIFO order.
///
/// Used to drive deterministic command outcomes without spawning processes.
/// Invocations are recorded even when no response is queued.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRunner {
    responses: Rc<RefCell<VecDeque<ScriptedResponse>>>,
    invocations: Rc<RefCell<Vec<CommandInvocation>>>,
}

#[derive(Clone, Debug)]
enum ScriptedResponse {
    Output(CommandOutput),
    SpawnFailure(String),
}

/// Records a single invocation made through [`ScriptedRunner`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandInvocation {
    /// Program name as passed to the runner.
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<OsString>,
}

impl CommandInvocation {
    /// Returns the arguments as UTF-8 strings for assertions.
    #[must_use]
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

impl ScriptedRunner {
    /// Creates a new runner with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all invocations recorded so far.
    #[must_use]
    pub fn invocations(&self) -> Vec<CommandInvocation> {
        self.invocations.borrow().clone()
    }

    /// Pushes a successful exit status.
    pub fn push_success(&self) {
        self.push_output(Some(0));
    }

    /// Pushes a specific exit code.
    pub fn push_exit_code(&self, code: i32) {
        self.push_output(Some(code));
    }

    /// Pushes a response with no exit code to simulate termination by signal.
    pub fn push_missing_exit_code(&self) {
        self.push_output(None);
    }

    /// Pushes a failure to start the command at all.
    pub fn push_spawn_failure(&self, message: impl Into<String>) {
        self.responses
            .borrow_mut()
            .push_back(ScriptedResponse::SpawnFailure(message.into()));
    }

    fn push_output(&self, code: Option<i32>) {
        self.responses
            .borrow_mut()
            .push_back(ScriptedResponse::Output(CommandOutput { code }));
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<CommandOutput, SpawnError> {
        self.invocations.borrow_mut().push(CommandInvocation {
            program: program.to_owned(),
            args: args.to_vec(),
        });
        match self.responses.borrow_mut().pop_front() {
            Some(ScriptedResponse::Output(output)) => Ok(output),
            Some(ScriptedResponse::SpawnFailure(message)) => Err(SpawnError {
                program: program.to_owned(),
                message,
            }),
            None => Err(SpawnError {
                program: program.to_owned(),
                message: String::from("no scripted response available"),
            }),
        }
    }
}

/// Global mutex used to serialise environment mutation in tests.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Guard that holds the env mutex and restores variables on drop.
pub struct EnvGuard {
    previous: Vec<(String, Option<OsString>)>,
    _guard: MutexGuard<'static, ()>,
}

impl EnvGuard {
    /// Sets multiple environment variables while holding a global mutex.
    pub fn set_vars(pairs: &[(&str, &str)]) -> Self {
        debug_assert!(
            {
                let mut seen = BTreeSet::new();
                pairs.iter().all(|(key, _)| seen.insert(*key))
            },
            "duplicate environment variable keys passed to EnvGuard::set_vars"
        );

        let guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let mut previous = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            let old = env::var_os(key);
            // SAFETY: Environment mutation is serialised by `ENV_LOCK`, preventing races.
            unsafe { env::set_var(key, value) };
            previous.push(((*key).to_owned(), old));
        }

        Self {
            previous,
            _guard: guard,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, old) in &self.previous {
            // SAFETY: Environment mutation is serialised by holding `_guard`.
            unsafe {
                match old {
                    Some(val) => env::set_var(key, val),
                    None => env::remove_var(key),
                }
            }
        }
    }
}
