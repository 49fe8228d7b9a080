//! BDD step definitions for the show-items workflow.

use aperi_show_items::{InvocationRequest, Launcher};
use rstest_bdd_macros::{given, then, when};

use super::test_helpers::{ShowContext, ShowResult};

#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error("assertion failed: {0}")]
    Assertion(String),
}

#[given("a scripted runner where every tool succeeds")]
fn every_tool_succeeds(show_context: ShowContext) -> ShowContext {
    show_context.runner.push_success();
    show_context.runner.push_success();
    show_context.runner.push_success();
    show_context
}

#[given("a scripted runner where the clipboard exits with \"{code}\"")]
fn clipboard_exits_with(show_context: ShowContext, code: i32) -> ShowContext {
    show_context.runner.push_exit_code(code);
    show_context
}

#[when("I show \"{uri}\"")]
fn show_uri(show_context: ShowContext, uri: String) -> Result<ShowContext, StepError> {
    let ShowContext {
        runner,
        config,
        cwd,
        ..
    } = show_context;

    let outcome = match InvocationRequest::from_args(&[uri]) {
        Err(err) => ShowResult::Rejected(err),
        Ok(request) => {
            let target = request.resolve(&cwd);
            let launcher = Launcher::new(config.clone(), runner.clone())
                .map_err(|err| StepError::Assertion(err.to_string()))?;
            match launcher.show(&target) {
                Ok(()) => ShowResult::Shown,
                Err(err) => ShowResult::Failed(err),
            }
        }
    };

    Ok(ShowContext {
        runner,
        config,
        cwd,
        outcome: Some(outcome),
    })
}

#[then("the clipboard tool was invoked \"{count}\" times before the terminal")]
fn clipboard_before_terminal(show_context: &ShowContext, count: usize) -> Result<(), StepError> {
    let calls = show_context.runner.invocations();
    let clipboard = &show_context.config.clipboard_bin;
    let terminal_index = calls
        .iter()
        .position(|call| call.program == show_context.config.terminal_bin)
        .ok_or_else(|| StepError::Assertion(String::from("terminal was not launched")))?;
    let before = calls
        .iter()
        .take(terminal_index)
        .filter(|call| &call.program == clipboard)
        .count();
    let total = calls
        .iter()
        .filter(|call| &call.program == clipboard)
        .count();

    if before == count && total == count {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected {count} clipboard calls before the terminal, got {before} of {total}"
        )))
    }
}

#[then("the terminal starts in \"{directory}\"")]
fn terminal_starts_in(show_context: &ShowContext, directory: String) -> Result<(), StepError> {
    let calls = show_context.runner.invocations();
    let Some(terminal) = calls
        .iter()
        .find(|call| call.program == show_context.config.terminal_bin)
    else {
        return Err(StepError::Assertion(String::from("terminal was not launched")));
    };
    let args = terminal.args_lossy();
    let found = args
        .windows(2)
        .any(|pair| matches!(pair, [flag, dir] if flag == "--working-directory" && *dir == directory));
    if found {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected working directory {directory}, got {args:?}"
        )))
    }
}

#[then("the launch fails at the \"{step}\" step")]
fn launch_fails_at(show_context: &ShowContext, step: String) -> Result<(), StepError> {
    match &show_context.outcome {
        Some(ShowResult::Failed(err)) if err.step().is_some_and(|s| s.to_string() == step) => {
            Ok(())
        }
        other => Err(StepError::Assertion(format!(
            "expected failure at {step}, got {other:?}"
        ))),
    }
}

#[then("the terminal was never launched")]
fn terminal_never_launched(show_context: &ShowContext) -> Result<(), StepError> {
    let launched = show_context
        .runner
        .invocations()
        .iter()
        .any(|call| call.program == show_context.config.terminal_bin);
    if launched {
        Err(StepError::Assertion(String::from(
            "terminal must not run after a clipboard failure",
        )))
    } else {
        Ok(())
    }
}

#[then("the request is rejected as a usage error")]
fn request_rejected(show_context: &ShowContext) -> Result<(), StepError> {
    match &show_context.outcome {
        Some(ShowResult::Rejected(_)) => Ok(()),
        other => Err(StepError::Assertion(format!(
            "expected a usage error, got {other:?}"
        ))),
    }
}

#[then("no tool was invoked")]
fn no_tool_invoked(show_context: &ShowContext) -> Result<(), StepError> {
    let calls = show_context.runner.invocations();
    if calls.is_empty() {
        Ok(())
    } else {
        Err(StepError::Assertion(format!("unexpected invocations: {calls:?}")))
    }
}
