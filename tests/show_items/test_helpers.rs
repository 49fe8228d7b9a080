//! Shared fixtures for show-items BDD scenarios.

use aperi_show_items::test_support::{ScriptedRunner, stock_config};
use aperi_show_items::{LaunchError, LauncherConfig, RequestError};
use camino::Utf8PathBuf;
use rstest::fixture;

#[derive(Clone, Debug)]
pub struct ShowContext {
    pub runner: ScriptedRunner,
    pub config: LauncherConfig,
    pub cwd: Utf8PathBuf,
    pub outcome: Option<ShowResult>,
}

#[derive(Clone, Debug)]
pub enum ShowResult {
    Shown,
    Rejected(RequestError),
    Failed(LaunchError),
}

#[fixture]
pub fn show_context() -> ShowContext {
    ShowContext {
        runner: ScriptedRunner::new(),
        config: stock_config(),
        cwd: Utf8PathBuf::from("/home/user"),
        outcome: None,
    }
}
