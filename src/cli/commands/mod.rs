//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Opens the repository and loads configuration via [`Session::open`]
//! 2. Calls the [`Navigator`] to execute the command
//! 3. Formats and displays output
//!
//! Handlers do NOT touch queue files or run git directly.

mod checkout;
mod completion;
mod redo;
mod reset;
mod status;
mod undo;

// Re-export command functions for testing and direct invocation
pub use checkout::checkout;
pub use completion::completion;
pub use redo::redo;
pub use reset::reset;
pub use status::status;
pub use undo::undo;

use anyhow::{Context as _, Result};

use crate::cli::args::Command;
use crate::core::config::Config;
use crate::core::lock::RepoLock;
use crate::core::paths::GitqPaths;
use crate::core::queue::QueueStore;
use crate::engine::{Context, NavError, Navigator, QueueSnapshot};
use crate::git::{Git, GitCli, LogHistory};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Checkout { commit } => checkout::checkout(ctx, &commit),
        Command::Undo => undo::undo(ctx),
        Command::Redo => redo::redo(ctx),
        Command::Reset => reset::reset(ctx),
        Command::Status => status::status(ctx),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Navigator wired to the real repository.
pub(crate) type RepoNavigator = Navigator<LogHistory<GitCli>, GitCli>;

/// Everything a command needs to operate on one repository.
pub(crate) struct Session {
    pub git: Git,
    pub config: Config,
    pub paths: GitqPaths,
    pub navigator: RepoNavigator,
    pub quiet: bool,
}

impl Session {
    /// Open the repository the context points at and load its config.
    pub fn open(ctx: &Context) -> Result<Self> {
        let cwd = match &ctx.cwd {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        let git = Git::open(&cwd).context("Failed to open repository")?;
        let info = git.info().context("Failed to read repository layout")?;

        let mut paths = GitqPaths::from_repo_info(&info);
        let config = Config::load(Some(&paths)).context("Failed to load configuration")?;
        if let Some(dir) = config.state_dir(&info.work_dir) {
            paths = paths.with_state_dir(dir);
        }
        tracing::debug!(state_dir = %paths.state_dir().display(), "session opened");

        let store = QueueStore::from_paths(&paths);
        let navigator = Navigator::new(
            store,
            LogHistory::new(GitCli::new(&info.work_dir)),
            GitCli::new(&info.work_dir),
        );
        let quiet = ctx.quiet || config.quiet();

        Ok(Self {
            git,
            config,
            paths,
            navigator,
            quiet,
        })
    }

    /// Take the exclusive lock for a mutating command.
    pub fn lock(&self) -> Result<RepoLock> {
        RepoLock::acquire(&self.paths).context("Failed to lock repository")
    }
}

/// Print both queues, forward first.
pub(crate) fn print_queues(queues: &QueueSnapshot) {
    println!("Forward queue: {}", queues.forward);
    println!("Backward queue: {}", queues.backward);
}

/// Report an empty-queue undo/redo; pass every other error up.
/// The message is printed even in quiet mode.
pub(crate) fn report_no_history(err: NavError) -> Result<()> {
    match err {
        NavError::NoHistory { .. } => {
            println!("{}", err);
            Ok(())
        }
        other => Err(other.into()),
    }
}
