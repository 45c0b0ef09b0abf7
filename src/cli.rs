use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::hook::{HookKind, DEFAULT_REMOTE_NAME, DEFAULT_REMOTE_URL};

#[derive(Parser)]
#[command(
    name = "hook-test",
    version,
    about = "Test git hooks locally without committing"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Show detailed execution info
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom .git directory path
    #[arg(long, global = true, value_name = "PATH")]
    pub git_dir: Option<PathBuf>,

    /// Kill the hook if it runs longer than this many seconds
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Test a pre-commit hook with simulated staged files
    PreCommit {
        /// Hook script (default: <git-dir>/hooks/pre-commit)
        hook_script: Option<PathBuf>,
        /// Staged files to simulate
        #[arg(short, long = "files", value_name = "PATH")]
        files: Vec<String>,
    },

    /// Test a commit-msg hook with a sample commit message
    CommitMsg {
        /// Hook script (default: <git-dir>/hooks/commit-msg)
        hook_script: Option<PathBuf>,
        /// Commit message to test
        #[arg(short, long, conflicts_with = "message_file")]
        message: Option<String>,
        /// File containing commit message
        #[arg(long, value_name = "PATH")]
        message_file: Option<PathBuf>,
    },

    /// Test a pre-push hook with simulated push data
    PrePush {
        /// Hook script (default: <git-dir>/hooks/pre-push)
        hook_script: Option<PathBuf>,
        /// Remote name
        #[arg(long, default_value = DEFAULT_REMOTE_NAME)]
        remote: String,
        /// Remote URL
        #[arg(long, default_value = DEFAULT_REMOTE_URL)]
        url: String,
    },

    /// Test other git hooks with basic simulation
    Generic {
        /// Hook script (default: <git-dir>/hooks/<hook-type>)
        hook_script: Option<PathBuf>,
        #[arg(long, value_enum)]
        hook_type: GenericHook,
    },
}

/// Hooks that get no payload beyond the base environment
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericHook {
    PrepareCommitMsg,
    PostCommit,
    PreRebase,
}

impl From<GenericHook> for HookKind {
    fn from(hook: GenericHook) -> Self {
        match hook {
            GenericHook::PrepareCommitMsg => HookKind::PrepareCommitMsg,
            GenericHook::PostCommit => HookKind::PostCommit,
            GenericHook::PreRebase => HookKind::PreRebase,
        }
    }
}
