use std::fmt;

use serde::Serialize;

/// Staged files used when a pre-commit run names none.
pub const DEFAULT_STAGED_FILES: &[&str] = &["sample.py", "README.md"];

pub const DEFAULT_COMMIT_MESSAGE: &str =
    "feat: add new feature\n\nThis is a sample commit message for testing.";

pub const DEFAULT_REMOTE_NAME: &str = "origin";
pub const DEFAULT_REMOTE_URL: &str = "https://github.com/user/repo.git";

/// Placeholder SHAs for the synthetic ref-update line fed to pre-push.
pub const PUSH_OLD_SHA: &str = "abc123";
pub const PUSH_NEW_SHA: &str = "def456";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookKind {
    PreCommit,
    CommitMsg,
    PrePush,
    PrepareCommitMsg,
    PostCommit,
    PreRebase,
}

impl HookKind {
    pub const ALL: [HookKind; 6] = [
        HookKind::PreCommit,
        HookKind::CommitMsg,
        HookKind::PrePush,
        HookKind::PrepareCommitMsg,
        HookKind::PostCommit,
        HookKind::PreRebase,
    ];

    /// Hook name as git uses it, and as it appears under `.git/hooks/`
    pub fn as_str(&self) -> &'static str {
        match self {
            HookKind::PreCommit => "pre-commit",
            HookKind::CommitMsg => "commit-msg",
            HookKind::PrePush => "pre-push",
            HookKind::PrepareCommitMsg => "prepare-commit-msg",
            HookKind::PostCommit => "post-commit",
            HookKind::PreRebase => "pre-rebase",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-kind inputs for one simulated hook run.
///
/// Each variant carries exactly what its hook needs; kinds git invokes
/// without extra data have no payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookInput {
    PreCommit { staged_files: Vec<String> },
    CommitMsg { message: String },
    PrePush { remote_name: String, remote_url: String },
    PrepareCommitMsg,
    PostCommit,
    PreRebase,
}

impl HookInput {
    pub fn pre_commit<I, S>(staged_files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        HookInput::PreCommit {
            staged_files: staged_files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn commit_msg(message: impl Into<String>) -> Self {
        HookInput::CommitMsg {
            message: message.into(),
        }
    }

    pub fn pre_push(remote_name: impl Into<String>, remote_url: impl Into<String>) -> Self {
        HookInput::PrePush {
            remote_name: remote_name.into(),
            remote_url: remote_url.into(),
        }
    }

    /// Input with sample data for the given kind
    pub fn sample(kind: HookKind) -> Self {
        match kind {
            HookKind::PreCommit => HookInput::pre_commit(DEFAULT_STAGED_FILES.iter().copied()),
            HookKind::CommitMsg => HookInput::commit_msg(DEFAULT_COMMIT_MESSAGE),
            HookKind::PrePush => HookInput::pre_push(DEFAULT_REMOTE_NAME, DEFAULT_REMOTE_URL),
            HookKind::PrepareCommitMsg => HookInput::PrepareCommitMsg,
            HookKind::PostCommit => HookInput::PostCommit,
            HookKind::PreRebase => HookInput::PreRebase,
        }
    }

    pub fn kind(&self) -> HookKind {
        match self {
            HookInput::PreCommit { .. } => HookKind::PreCommit,
            HookInput::CommitMsg { .. } => HookKind::CommitMsg,
            HookInput::PrePush { .. } => HookKind::PrePush,
            HookInput::PrepareCommitMsg => HookKind::PrepareCommitMsg,
            HookInput::PostCommit => HookKind::PostCommit,
            HookInput::PreRebase => HookKind::PreRebase,
        }
    }
}

/// Ref-update line git writes to pre-push's stdin
pub fn push_ref_line() -> String {
    format!(
        "refs/heads/main {} refs/heads/main {}\n",
        PUSH_OLD_SHA, PUSH_NEW_SHA
    )
}
