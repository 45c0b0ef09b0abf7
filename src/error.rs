use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookTestError {
    #[error("hook script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),

    #[error("commit message file not found: {}", .0.display())]
    MessageFileNotFound(PathBuf),

    #[error("staged path '{0}' must be relative and stay inside the scratch directory")]
    InvalidStagedPath(String),

    #[error("failed to start hook script {}: {source}", .script.display())]
    Spawn {
        script: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
