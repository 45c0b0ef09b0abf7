use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::GlobalArgs;
use crate::error::HookTestError;
use crate::hook::{HookInput, DEFAULT_COMMIT_MESSAGE};

pub fn run(
    global: &GlobalArgs,
    hook_script: Option<PathBuf>,
    message: Option<String>,
    message_file: Option<PathBuf>,
) -> Result<i32> {
    let message = resolve_message(message, message_file.as_deref())?;
    super::execute(global, hook_script, HookInput::commit_msg(message))
}

/// Message file wins over inline text; the sample message is the fallback
fn resolve_message(message: Option<String>, message_file: Option<&Path>) -> Result<String> {
    if let Some(path) = message_file {
        if !path.is_file() {
            return Err(HookTestError::MessageFileNotFound(path.to_path_buf()).into());
        }
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    Ok(message.unwrap_or_else(|| DEFAULT_COMMIT_MESSAGE.to_string()))
}
