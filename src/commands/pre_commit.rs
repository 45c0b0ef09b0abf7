use std::path::PathBuf;

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::hook::{HookInput, DEFAULT_STAGED_FILES};

pub fn run(
    global: &GlobalArgs,
    hook_script: Option<PathBuf>,
    files: Vec<String>,
) -> Result<i32> {
    let input = if files.is_empty() {
        HookInput::pre_commit(DEFAULT_STAGED_FILES.iter().copied())
    } else {
        HookInput::pre_commit(files)
    };
    super::execute(global, hook_script, input)
}
