use std::path::PathBuf;

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::hook::HookInput;

pub fn run(
    global: &GlobalArgs,
    hook_script: Option<PathBuf>,
    remote: &str,
    url: &str,
) -> Result<i32> {
    super::execute(global, hook_script, HookInput::pre_push(remote, url))
}
