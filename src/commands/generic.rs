use std::path::PathBuf;

use anyhow::Result;

use crate::cli::{GenericHook, GlobalArgs};
use crate::hook::HookInput;

pub fn run(
    global: &GlobalArgs,
    hook_script: Option<PathBuf>,
    hook_type: GenericHook,
) -> Result<i32> {
    super::execute(global, hook_script, HookInput::sample(hook_type.into()))
}
