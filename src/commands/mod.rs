pub mod commit_msg;
pub mod generic;
pub mod pre_commit;
pub mod pre_push;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::hook::HookInput;
use crate::output;
use crate::simulator::{HookSimulator, SimulatorOptions};

/// Run one hook with the given input, print the result, and return its exit code.
///
/// Without an explicit script, the hook installed under `<git-dir>/hooks/` is used.
pub fn execute(
    global: &GlobalArgs,
    hook_script: Option<PathBuf>,
    input: HookInput,
) -> Result<i32> {
    let simulator = HookSimulator::new(SimulatorOptions {
        verbose: global.verbose,
        git_dir: global.git_dir.clone(),
        timeout: global.timeout.map(Duration::from_secs),
    })?;

    let script = hook_script.unwrap_or_else(|| simulator.installed_hook(input.kind()));
    let result = simulator.run_hook(&script, &input)?;

    if global.json {
        output::display_json(&result, &mut std::io::stdout().lock())?;
    } else {
        output::display(
            &result,
            simulator.verbose(),
            &mut std::io::stdout().lock(),
            &mut std::io::stderr().lock(),
        )?;
    }
    // main leaves through process::exit, which does not flush stdout
    std::io::stdout().flush()?;

    Ok(result.exit_code)
}
