use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

use crate::context::{self, ExecutionContext};
use crate::error::HookTestError;
use crate::hook::{HookInput, HookKind};
use crate::runner::{CommandOutput, CommandRunner, SystemRunner};

/// Exit code reported when a hook is killed for exceeding its timeout
pub const TIMEOUT_EXIT_CODE: i32 = 124;

#[derive(Debug, Clone, Default)]
pub struct SimulatorOptions {
    /// Only affects how results are displayed
    pub verbose: bool,
    /// Defaults to `<cwd>/.git`
    pub git_dir: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

/// Normalized outcome of one simulated hook run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    pub hook_type: HookKind,
    pub script_path: String,
    pub exit_code: i32,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    /// Signal that terminated the hook, if it did not exit on its own
    pub signal: Option<i32>,
    pub timed_out: bool,
}

impl ExecutionResult {
    fn from_output(kind: HookKind, script: &Path, output: CommandOutput) -> Self {
        let exit_code = if output.timed_out {
            TIMEOUT_EXIT_CODE
        } else {
            match (output.exit_code, output.signal) {
                (Some(code), _) => code,
                // Shell convention for a signal-terminated child
                (None, Some(signal)) => 128 + signal,
                (None, None) => 1,
            }
        };

        Self {
            hook_type: kind,
            script_path: script.display().to_string(),
            exit_code,
            success: exit_code == 0 && !output.timed_out,
            stdout: output.stdout,
            stderr: output.stderr,
            signal: output.signal,
            timed_out: output.timed_out,
        }
    }
}

/// Runs hook scripts against a synthesized git context
pub struct HookSimulator<R = SystemRunner> {
    verbose: bool,
    git_dir: PathBuf,
    timeout: Option<Duration>,
    runner: R,
}

impl HookSimulator<SystemRunner> {
    pub fn new(options: SimulatorOptions) -> Result<Self, HookTestError> {
        Self::with_runner(options, SystemRunner)
    }
}

impl<R: CommandRunner> HookSimulator<R> {
    pub fn with_runner(options: SimulatorOptions, runner: R) -> Result<Self, HookTestError> {
        // Absolute, since pre-commit hooks run from inside the scratch directory
        let cwd = std::env::current_dir()?;
        let git_dir = match options.git_dir {
            Some(dir) => cwd.join(dir),
            None => cwd.join(".git"),
        };
        Ok(Self {
            verbose: options.verbose,
            git_dir,
            timeout: options.timeout,
            runner,
        })
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    /// Where git would look for the installed hook of this kind
    pub fn installed_hook(&self, kind: HookKind) -> PathBuf {
        self.git_dir.join("hooks").join(kind.as_str())
    }

    /// Run `script` as the hook described by `input`.
    ///
    /// Only a missing script or a failure to build the context or start the
    /// process is an error; a hook that exits nonzero is a normal result.
    /// Scratch files are removed before this returns, on every path.
    pub fn run_hook(
        &self,
        script: &Path,
        input: &HookInput,
    ) -> Result<ExecutionResult, HookTestError> {
        let kind = input.kind();
        context::prepare_script(script)?;

        // The echoed path stays as given; the launched one must survive a cwd change
        let program = std::env::current_dir()?.join(script);
        let context = ExecutionContext::build(input, &self.git_dir)?;
        let spec = context.command_spec(&program, self.timeout);
        tracing::info!(hook = %kind, script = %script.display(), "running hook");

        let output = self
            .runner
            .run(&spec)
            .map_err(|source| HookTestError::Spawn {
                script: script.to_path_buf(),
                source,
            })?;
        drop(context);

        let result = ExecutionResult::from_output(kind, script, output);
        tracing::info!(
            hook = %kind,
            exit_code = result.exit_code,
            success = result.success,
            "hook finished"
        );
        Ok(result)
    }
}
