use std::io::Write;

use colored::Colorize;
use is_terminal::IsTerminal;

use crate::error::HookTestError;
use crate::simulator::ExecutionResult;

const BANNER_WIDTH: usize = 60;

/// Turn colors off when output is redirected
pub fn configure_color() {
    if !std::io::stdout().is_terminal() || !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Print a result for a human: hook output verbatim, then a status line.
///
/// Verbose mode wraps the output in banners naming the hook, script,
/// exit code and status.
pub fn display<O: Write, E: Write>(
    result: &ExecutionResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) -> std::io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);

    if verbose {
        writeln!(out, "\n{}", rule)?;
        writeln!(out, "Hook: {}", result.hook_type)?;
        writeln!(out, "Script: {}", result.script_path)?;
        writeln!(out, "{}\n", rule)?;
    }

    if !result.stdout.is_empty() {
        write!(out, "{}", result.stdout)?;
    }
    if !result.stderr.is_empty() {
        write!(err, "{}", result.stderr.red())?;
    }

    if verbose {
        writeln!(out, "\n{}", rule)?;
        writeln!(out, "Exit Code: {}", result.exit_code)?;
        let status = if result.success {
            "SUCCESS".green()
        } else {
            "FAILED".red()
        };
        writeln!(out, "Status: {}", status)?;
        if let Some(note) = termination_note(result) {
            writeln!(out, "Note: {}", note.yellow())?;
        }
        writeln!(out, "{}", rule)?;
    } else if !result.success {
        let summary = match termination_note(result) {
            Some(note) => format!(
                "\nHook failed with exit code {} ({})",
                result.exit_code, note
            ),
            None => format!("\nHook failed with exit code {}", result.exit_code),
        };
        writeln!(err, "{}", summary.red())?;
    }

    Ok(())
}

pub fn display_json<O: Write>(result: &ExecutionResult, out: &mut O) -> Result<(), HookTestError> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}

fn termination_note(result: &ExecutionResult) -> Option<String> {
    if result.timed_out {
        Some("timed out".to_string())
    } else {
        result
            .signal
            .map(|signal| format!("terminated by signal {}", signal))
    }
}
