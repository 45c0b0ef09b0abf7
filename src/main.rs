use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hook_test::cli::{Cli, Commands};
use hook_test::{commands, output};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);
    output::configure_color();

    let global = &cli.global;
    let exit_code = match cli.command {
        Commands::PreCommit { hook_script, files } => {
            commands::pre_commit::run(global, hook_script, files)?
        }
        Commands::CommitMsg {
            hook_script,
            message,
            message_file,
        } => commands::commit_msg::run(global, hook_script, message, message_file)?,
        Commands::PrePush {
            hook_script,
            remote,
            url,
        } => commands::pre_push::run(global, hook_script, &remote, &url)?,
        Commands::Generic {
            hook_script,
            hook_type,
        } => commands::generic::run(global, hook_script, hook_type)?,
    };

    std::process::exit(exit_code)
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
