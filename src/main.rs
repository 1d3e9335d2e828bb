use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use composer_license_auditor::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Report {
            path,
            composer,
            format,
            output,
            license_data,
            timeout,
        } => commands::handle_report(path, composer, format, output, license_data, timeout, cli.quiet),
        Commands::Check {
            path,
            composer,
            blacklist,
            whitelist,
            format,
            exit_zero,
            timeout,
        } => commands::handle_check(
            path, composer, blacklist, whitelist, format, exit_zero, timeout, cli.quiet,
        ),
        Commands::Init { policy, path } => commands::handle_init(policy, path, cli.quiet),
        Commands::Config { path, show, validate } => {
            commands::handle_config(path, show, validate, cli.quiet)
        }
    }
}
