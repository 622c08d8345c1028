//! `vault-get`: print a secret stored below the Vault base path as JSON.

// CLI binary needs to output to stdout/stderr - this is intentional
#![allow(clippy::print_stdout, clippy::print_stderr)]

use akari::cli::{self, CliError, EXIT_OK, VaultGetCli, exit_code_for, render_error};
use akari::commands::{self, secret};
use clap::Parser;

fn main() {
    let cli = VaultGetCli::parse();

    if let Err(e) = akari::tracing::init_tracing(cli.log.tracing_config()) {
        eprintln!("Warning: {e}");
    }

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_OK,
        Err(err) => {
            render_error(&err);
            exit_code_for(&err)
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &VaultGetCli) -> Result<(), CliError> {
    let runtime = cli::runtime()?;
    let output = runtime.block_on(async {
        let resolver = commands::resolver(&cli.vault)?;
        secret::execute_get(&resolver, &cli.path).await
    })?;

    println!("{output}");
    Ok(())
}
