//! `notify-slack`: send a message through the Slack webhook stored in Vault.
//!
//! ```text
//! notify-slack "deploy finished"
//! SLACK_CHANNEL="#my-channel" notify-slack Hello
//! ```

// CLI binary needs to output to stdout/stderr - this is intentional
#![allow(clippy::print_stdout, clippy::print_stderr)]

use akari::cli::{self, CliError, EXIT_OK, NotifySlackCli, exit_code_for, render_error};
use akari::commands::{self, notify};
use akari_notify::SlackNotifier;
use clap::Parser;

fn main() {
    let cli = NotifySlackCli::parse();

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

fn run(cli: &NotifySlackCli) -> Result<(), CliError> {
    let runtime = cli::runtime()?;
    let message = runtime.block_on(async {
        let notifier = SlackNotifier::new(commands::resolver(&cli.vault)?)?;
        notify::execute_notify(&notifier, &cli.message, cli.channel.as_deref()).await
    })?;

    println!("Sent to Slack: {message}");
    Ok(())
}
