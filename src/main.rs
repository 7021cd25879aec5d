use std::env;
use std::process;

use tickoff::color;
use tickoff::config::{self, Command, Config};
use tickoff::shutdown;

mod commands;

fn main() {
    let cli = match config::parse_args(env::args_os()) {
        Ok(cli) => cli,
        // Prints help/version or the usage error and exits with clap's code
        Err(e) => e.exit(),
    };

    let config = match Config::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", color::error("error:"), e);
            process::exit(1);
        }
    };

    // Default command is the interactive list
    let command = cli.command.clone().unwrap_or(Command::Ui);

    // Only the TUI runs long enough to need a termination handler
    if command == Command::Ui {
        if let Err(e) = shutdown::register_handler() {
            eprintln!("{} {}", color::warning("warning:"), e);
        }
    }

    let result = match command {
        Command::Ui => commands::cmd_ui(&config),
        Command::List => commands::cmd_list(&config),
        Command::Add { text } => commands::cmd_add(&config, &text),
        Command::Done { id } => commands::cmd_done(&config, id),
        Command::Edit { id } => commands::cmd_edit(&config, id),
        Command::Rm { id, yes } => commands::cmd_rm(&config, id, yes),
        Command::Theme => commands::cmd_theme(&config),
        Command::Status => commands::cmd_status(&config),
        Command::Init { force } => commands::cmd_init(force),
    };

    if let Err(e) = result {
        eprintln!("{} {}", color::error("error:"), e);
        process::exit(1);
    }
}
