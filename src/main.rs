use clap::Parser;
use wingsfly::cli::commands::{Cli, Commands};
use wingsfly::cli::output;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = wingsfly::tui::run(cli.dark) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Tasks(args)) => {
            if let Err(e) = output::cmd_tasks(&args) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Options(args)) => {
            if let Err(e) = output::cmd_options(&args) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
