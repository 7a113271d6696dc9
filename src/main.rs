use clap::Parser;
use quad::cli::commands::{Cli, Commands};
use quad::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = quad::tui::run(data_dir.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Init) => {
            // Init runs before data-dir discovery
            if let Err(e) = handlers::cmd_init(&data_dir) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
