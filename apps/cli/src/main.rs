mod cli;
mod command;
mod config;
mod error;
mod menu;

use clap::Parser;
use tracing::Level;

fn main() -> error::Result<()> {
    color_eyre::install()?;

    let command_line = cli::Cli::parse();

    let max_level = match command_line.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(max_level).init();

    let cfg = config::Config::load();

    if let Some(command) = command_line.command {
        let cmd: Box<dyn command::Command> = match command {
            cli::Commands::Index => Box::new(command::IndexCommand::new(cfg)),
            cli::Commands::Search => Box::new(command::SearchCommand::new(cfg)),
        };
        cmd.execute()?;
    } else {
        menu::run(&cfg)?;
    }

    Ok(())
}
