use clap::{Parser, Subcommand};

pub mod commands;
pub mod config;
pub mod record;
mod utils;

/// Compare the running time of classic sorting algorithms
#[derive(Parser)]
#[command(name = "sortbench")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Interactive(commands::interactive::InteractiveArgs),
    Run(commands::run::RunArgs),
}

/// Runs the selected command. Without one, starts an interactive session
/// with the default profile.
pub fn entry(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Interactive(cmd)) => cmd.run(),
        Some(Commands::Run(cmd)) => cmd.run(),
        None => commands::interactive::InteractiveArgs::default().run(),
    }
}
