use clap::{Parser, Subcommand};

mod assessment;
mod cmd;
mod letter;
mod person;
mod tax;

use cmd::console::ConsoleCommand;
use cmd::process::ProcessCommand;
use cmd::schema::SchemaCommand;

#[derive(Parser, Debug)]
#[command(
    name = "taxnote",
    version,
    about = "Calculate Swiss progressive income tax and generate notification letters"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Collect tax information interactively
    Console(ConsoleCommand),
    /// Process person records from a JSON file
    Process(ProcessCommand),
    /// Print the JSON Schema for input records
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Console(cmd) => cmd.exec(),
        Command::Process(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
