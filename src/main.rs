mod cmd;
mod export;
mod tax;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "btctax", version, about = "Slovak tax and health insurance on a Bitcoin sale")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate and display the tax breakdown
    Calc(cmd::calc::CalcCommand),
    /// Write the tax breakdown to a document and/or spreadsheet
    Export(cmd::export::ExportCommand),
    /// List supported tax years
    Years(cmd::years::YearsCommand),
    /// Print the JSON Schema of `calc --json` output
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Calc(calc) => calc.exec(),
        Command::Export(export) => export.exec(),
        Command::Years(years) => years.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
