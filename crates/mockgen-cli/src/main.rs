mod logging;
mod settings;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mockgen_generate::{
    CustomerDatasetGenerator, CustomerOptions, CustomerSource, GenerationError, RunReport,
    SavingBookOptions, SavingBookTransformer, write_report,
};
use settings::{Settings, SettingsError, load_settings};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
enum CliError {
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("logging setup failed: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "mockgen", version, about = "Mock data module generator")]
struct Cli {
    /// Settings file; defaults apply when it does not exist.
    #[arg(long, global = true, default_value = "mockgen.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the customer table into a module.
    Customers(CustomersArgs),
    /// Rewrite a legacy saving-book module into the new layout.
    SavingBooks(SavingBooksArgs),
}

#[derive(Args, Debug)]
struct CustomersArgs {
    /// Output module path.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Write the run report as JSON.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SavingBooksArgs {
    /// Legacy module to read.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output module path.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Rendered customer module to join against instead of the built-in table.
    #[arg(long)]
    customers_module: Option<PathBuf>,
    /// Write the run report as JSON.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_settings(&cli.config)?;
    logging::init_logging(&settings.logging).map_err(CliError::Logging)?;
    info!(
        config = %cli.config.display(),
        config_found = cli.config.exists(),
        "settings loaded"
    );

    match cli.command {
        Command::Customers(args) => run_customers(args, &settings),
        Command::SavingBooks(args) => run_saving_books(args, &settings),
    }
}

fn run_customers(args: CustomersArgs, settings: &Settings) -> Result<(), CliError> {
    let options = CustomerOptions {
        out_path: args.out.unwrap_or_else(|| settings.customers.output.clone()),
    };
    let run = CustomerDatasetGenerator::new(options).run()?;
    finish_report(args.report, &run.report)?;

    println!(
        "Generated {} with {} customers",
        run.output_path.display(),
        run.store.len()
    );
    Ok(())
}

fn run_saving_books(args: SavingBooksArgs, settings: &Settings) -> Result<(), CliError> {
    let customers = args
        .customers_module
        .or_else(|| settings.saving_books.customers_module.clone())
        .map(CustomerSource::Module)
        .unwrap_or_default();
    let options = SavingBookOptions {
        input_path: args
            .input
            .unwrap_or_else(|| settings.saving_books.input.clone()),
        out_path: args
            .out
            .unwrap_or_else(|| settings.saving_books.output.clone()),
        customers,
    };
    let run = SavingBookTransformer::new(options).run()?;
    finish_report(args.report, &run.report)?;

    println!("Found {} saving books", run.report.records_matched);
    println!("Generated {}", run.output_path.display());
    println!("Total books transformed: {}", run.report.records_written);
    Ok(())
}

fn finish_report(path: Option<PathBuf>, report: &RunReport) -> Result<(), CliError> {
    if let Some(path) = path {
        write_report(&path, report)?;
    }
    Ok(())
}
