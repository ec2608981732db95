use crate::report::{run_compare, run_dedupe, CompareArgs, DedupeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use name_match::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Name Match",
    about = "Score freeform person names and flag likely duplicates",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compare two names and print the score breakdown
    Compare(CompareArgs),
    /// Find likely duplicate names in a CSV export
    Dedupe(DedupeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Compare(args) => run_compare(args),
        Command::Dedupe(args) => run_dedupe(args),
    }
}
