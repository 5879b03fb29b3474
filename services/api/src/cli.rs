use crate::demo::{run_demo, DemoArgs};
use crate::infra::parse_store_backend;
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use unitransfer::config::StoreBackend;
use unitransfer::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "UniTransfer Portal",
    about = "Run the UniTransfer credit transfer service from the command line",
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
    /// Walk through the submission and review workflow against an in-memory store
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured store backend (memory or sqlite)
    #[arg(long, value_parser = parse_store_backend)]
    pub(crate) store: Option<StoreBackend>,
    /// Override the configured SQLite database path
    #[arg(long)]
    pub(crate) db_path: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args),
    }
}
