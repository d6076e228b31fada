//! Command-line interface for the bookshelf server.
//!
//! This CLI tool provides commands for all catalog operations:
//! - list: List books, one page at a time
//! - get: Fetch a single book by id
//! - add: Add a new book
//! - update: Replace an existing book
//! - remove: Delete a book
//! - simulate: Generate randomized traffic against the server
//!
//! Configuration via environment:
//! - BOOKSHELF_URL: Base URL of the bookshelf server (default: http://127.0.0.1:5000)
//! - BOOKSHELF_API_KEY: API key sent in the X-API-KEY header

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    add::AddArgs, get::GetArgs, list::ListArgs, remove::RemoveArgs, simulate::SimulateArgs,
    update::UpdateArgs,
};

/// Bookshelf CLI
///
/// Interact with the book catalog from the command line. Designed for both
/// scripts (JSON output) and humans (--human flag for formatted output).
#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Bookshelf server URL
    #[arg(
        long,
        env = "BOOKSHELF_URL",
        default_value = "http://127.0.0.1:5000",
        global = true
    )]
    url: String,

    /// API key sent in the X-API-KEY header
    #[arg(
        long,
        env = "BOOKSHELF_API_KEY",
        default_value = "my-secret-key",
        global = true
    )]
    api_key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books in the catalog, one page at a time
    List(ListArgs),

    /// Fetch a single book by id
    Get(GetArgs),

    /// Add a new book to the catalog
    Add(AddArgs),

    /// Replace an existing book
    Update(UpdateArgs),

    /// Delete a book from the catalog
    Remove(RemoveArgs),

    /// Generate randomized traffic against the server
    Simulate(SimulateArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client(&cli.api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&client, &cli.url, cli.human, args).await,
        Commands::Get(args) => commands::get::execute(&client, &cli.url, cli.human, args).await,
        Commands::Add(args) => commands::add::execute(&client, &cli.url, cli.human, args).await,
        Commands::Update(args) => {
            commands::update::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Remove(args) => {
            commands::remove::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Simulate(args) => {
            commands::simulate::execute(&client, &cli.url, cli.human, args).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
