//! GET command - Fetch a single book by id.

use anyhow::Result;
use clap::Args;

use super::{Book, make_request, output};

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Id of the book to fetch
    pub id: u64,
}

/// Execute the get command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: GetArgs,
) -> Result<()> {
    let url = format!("{}/api/books/{}", base_url, args.id);

    let book: Book = make_request(client.get(&url)).await?;

    output(&book, human)
}
