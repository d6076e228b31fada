//! REMOVE command - Delete a book from the catalog.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output};

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Id of the book to delete
    pub id: u64,
}

/// Confirmation from deleting a book.
#[derive(Debug, Deserialize, Serialize)]
pub struct RemoveBookResponse {
    pub message: String,
}

impl HumanReadable for RemoveBookResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
    }
}

/// Execute the remove command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: RemoveArgs,
) -> Result<()> {
    let url = format!("{}/api/books/{}", base_url, args.id);

    let response: RemoveBookResponse = make_request(client.delete(&url)).await?;

    output(&response, human)
}
