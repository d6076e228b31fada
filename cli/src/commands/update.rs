//! UPDATE command - Replace an existing book.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{Book, HumanReadable, make_request, output};

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Id of the book to replace
    pub id: u64,

    /// New title
    pub title: String,

    /// New author
    pub author: String,

    /// New year of publication
    pub year: i32,
}

/// Request body for replacing a book.
#[derive(Serialize)]
struct UpdateBookRequest {
    title: String,
    author: String,
    year: i32,
}

/// The record after replacement.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UpdatedBook(pub Book);

impl HumanReadable for UpdatedBook {
    fn print_human(&self) {
        println!("{}", "Book updated successfully!".green().bold());
        println!();
        self.0.print_human();
    }
}

/// Execute the update command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: UpdateArgs,
) -> Result<()> {
    let url = format!("{}/api/books/{}", base_url, args.id);

    let request_body = UpdateBookRequest {
        title: args.title,
        author: args.author,
        year: args.year,
    };

    let updated: UpdatedBook = make_request(client.put(&url).json(&request_body)).await?;

    output(&updated, human)
}
