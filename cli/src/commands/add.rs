//! ADD command - Add a new book to the catalog.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{Book, HumanReadable, make_request, output};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Title of the book
    pub title: String,

    /// Author of the book
    pub author: String,

    /// Year of publication
    pub year: i32,
}

/// Request body for adding a book.
#[derive(Serialize)]
struct AddBookRequest {
    title: String,
    author: String,
    year: i32,
}

/// The record the server created, id included.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AddedBook(pub Book);

impl HumanReadable for AddedBook {
    fn print_human(&self) {
        println!("{}", "Book added successfully!".green().bold());
        println!();
        self.0.print_human();
    }
}

/// Execute the add command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: AddArgs,
) -> Result<()> {
    let url = format!("{}/api/books", base_url);

    let request_body = AddBookRequest {
        title: args.title,
        author: args.author,
        year: args.year,
    };

    let added: AddedBook = make_request(client.post(&url).json(&request_body)).await?;

    output(&added, human)
}
