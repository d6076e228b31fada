//! LIST command - List books, one page at a time.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{Book, HumanReadable, make_request, output};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: u64,

    /// Books per page
    #[arg(long, default_value_t = 2)]
    pub per_page: u64,
}

/// One page of the catalog, the bare array the server returns.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct BookPage(pub Vec<Book>);

impl HumanReadable for BookPage {
    fn print_human(&self) {
        println!("{}", "Book Catalog".green().bold());
        println!("{}", "=".repeat(40));

        if self.0.is_empty() {
            println!("  {}", "(No books on this page)".dimmed());
            return;
        }

        for book in &self.0 {
            println!();
            book.print_human();
        }

        println!();
        println!("  {} {}", "On this page:".cyan(), self.0.len());
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ListArgs,
) -> Result<()> {
    let url = format!("{}/api/books", base_url);

    let page: BookPage = make_request(
        client
            .get(&url)
            .query(&[("page", args.page), ("per_page", args.per_page)]),
    )
    .await?;

    output(&page, human)
}
