//! Command implementations for the bookshelf CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod add;
pub mod get;
pub mod list;
pub mod remove;
pub mod simulate;
pub mod update;

use anyhow::Result;
use colored::Colorize;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Build an HTTP client that sends the API key with every request.
pub fn build_client(api_key: &str) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(api_key)
        .map_err(|e| anyhow::anyhow!("Invalid API key value: {}", e))?;
    headers.insert(API_KEY_HEADER, value);

    Ok(reqwest::Client::builder().default_headers(headers).build()?)
}

/// A catalog record as the server returns it.
#[derive(Debug, Deserialize, Serialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl HumanReadable for Book {
    fn print_human(&self) {
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Title:".cyan(), self.title);
        println!("  {} {}", "Author:".cyan(), self.author);
        println!("  {} {}", "Year:".cyan(), self.year);
    }
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Make an HTTP request and handle common error cases.
pub async fn make_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.json::<T>().await?;
        Ok(body)
    } else {
        let body = response.text().await.unwrap_or_default();

        // Pull the message out of the `{"error": {...}}` envelope when
        // there is one
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            let message = json
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or(&body)
                .to_string();
            Err(CliError::Server {
                status: status.as_u16(),
                message,
            })
        } else {
            Err(CliError::Server {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}
