//! SIMULATE command - Generate randomized traffic against the server.
//!
//! Each iteration picks one catalog operation at random and runs it with
//! randomized parameters. After every mutation the server is probed with
//! a bad API key to confirm the credential gate rejects it. Individual
//! failures (a 404 from deleting an already-deleted id, a refused
//! connection) are reported and the loop keeps going.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use rand::Rng;

use super::{API_KEY_HEADER, Book, CliError, make_request};

/// Arguments for the simulate command.
#[derive(Args)]
pub struct SimulateArgs {
    /// Number of iterations to run; 0 means run until interrupted
    #[arg(long, default_value_t = 0)]
    pub iterations: u64,
}

/// One randomly chosen catalog operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    List,
    Add,
    Update,
    Remove,
}

fn pick_action() -> Action {
    match rand::thread_rng().gen_range(0..4) {
        0 => Action::List,
        1 => Action::Add,
        2 => Action::Update,
        _ => Action::Remove,
    }
}

fn random_page() -> u64 {
    rand::thread_rng().gen_range(1..=3)
}

fn random_id() -> u64 {
    rand::thread_rng().gen_range(1..=3)
}

fn random_year() -> i32 {
    rand::thread_rng().gen_range(1900..=2023)
}

fn random_pause() -> Duration {
    Duration::from_secs(rand::thread_rng().gen_range(1..=5))
}

fn report(iteration: u64, line: String) {
    println!("{} {}", format!("[{}]", iteration).dimmed(), line);
}

/// Execute the simulate command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    _human: bool,
    args: SimulateArgs,
) -> Result<()> {
    let mut iteration: u64 = 0;

    loop {
        if args.iterations != 0 && iteration >= args.iterations {
            break;
        }
        iteration += 1;

        match pick_action() {
            Action::List => run_list(client, base_url, iteration).await,
            Action::Add => run_add(client, base_url, iteration).await,
            Action::Update => {
                run_update(client, base_url, iteration).await;
                run_bad_key_probe(client, base_url, iteration).await;
            }
            Action::Remove => {
                run_remove(client, base_url, iteration).await;
                run_bad_key_probe(client, base_url, iteration).await;
            }
        }

        tokio::time::sleep(random_pause()).await;
    }

    println!(
        "{}",
        format!("Completed {} iterations", args.iterations)
            .green()
            .bold()
    );
    Ok(())
}

async fn run_list(client: &reqwest::Client, base_url: &str, iteration: u64) {
    let (page, per_page) = (random_page(), random_page());
    let url = format!("{}/api/books", base_url);

    let result = make_request::<Vec<Book>>(
        client
            .get(&url)
            .query(&[("page", page), ("per_page", per_page)]),
    )
    .await;

    match result {
        Ok(books) => report(
            iteration,
            format!(
                "GET /api/books page={} per_page={} -> {} books",
                page,
                per_page,
                books.len()
            ),
        ),
        Err(e) => report(iteration, format!("{} GET /api/books: {}", "failed".red(), e)),
    }
}

async fn run_add(client: &reqwest::Client, base_url: &str, iteration: u64) {
    let url = format!("{}/api/books", base_url);
    let payload = serde_json::json!({
        "title": "Sample Book",
        "author": "Sample Author",
        "year": random_year(),
    });

    match make_request::<Book>(client.post(&url).json(&payload)).await {
        Ok(book) => report(
            iteration,
            format!("POST /api/books -> created id {}", book.id),
        ),
        Err(e) => report(
            iteration,
            format!("{} POST /api/books: {}", "failed".red(), e),
        ),
    }
}

async fn run_update(client: &reqwest::Client, base_url: &str, iteration: u64) {
    let id = random_id();
    let url = format!("{}/api/books/{}", base_url, id);
    let payload = serde_json::json!({
        "title": "Updated Title",
        "author": "Updated Author",
        "year": random_year(),
    });

    match make_request::<Book>(client.put(&url).json(&payload)).await {
        Ok(book) => report(
            iteration,
            format!("PUT /api/books/{} -> replaced", book.id),
        ),
        Err(e) => report(
            iteration,
            format!("{} PUT /api/books/{}: {}", "failed".red(), id, e),
        ),
    }
}

async fn run_remove(client: &reqwest::Client, base_url: &str, iteration: u64) {
    let id = random_id();
    let url = format!("{}/api/books/{}", base_url, id);

    match make_request::<serde_json::Value>(client.delete(&url)).await {
        Ok(_) => report(iteration, format!("DELETE /api/books/{} -> deleted", id)),
        Err(e) => report(
            iteration,
            format!("{} DELETE /api/books/{}: {}", "failed".red(), id, e),
        ),
    }
}

/// List with a bad key; anything but a 401 is reported loudly.
async fn run_bad_key_probe(client: &reqwest::Client, base_url: &str, iteration: u64) {
    let (page, per_page) = (random_page(), random_page());
    let url = format!("{}/api/books", base_url);

    let result = make_request::<Vec<Book>>(
        client
            .get(&url)
            .query(&[("page", page), ("per_page", per_page)])
            .header(API_KEY_HEADER, "invalid-key"),
    )
    .await;

    match result {
        Err(CliError::Server { status: 401, .. }) => report(
            iteration,
            format!("bad-key probe {}", "rejected as expected (401)".green()),
        ),
        Ok(_) => report(
            iteration,
            format!("bad-key probe {}", "unexpectedly succeeded".red().bold()),
        ),
        Err(e) => report(
            iteration,
            format!("bad-key probe {}: {}", "unexpected failure".red(), e),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_parameters_stay_in_range() {
        for _ in 0..100 {
            assert!((1..=3).contains(&random_page()));
            assert!((1..=3).contains(&random_id()));
            assert!((1900..=2023).contains(&random_year()));

            let pause = random_pause();
            assert!(pause >= Duration::from_secs(1));
            assert!(pause <= Duration::from_secs(5));
        }
    }

    #[test]
    fn test_pick_action_covers_all_variants() {
        let mut seen = [false; 4];
        for _ in 0..1000 {
            match pick_action() {
                Action::List => seen[0] = true,
                Action::Add => seen[1] = true,
                Action::Update => seen[2] = true,
                Action::Remove => seen[3] = true,
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
