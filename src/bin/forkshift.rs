//! Forkshift CLI - transfer fork repositories between accounts
//!
//! Usage:
//!   forkshift <SOURCE> <DESTINATION>
//!
//! Lists the source account's repositories through the gh CLI, shows the
//! forks, and after operator confirmation transfers each one to the
//! destination account. Individual transfer failures are reported in the
//! final summary; only listing failures abort the run.

use anyhow::Context;
use clap::Parser;

use forkshift::bridge::{GhCli, RepoClient};
use forkshift::commands::{confirm, filter_forks, transfer_forks};

#[derive(Parser, Debug)]
#[command(name = "forkshift")]
#[command(about = "Transfer fork repositories from one account to another", long_about = None)]
struct Args {
    /// Account that currently owns the forks
    #[arg(value_parser = clap::builder::NonEmptyStringValueParser::new())]
    source: String,

    /// Account that will receive the forks
    #[arg(value_parser = clap::builder::NonEmptyStringValueParser::new())]
    destination: String,
}

#[tokio::main]
async fn main() {
    // Missing arguments must exit 1 with usage on stderr; --help and
    // --version still land on stdout and exit 0.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    // Keep stdout as the operator console; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("forkshift=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("starting forkshift at {}", chrono::Utc::now());

    if let Err(e) = run(args).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    if args.source == args.destination {
        anyhow::bail!("source and destination accounts are the same");
    }

    let client = GhCli::new();

    println!(
        "Transferring fork repositories from {} to {}\n",
        args.source, args.destination
    );

    println!("Fetching repositories for {}...", args.source);
    let repos = client
        .list_repos(&args.source)
        .await
        .with_context(|| format!("failed to list repositories for {}", args.source))?;

    let forks = filter_forks(repos);
    if forks.is_empty() {
        println!("No fork repositories found.");
        return Ok(());
    }

    println!("Found {} fork repositories:\n", forks.len());
    for repo in &forks {
        println!("  - {}", repo.name);
    }

    let prompt = format!("\nTransfer these repositories to {}?", args.destination);
    if !confirm(&prompt) {
        println!("Cancelled.");
        return Ok(());
    }

    println!("\nStarting transfers...\n");
    let report = transfer_forks(&client, &args.source, &args.destination, forks).await;

    // Partial failures surface through the printed counts only; the batch
    // completing at all is reported as success via exit code 0.
    println!("\n{}", report.format());
    Ok(())
}
