//! Transfer command - move fork repositories to a new owner
//!
//! `forkshift <source> <destination>`
//!
//! This command:
//! 1. Lists every repository owned by the source account
//! 2. Keeps only the repositories flagged as forks
//! 3. Asks the operator to confirm before anything changes hands
//! 4. Transfers each fork sequentially, recording success/failure per item
//!
//! A failed transfer never aborts the batch. Ownership transfer is not
//! idempotent, so the remaining items must still get their one attempt.

use std::io::{self, BufRead, Write};

use crate::bridge::RepoClient;
use crate::types::Repo;

/// Result of attempting to move one repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStatus {
    Succeeded,
    Failed,
}

/// Outcome of one transfer attempt
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    /// The repository attempted
    pub repo: Repo,

    /// Whether the transfer succeeded
    pub status: TransferStatus,

    /// Error message if failed
    pub error: Option<String>,
}

/// Aggregate result of a completed transfer batch
#[derive(Debug)]
pub struct BatchReport {
    /// Account the forks were transferred from
    pub source: String,

    /// Account the forks were transferred to
    pub destination: String,

    /// Per-repository outcomes, in attempt order
    pub outcomes: Vec<TransferOutcome>,
}

impl BatchReport {
    /// Number of transfers that succeeded
    pub fn success_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == TransferStatus::Succeeded)
            .count()
    }

    /// Number of transfers that failed
    pub fn fail_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == TransferStatus::Failed)
            .count()
    }

    /// Whether every transfer in the batch succeeded
    pub fn all_success(&self) -> bool {
        self.fail_count() == 0
    }

    /// Format as human-readable string
    pub fn format(&self) -> String {
        let mut lines = vec![format!(
            "Done: {} succeeded, {} failed",
            self.success_count(),
            self.fail_count()
        )];

        if !self.all_success() {
            lines.push("Failed transfers:".to_string());
            for outcome in &self.outcomes {
                if outcome.status == TransferStatus::Failed {
                    let reason = outcome.error.as_deref().unwrap_or("unknown error");
                    lines.push(format!("  ✗ {}: {}", outcome.repo.name, reason));
                }
            }
        }

        lines.join("\n")
    }
}

/// Keep only the repositories flagged as forks, preserving input order.
pub fn filter_forks(repos: Vec<Repo>) -> Vec<Repo> {
    repos.into_iter().filter(|repo| repo.fork).collect()
}

/// Whether an operator answer counts as a yes.
///
/// Only the single character "y", case-insensitively, proceeds. Anything
/// else (empty input, "yes", garbage) declines.
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Ask the operator for confirmation on the console.
///
/// Blocks on one line from stdin. End-of-input and read errors decline.
pub fn confirm(prompt: &str) -> bool {
    print!("{prompt} (y/N) ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => is_affirmative(&answer),
    }
}

/// Transfer each fork to the destination account, strictly sequentially.
///
/// Transfers mutate remote state one at a time; running them concurrently
/// could race at the remote service, and a partial failure must not stop
/// the remaining items from getting their attempt. Per-item failures are
/// captured in the report rather than raised.
pub async fn transfer_forks(
    client: &dyn RepoClient,
    source: &str,
    destination: &str,
    forks: Vec<Repo>,
) -> BatchReport {
    let mut outcomes = Vec::with_capacity(forks.len());

    for repo in forks {
        println!("  transferring {} -> {}/{}", repo.full_name, destination, repo.name);

        match client.transfer_repo(source, &repo.name, destination).await {
            Ok(()) => {
                println!("  ✓ {}", repo.name);
                outcomes.push(TransferOutcome {
                    repo,
                    status: TransferStatus::Succeeded,
                    error: None,
                });
            }
            Err(e) => {
                eprintln!("  ✗ {}: {}", repo.name, e);
                tracing::warn!("transfer of {} failed: {}", repo.name, e);
                outcomes.push(TransferOutcome {
                    repo,
                    status: TransferStatus::Failed,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    BatchReport {
        source: source.to_string(),
        destination: destination.to_string(),
        outcomes,
    }
}
