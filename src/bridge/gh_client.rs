//! gh CLI bridge for repository listing and ownership transfer
//!
//! All remote operations go through the `gh` command-line client as a
//! subprocess. This tool never talks to the GitHub API directly and never
//! handles credentials; `gh auth login` must have been run beforehand.

use async_trait::async_trait;
use std::process::Output;
use thiserror::Error;
use tokio::process::Command;

use crate::types::Repo;

/// jq program handed to `gh api` so the listing comes back as one JSON
/// record per line with exactly the fields this tool decodes.
const LIST_JQ: &str = ".[] | {name: .name, full_name: .full_name, fork: .fork}";

/// Errors that can occur when driving the gh CLI
#[derive(Debug, Error)]
pub enum GhError {
    /// The gh binary could not be spawned at all
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// gh ran but exited non-zero
    #[error("gh exited with status {status}: {stderr}")]
    CommandFailed { status: i32, stderr: String },

    /// gh output could not be decoded as the expected record stream
    #[error("invalid repository record: {0}")]
    Parse(#[from] serde_json::Error),

    /// gh output was not valid UTF-8
    #[error("gh produced non-UTF-8 output")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for gh operations
pub type GhResult<T> = std::result::Result<T, GhError>;

/// Unified interface for the remote repository service
///
/// This trait is implemented by:
/// - `GhCli`: drives the real gh CLI
/// - `MockRepoClient`: configurable in-memory double for tests
#[async_trait]
pub trait RepoClient: Send + Sync {
    /// List all repositories owned by the given account
    async fn list_repos(&self, account: &str) -> GhResult<Vec<Repo>>;

    /// Transfer ownership of `owner/name` to `new_owner`.
    ///
    /// Not idempotent: once a transfer succeeds the repository no longer
    /// belongs to `owner`, so re-invoking fails at the remote service.
    async fn transfer_repo(&self, owner: &str, name: &str, new_owner: &str) -> GhResult<()>;
}

/// Repository client backed by the gh CLI
pub struct GhCli {
    program: String,
}

impl GhCli {
    /// Create a client that spawns `gh` from `$PATH`
    pub fn new() -> Self {
        Self {
            program: "gh".to_string(),
        }
    }

    /// Create a client that spawns a custom gh binary (for testing)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn run(&self, args: &[&str]) -> GhResult<Output> {
        tracing::debug!("running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|source| GhError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GhError::CommandFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepoClient for GhCli {
    async fn list_repos(&self, account: &str) -> GhResult<Vec<Repo>> {
        let endpoint = format!("users/{account}/repos");
        let output = self
            .run(&["api", &endpoint, "--paginate", "--jq", LIST_JQ])
            .await?;

        let raw = String::from_utf8(output.stdout)?;
        parse_repo_stream(&raw)
    }

    async fn transfer_repo(&self, owner: &str, name: &str, new_owner: &str) -> GhResult<()> {
        let endpoint = format!("repos/{owner}/{name}/transfer");
        let field = format!("new_owner={new_owner}");
        self.run(&["api", &endpoint, "-f", &field]).await?;
        Ok(())
    }
}

/// Decode a newline-delimited stream of repository records.
///
/// A single malformed line fails the whole stream; partial listings are
/// worse than no listing when the caller is about to mutate remote state.
fn parse_repo_stream(raw: &str) -> GhResult<Vec<Repo>> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str::<Repo>(line).map_err(GhError::from))
        .collect()
}
