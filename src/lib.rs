//! Forkshift - Fork repository transfer tool
//!
//! Forkshift moves every fork owned by one GitHub account to another account,
//! driving the gh CLI for all remote operations and asking the operator for
//! confirmation before anything changes hands.

pub mod bridge;
pub mod commands;
pub mod types;

// Re-exports for convenience
pub use bridge::{GhCli, GhError, GhResult, MockRepoClient, RepoClient};
pub use commands::{
    confirm, filter_forks, is_affirmative, transfer_forks, BatchReport, TransferOutcome,
    TransferStatus,
};
pub use types::Repo;
