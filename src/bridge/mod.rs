//! Bridges to external services
//!
//! The remote forge is reached exclusively through the gh CLI; this module
//! owns the subprocess plumbing and the `RepoClient` seam the batch logic
//! is written against.

pub mod gh_client;
pub mod mock_client;

pub use gh_client::{GhCli, GhError, GhResult, RepoClient};
pub use mock_client::{MockCall, MockRepoClient};
