//! Mock RepoClient implementation for testing
//!
//! Configurable in-memory double for the gh CLI bridge, allowing tests to
//! simulate listings and transfer outcomes without spawning subprocesses.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::types::Repo;

use super::gh_client::{GhError, GhResult, RepoClient};

/// Record of a call made to the mock client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    ListRepos {
        account: String,
    },
    TransferRepo {
        owner: String,
        name: String,
        new_owner: String,
    },
}

/// A mock implementation of RepoClient for testing purposes
pub struct MockRepoClient {
    /// Repositories returned by list_repos
    repos: Vec<Repo>,
    /// When set, list_repos fails with this message instead
    list_error: Option<String>,
    /// Repository names whose transfer is rejected
    failing_transfers: Vec<String>,
    /// Track calls for verification
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

impl MockRepoClient {
    /// Create a mock with no repositories and no configured failures
    pub fn new() -> Self {
        Self {
            repos: Vec::new(),
            list_error: None,
            failing_transfers: Vec::new(),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configure repositories to return from list_repos
    pub fn with_repos(mut self, repos: Vec<Repo>) -> Self {
        self.repos = repos;
        self
    }

    /// Configure list_repos to fail
    pub fn with_list_error(mut self, message: impl Into<String>) -> Self {
        self.list_error = Some(message.into());
        self
    }

    /// Configure transfers of the named repository to fail
    pub fn with_failing_transfer(mut self, name: impl Into<String>) -> Self {
        self.failing_transfers.push(name.into());
        self
    }

    /// Get the call log for verification
    pub fn calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of transfer calls issued so far
    pub fn transfer_calls(&self) -> usize {
        self.call_log
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, MockCall::TransferRepo { .. }))
            .count()
    }

    fn log_call(&self, call: MockCall) {
        self.call_log.lock().unwrap().push(call);
    }
}

impl Default for MockRepoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepoClient for MockRepoClient {
    async fn list_repos(&self, account: &str) -> GhResult<Vec<Repo>> {
        self.log_call(MockCall::ListRepos {
            account: account.to_string(),
        });

        if let Some(ref message) = self.list_error {
            return Err(GhError::CommandFailed {
                status: 1,
                stderr: message.clone(),
            });
        }

        Ok(self.repos.clone())
    }

    async fn transfer_repo(&self, owner: &str, name: &str, new_owner: &str) -> GhResult<()> {
        self.log_call(MockCall::TransferRepo {
            owner: owner.to_string(),
            name: name.to_string(),
            new_owner: new_owner.to_string(),
        });

        if self.failing_transfers.iter().any(|f| f == name) {
            return Err(GhError::CommandFailed {
                status: 1,
                stderr: format!("transfer of {owner}/{name} rejected"),
            });
        }

        Ok(())
    }
}
