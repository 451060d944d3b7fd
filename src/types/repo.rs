//! Repository record as reported by the forge

use serde::{Deserialize, Serialize};

/// One remote repository as known to this tool.
///
/// Decoded from a single JSON record of the `gh` listing output. The `fork`
/// flag is set by the forge and never changes for the lifetime of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    /// Repository name (without owner prefix)
    pub name: String,

    /// Full name including owner (e.g., "owner/repo")
    pub full_name: String,

    /// Whether the repository is a fork of another repository
    pub fork: bool,
}

impl Repo {
    /// Create a new repository record
    pub fn new(name: impl Into<String>, full_name: impl Into<String>, fork: bool) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            fork,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_new() {
        let repo = Repo::new("my-app", "alice/my-app", true);
        assert_eq!(repo.name, "my-app");
        assert_eq!(repo.full_name, "alice/my-app");
        assert!(repo.fork);
    }

    #[test]
    fn test_repo_decodes_wire_record() {
        let repo: Repo =
            serde_json::from_str(r#"{"name":"my-app","full_name":"alice/my-app","fork":false}"#)
                .unwrap();

        assert_eq!(repo, Repo::new("my-app", "alice/my-app", false));
    }

    #[test]
    fn test_repo_rejects_missing_fork_flag() {
        let result =
            serde_json::from_str::<Repo>(r#"{"name":"my-app","full_name":"alice/my-app"}"#);
        assert!(result.is_err());
    }
}
