//! Repository cloning operations.

use std::path::{Path, PathBuf};

use git2::Repository;

use crate::error::{HerdError, Result};
use crate::github::{GitHubClient, Repo};

/// Clone operations for GitHub repositories.
pub trait CloneOps {
    /// Clone a repository into the target directory.
    ///
    /// The local directory name is the repository's base name. Refuses to
    /// touch a directory that already exists; callers that want skip
    /// semantics check for existence first.
    ///
    /// Returns the path to the cloned repository.
    fn clone_repo(&self, repo: &Repo, target: &Path) -> Result<PathBuf>;
}

impl CloneOps for GitHubClient {
    fn clone_repo(&self, repo: &Repo, target: &Path) -> Result<PathBuf> {
        let repo_path = target.join(&repo.name);

        if repo_path.exists() {
            return Err(HerdError::CloneError {
                repo: repo.full_name.clone(),
                message: format!("Directory already exists: {}", repo_path.display()),
            });
        }

        let clone_url = self.authenticated_url(&repo.clone_url);

        Repository::clone(&clone_url, &repo_path).map_err(|e| HerdError::CloneError {
            repo: repo.full_name.clone(),
            message: format!("Clone failed: {}", e),
        })?;

        Ok(repo_path)
    }
}

impl GitHubClient {
    /// Embed the configured token in an HTTPS clone URL.
    ///
    /// Without a token, or for non-HTTPS URLs, the URL is left unchanged.
    pub(crate) fn authenticated_url(&self, url: &str) -> String {
        match &self.token {
            Some(token) if url.starts_with("https://") => {
                url.replacen("https://", &format!("https://{}@", token), 1)
            }
            _ => url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_embedded_in_https_urls() {
        let client = GitHubClient::new().with_token("ghp_example");
        assert_eq!(
            client.authenticated_url("https://github.com/octocat/spoon.git"),
            "https://ghp_example@github.com/octocat/spoon.git"
        );
    }

    #[test]
    fn url_is_unchanged_without_a_token() {
        let client = GitHubClient::new();
        assert_eq!(
            client.authenticated_url("https://github.com/octocat/spoon.git"),
            "https://github.com/octocat/spoon.git"
        );
    }

    #[test]
    fn non_https_urls_are_left_alone() {
        let client = GitHubClient::new().with_token("ghp_example");
        assert_eq!(
            client.authenticated_url("git@github.com:octocat/spoon.git"),
            "git@github.com:octocat/spoon.git"
        );
    }
}
