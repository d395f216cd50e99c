//! Remote repository creation.

use regex::Regex;
use serde::Serialize;

use crate::error::{HerdError, Result};
use crate::github::{GitHubClient, Repo};

/// Pattern for valid repository names.
pub const REPO_NAME_PATTERN: &str = r"^[A-Za-z0-9._-]+$";

/// Request body for creating a repository.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRepo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub private: bool,
}

impl CreateRepo {
    /// Create a request for a public repository with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            private: false,
        }
    }

    /// Set the repository description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Create the repository as private.
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }
}

/// Repository creation operations.
pub trait CreateOps {
    /// Create a repository for the authenticated user.
    ///
    /// Requires a token; the name is validated before any network call.
    fn create_repo(&self, repo: &CreateRepo) -> Result<Repo>;
}

impl CreateOps for GitHubClient {
    fn create_repo(&self, repo: &CreateRepo) -> Result<Repo> {
        let pattern = Regex::new(REPO_NAME_PATTERN)?;
        if !pattern.is_match(&repo.name) {
            return Err(HerdError::CreateError {
                message: format!(
                    "Invalid repository name '{}': only alphanumerics, '.', '_' and '-' are allowed",
                    repo.name
                ),
            });
        }

        if self.token().is_none() {
            return Err(HerdError::GitAuth {
                message: format!(
                    "Creating a repository requires a token; set {}",
                    crate::github::TOKEN_ENV
                ),
            });
        }

        self.post("/user/repos", repo).map_err(|e| match e {
            HerdError::Api { message } => HerdError::CreateError { message },
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_description_and_visibility() {
        let request = CreateRepo::new("my-tool")
            .description("A tool")
            .private();

        assert_eq!(request.name, "my-tool");
        assert_eq!(request.description.as_deref(), Some("A tool"));
        assert!(request.private);
    }

    #[test]
    fn description_is_omitted_from_json_when_unset() {
        let json = serde_json::to_string(&CreateRepo::new("my-tool")).unwrap();
        assert!(!json.contains("description"));
        assert!(json.contains(r#""private":false"#));
    }

    #[test]
    fn invalid_names_are_rejected_before_any_request() {
        let client = GitHubClient::new().with_token("ghp_example");
        let result = client.create_repo(&CreateRepo::new("bad name"));
        assert!(matches!(result, Err(HerdError::CreateError { .. })));
    }

    #[test]
    fn creating_without_a_token_fails() {
        let client = GitHubClient::new();
        let result = client.create_repo(&CreateRepo::new("my-tool"));
        assert!(matches!(result, Err(HerdError::GitAuth { .. })));
    }
}
