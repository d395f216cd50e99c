//! Local git operations for publishing projects.
//!
//! Wraps git2 with the small set of write operations the publish workflow
//! needs: init-or-open, staging and committing (including the first commit
//! of a brand-new project), remote wiring, and authenticated pushes.
//!
//! # Example
//!
//! ```rust,no_run
//! use repoherd::git::{CommitOps, GitAuth, GitOps, PushOps};
//!
//! let git = GitOps::open_or_init("./my-project")?
//!     .with_auth(GitAuth::github_token()?);
//!
//! git.stage_all()?;
//! git.commit("Initial commit")?;
//! git.set_remote("origin", "https://github.com/me/my-project.git")?;
//! git.push_with_upstream("origin", "main")?;
//! # Ok::<(), repoherd::error::HerdError>(())
//! ```

mod auth;
mod commit;
mod push;

pub use auth::GitAuth;
pub use commit::CommitOps;
pub use push::PushOps;

use std::path::Path;

use git2::Repository;

use crate::error::{HerdError, Result};

/// Git operations wrapper with write capabilities.
pub struct GitOps {
    repo: Repository,
    auth: GitAuth,
}

impl GitOps {
    /// Open an existing repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let repo = Repository::open(path.as_ref())?;
        Ok(Self {
            repo,
            auth: GitAuth::None,
        })
    }

    /// Initialize a new repository.
    pub fn init(path: impl AsRef<Path>) -> Result<Self> {
        let repo = Repository::init(path.as_ref())?;
        Ok(Self {
            repo,
            auth: GitAuth::None,
        })
    }

    /// Open the repository at `path`, initializing one if none exists.
    pub fn open_or_init(path: impl AsRef<Path>) -> Result<Self> {
        match Repository::open(path.as_ref()) {
            Ok(repo) => Ok(Self {
                repo,
                auth: GitAuth::None,
            }),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Self::init(path),
            Err(e) => Err(e.into()),
        }
    }

    /// Set authentication method for remote operations.
    pub fn with_auth(mut self, auth: GitAuth) -> Self {
        self.auth = auth;
        self
    }

    /// Get a reference to the underlying git2::Repository.
    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    /// Get the repository's working directory path.
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Get the current authentication configuration.
    pub fn auth(&self) -> &GitAuth {
        &self.auth
    }

    /// Name of the branch HEAD points at.
    ///
    /// Works on unborn HEADs too (a freshly initialized repository), by
    /// reading the symbolic target.
    pub fn head_branch(&self) -> Result<String> {
        if let Ok(head) = self.repo.head()
            && let Some(name) = head.shorthand()
        {
            return Ok(name.to_string());
        }

        let head = self.repo.find_reference("HEAD")?;
        let target = head.symbolic_target().ok_or_else(|| {
            HerdError::InvalidConfig("HEAD does not point at a branch".into())
        })?;
        Ok(target
            .strip_prefix("refs/heads/")
            .unwrap_or(target)
            .to_string())
    }
}
