//! Publish a local project to a freshly created remote repository.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{HerdError, Result};
use crate::git::{CommitOps, GitAuth, GitOps, PushOps};
use crate::github::{CreateOps, CreateRepo, GitHubClient, Repo};

/// Remote name the published project is wired to.
pub const DEFAULT_REMOTE: &str = "origin";

/// Message used when the project has no commits yet.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Which URL of the created repository the remote points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemoteProtocol {
    /// HTTPS clone URL, pushed with token credentials.
    #[default]
    Https,
    /// SSH URL, pushed with key credentials.
    Ssh,
}

/// Options for publishing a local project.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    pub name: String,
    pub description: Option<String>,
    pub private: bool,
    pub protocol: RemoteProtocol,
    pub remote_name: String,
}

impl PublishOptions {
    /// Options for a public repository with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            private: false,
            protocol: RemoteProtocol::default(),
            remote_name: DEFAULT_REMOTE.into(),
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

    /// Choose the remote protocol.
    pub fn protocol(mut self, protocol: RemoteProtocol) -> Self {
        self.protocol = protocol;
        self
    }
}

/// Result of a publish run.
#[derive(Debug)]
pub struct PublishOutcome {
    /// The repository created on the remote.
    pub repo: Repo,
    /// The branch that was pushed.
    pub branch: String,
    /// The local project directory.
    pub path: PathBuf,
}

/// Create a remote repository and push the local project at `path` to it.
///
/// The project directory is initialized as a git repository if it is not
/// one already. A project with no commits gets everything staged and an
/// initial commit created; an empty project is an error. The head branch is
/// pushed with upstream tracking over the chosen protocol.
pub fn publish(
    client: &GitHubClient,
    auth: GitAuth,
    path: &Path,
    options: &PublishOptions,
) -> Result<PublishOutcome> {
    let mut request = CreateRepo::new(&options.name);
    if let Some(description) = &options.description {
        request = request.description(description);
    }
    if options.private {
        request = request.private();
    }

    let created = client.create_repo(&request)?;
    info!("created {}", created.full_name);

    let git = GitOps::open_or_init(path)?.with_auth(auth);

    if !git.has_commits() {
        git.stage_all()?;
        if !git.has_staged_changes()? {
            return Err(HerdError::PushError {
                message: format!(
                    "Nothing to publish: {} has no commits and no files to commit",
                    path.display()
                ),
            });
        }
        git.commit(INITIAL_COMMIT_MESSAGE)?;
    }

    let url = match options.protocol {
        RemoteProtocol::Https => &created.clone_url,
        RemoteProtocol::Ssh => &created.ssh_url,
    };
    git.set_remote(&options.remote_name, url)?;

    let branch = git.head_branch()?;
    git.push_with_upstream(&options.remote_name, &branch)?;
    info!("pushed {} to {}", branch, created.full_name);

    Ok(PublishOutcome {
        repo: created,
        branch,
        path: path.to_path_buf(),
    })
}
