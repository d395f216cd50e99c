//! Batch clone execution.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::github::{CloneOps, GitHubClient, Repo};

/// Outcome for a single repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneOutcome {
    /// Cloned into the target directory.
    Cloned,
    /// A directory of the same name already existed; left untouched.
    Skipped,
    /// The clone operation failed.
    Failed(String),
}

/// Result for a single repository.
#[derive(Debug)]
pub struct RepoCloneResult {
    pub name: String,
    pub full_name: String,
    pub path: PathBuf,
    pub outcome: CloneOutcome,
}

/// Count summary over all processed repositories.
///
/// `cloned + skipped + failed` always equals the number of records
/// processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneSummary {
    pub cloned: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl CloneSummary {
    /// Total number of repositories processed.
    pub fn total(&self) -> usize {
        self.cloned + self.skipped + self.failed
    }
}

/// Result of a batch clone run.
#[derive(Debug)]
pub struct CloneReport {
    pub repo_results: Vec<RepoCloneResult>,
    pub summary: CloneSummary,
}

/// Clones an aggregated listing into a target directory, idempotently.
///
/// Repositories are processed strictly in listing order, one at a time. A
/// repository whose directory already exists under the target is skipped
/// without being touched; a clone failure is recorded and the batch
/// continues with the next repository.
pub struct CloneExecutor<'a> {
    client: &'a GitHubClient,
    target: PathBuf,
}

impl<'a> CloneExecutor<'a> {
    /// Create an executor cloning into `target` (created if absent).
    pub fn new(client: &'a GitHubClient, target: impl Into<PathBuf>) -> Self {
        Self {
            client,
            target: target.into(),
        }
    }

    /// The target directory.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Process the listing and return per-repository results plus counts.
    pub fn execute(&self, repos: &[Repo]) -> Result<CloneReport> {
        std::fs::create_dir_all(&self.target)?;

        let mut repo_results = Vec::with_capacity(repos.len());
        let mut summary = CloneSummary::default();

        for repo in repos {
            let path = self.target.join(&repo.name);

            let outcome = if path.exists() {
                debug!("{} already present, skipping", repo.full_name);
                summary.skipped += 1;
                CloneOutcome::Skipped
            } else {
                match self.client.clone_repo(repo, &self.target) {
                    Ok(_) => {
                        debug!("cloned {}", repo.full_name);
                        summary.cloned += 1;
                        CloneOutcome::Cloned
                    }
                    Err(e) => {
                        warn!("{}: {}", repo.full_name, e);
                        summary.failed += 1;
                        CloneOutcome::Failed(e.to_string())
                    }
                }
            };

            repo_results.push(RepoCloneResult {
                name: repo.name.clone(),
                full_name: repo.full_name.clone(),
                path,
                outcome,
            });
        }

        Ok(CloneReport {
            repo_results,
            summary,
        })
    }
}
