//! GitHub repository listing with pagination.

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::github::{AccountName, GitHubClient};

/// Page size requested from the listing endpoint.
pub const REPOS_PER_PAGE: usize = 100;

/// Hard ceiling on pages fetched per run, bounding worst-case work against
/// runaway pagination or API misbehavior.
pub const MAX_PAGES: u32 = 10;

/// Repository information from the GitHub API.
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub clone_url: String,
    pub ssh_url: String,
    pub default_branch: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub fork: bool,
    pub description: Option<String>,
    #[serde(rename = "private")]
    pub is_private: bool,
}

/// A source of repository listing pages.
///
/// This is the transport seam: the pagination loop in [`RepoOps`] is
/// written against it, so tests can drive the loop with canned pages.
pub trait RepoPages {
    /// Fetch one page (1-based) of the account's repositories.
    fn repo_page(&self, account: &AccountName, page: u32) -> Result<Vec<Repo>>;
}

impl RepoPages for GitHubClient {
    fn repo_page(&self, account: &AccountName, page: u32) -> Result<Vec<Repo>> {
        // The /users endpoint serves both users and organizations.
        let endpoint = format!(
            "/users/{}/repos?per_page={}&page={}",
            account, REPOS_PER_PAGE, page
        );
        self.get(&endpoint)
    }
}

/// Repository listing operations.
pub trait RepoOps {
    /// Fetch the complete repository listing for an account.
    ///
    /// Pages are requested sequentially starting at 1. Any page failure
    /// aborts the whole fetch: a partial listing would silently under-report
    /// the account. An empty or short page (fewer than [`REPOS_PER_PAGE`]
    /// records) is terminal, and at most [`MAX_PAGES`] pages are fetched
    /// regardless of what the server reports.
    ///
    /// Records are returned in the API's natural order. An empty `Vec` means
    /// the account has no public repositories, distinct from an error.
    fn list_repos(&self, account: &AccountName) -> Result<Vec<Repo>>;
}

impl<S: RepoPages> RepoOps for S {
    fn list_repos(&self, account: &AccountName) -> Result<Vec<Repo>> {
        let mut all_repos = Vec::new();

        for page in 1..=MAX_PAGES {
            let repos = self.repo_page(account, page)?;
            debug!("page {}: {} repositories", page, repos.len());

            let terminal = repos.len() < REPOS_PER_PAGE;
            all_repos.extend(repos);

            if terminal {
                break;
            }
        }

        Ok(all_repos)
    }
}
