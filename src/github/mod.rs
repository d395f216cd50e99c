//! GitHub API integration.
//!
//! This module provides a client for interacting with the GitHub API to:
//! - List every public repository of a user or organization (paginated)
//! - Clone repositories
//! - Create repositories for publishing local projects
//!
//! # Example
//!
//! ```rust,no_run
//! use repoherd::github::{AccountName, GitHubClient, RepoOps};
//!
//! let client = GitHubClient::from_env();
//! let account = AccountName::parse("octocat")?;
//!
//! for repo in client.list_repos(&account)? {
//!     println!("{}: {}", repo.name, repo.clone_url);
//! }
//! # Ok::<(), repoherd::error::HerdError>(())
//! ```

mod account;
mod client;
mod clone;
mod create;
mod repos;

pub use account::{ACCOUNT_PATTERN, AccountName, MAX_ACCOUNT_LEN};
pub use client::{API_BASE_ENV, DEFAULT_API_BASE, GitHubClient, TOKEN_ENV};
pub use clone::CloneOps;
pub use create::{CreateOps, CreateRepo};
pub use repos::{MAX_PAGES, REPOS_PER_PAGE, Repo, RepoOps, RepoPages};
