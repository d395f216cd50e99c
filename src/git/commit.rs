//! Git staging and commit operations.

use git2::{IndexAddOption, Signature};

use crate::error::Result;
use crate::git::GitOps;

/// Commit operations for GitOps.
pub trait CommitOps {
    /// Stage all changes (new, modified, deleted files).
    fn stage_all(&self) -> Result<()>;

    /// Create a commit with the staged changes.
    ///
    /// On an unborn HEAD this creates the root commit.
    fn commit(&self, message: &str) -> Result<git2::Oid>;

    /// Whether the repository has at least one commit.
    fn has_commits(&self) -> bool;

    /// Check if there are staged changes.
    ///
    /// On an unborn HEAD, any index entry counts as staged.
    fn has_staged_changes(&self) -> Result<bool>;
}

impl CommitOps for GitOps {
    fn stage_all(&self) -> Result<()> {
        let mut index = self.repo().index()?;

        index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
        // Update the index for deleted files
        index.update_all(["*"].iter(), None)?;

        index.write()?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<git2::Oid> {
        let signature = self.signature()?;

        let mut index = self.repo().index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo().find_tree(tree_id)?;

        let parent = match self.repo().head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(_) => None,
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        let oid = self.repo().commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        Ok(oid)
    }

    fn has_commits(&self) -> bool {
        self.repo().head().is_ok()
    }

    fn has_staged_changes(&self) -> Result<bool> {
        let head_tree = match self.repo().head() {
            Ok(head) => Some(head.peel_to_tree()?),
            Err(_) => None,
        };

        let diff = self
            .repo()
            .diff_tree_to_index(head_tree.as_ref(), None, None)?;
        Ok(diff.deltas().count() > 0)
    }
}

impl GitOps {
    fn signature(&self) -> Result<Signature<'_>> {
        self.repo().signature().or_else(|_| {
            // Fallback signature when user.name/user.email are unset
            Signature::now("repoherd", "repoherd@localhost").map_err(|e| e.into())
        })
    }
}
