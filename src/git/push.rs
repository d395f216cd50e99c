//! Git remote and push operations with authentication.

use git2::{Cred, PushOptions, RemoteCallbacks};

use crate::error::{HerdError, Result};
use crate::git::{GitAuth, GitOps};

/// Remote and push operations for GitOps.
pub trait PushOps {
    /// Push a branch to a remote.
    fn push(&self, remote_name: &str, branch: &str) -> Result<()>;

    /// Push a branch and set it as upstream.
    fn push_with_upstream(&self, remote_name: &str, branch: &str) -> Result<()>;

    /// Point a remote at a URL, creating it if it does not exist.
    fn set_remote(&self, remote_name: &str, url: &str) -> Result<()>;

    /// Get the URL for a remote.
    fn remote_url(&self, remote_name: &str) -> Result<String>;

    /// Check if a remote exists.
    fn remote_exists(&self, remote_name: &str) -> bool;
}

impl PushOps for GitOps {
    fn push(&self, remote_name: &str, branch: &str) -> Result<()> {
        let mut remote =
            self.repo()
                .find_remote(remote_name)
                .map_err(|_| HerdError::PushError {
                    message: format!("Remote '{}' not found", remote_name),
                })?;

        let refspec = format!("refs/heads/{}:refs/heads/{}", branch, branch);

        let mut callbacks = RemoteCallbacks::new();
        self.setup_auth_callbacks(&mut callbacks);

        let mut push_options = PushOptions::new();
        push_options.remote_callbacks(callbacks);

        remote
            .push(&[&refspec], Some(&mut push_options))
            .map_err(|e| HerdError::PushError {
                message: format!("Push failed: {}", e),
            })?;

        Ok(())
    }

    fn push_with_upstream(&self, remote_name: &str, branch: &str) -> Result<()> {
        self.push(remote_name, branch)?;

        let mut local_branch = self.repo().find_branch(branch, git2::BranchType::Local)?;
        let upstream_name = format!("{}/{}", remote_name, branch);
        local_branch.set_upstream(Some(&upstream_name))?;

        Ok(())
    }

    fn set_remote(&self, remote_name: &str, url: &str) -> Result<()> {
        if self.repo().find_remote(remote_name).is_ok() {
            self.repo().remote_set_url(remote_name, url)?;
        } else {
            self.repo().remote(remote_name, url)?;
        }
        Ok(())
    }

    fn remote_url(&self, remote_name: &str) -> Result<String> {
        let remote = self.repo().find_remote(remote_name)?;
        remote.url().map(String::from).ok_or_else(|| {
            HerdError::InvalidConfig(format!("Remote '{}' has no URL", remote_name))
        })
    }

    fn remote_exists(&self, remote_name: &str) -> bool {
        self.repo().find_remote(remote_name).is_ok()
    }
}

impl GitOps {
    fn setup_auth_callbacks(&self, callbacks: &mut RemoteCallbacks<'_>) {
        let auth = self.auth().clone();

        callbacks.credentials(move |_url, username_from_url, allowed_types| {
            match &auth {
                GitAuth::SshKey {
                    private_key_path,
                    passphrase,
                } => {
                    let username = username_from_url.unwrap_or("git");
                    Cred::ssh_key(username, None, private_key_path, passphrase.as_deref())
                }
                GitAuth::Token(token) => {
                    // For HTTPS URLs with token auth
                    Cred::userpass_plaintext(token, "")
                }
                GitAuth::None => {
                    // Try SSH agent first, then default
                    if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                        Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
                    } else {
                        Cred::default()
                    }
                }
            }
        });
    }
}
