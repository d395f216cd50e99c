//! Git authentication configuration.

use std::path::PathBuf;

use crate::error::{HerdError, Result};

/// Authentication method for git remote operations.
#[derive(Debug, Clone, Default)]
pub enum GitAuth {
    /// SSH key authentication.
    SshKey {
        private_key_path: PathBuf,
        passphrase: Option<String>,
    },
    /// Token-based authentication (for HTTPS).
    Token(String),
    /// No authentication (public repos only).
    #[default]
    None,
}

impl GitAuth {
    /// SSH key auth from the default location (~/.ssh/id_ed25519, falling
    /// back to ~/.ssh/id_rsa).
    pub fn ssh_default() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| HerdError::GitAuth {
            message: "Could not determine home directory".into(),
        })?;

        let ed25519_path = home.join(".ssh").join("id_ed25519");
        if ed25519_path.exists() {
            return Ok(Self::SshKey {
                private_key_path: ed25519_path,
                passphrase: None,
            });
        }

        let rsa_path = home.join(".ssh").join("id_rsa");
        if rsa_path.exists() {
            return Ok(Self::SshKey {
                private_key_path: rsa_path,
                passphrase: None,
            });
        }

        Err(HerdError::GitAuth {
            message: "No SSH key found at ~/.ssh/id_ed25519 or ~/.ssh/id_rsa".into(),
        })
    }

    /// SSH key auth with a specific key path.
    pub fn ssh_key(path: impl Into<PathBuf>) -> Self {
        Self::SshKey {
            private_key_path: path.into(),
            passphrase: None,
        }
    }

    /// Token-based auth (typically for GitHub HTTPS URLs).
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Token auth from an environment variable.
    pub fn from_env(var_name: &str) -> Result<Self> {
        let token = std::env::var(var_name).map_err(|_| HerdError::GitAuth {
            message: format!("Environment variable {} not set", var_name),
        })?;
        Ok(Self::Token(token))
    }

    /// Token auth from the GITHUB_TOKEN environment variable.
    pub fn github_token() -> Result<Self> {
        Self::from_env(crate::github::TOKEN_ENV)
    }
}
