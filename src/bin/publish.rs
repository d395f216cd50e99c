//! CLI for creating a GitHub repository and pushing a local project to it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use repoherd::prelude::*;

#[derive(Parser)]
#[command(name = "repoherd-publish")]
#[command(
    version,
    about = "Create a GitHub repository and push a local project to it",
    long_about = None
)]
struct Cli {
    /// Name for the new repository
    name: String,

    /// Local project directory (~ is expanded)
    #[arg(default_value = ".")]
    path: String,

    /// Repository description
    #[arg(short, long)]
    description: Option<String>,

    /// Create the repository as private
    #[arg(long)]
    private: bool,

    /// Push over SSH instead of HTTPS
    #[arg(long)]
    ssh: bool,

    /// SSH private key to use (defaults to ~/.ssh/id_ed25519 or ~/.ssh/id_rsa)
    #[arg(long, value_name = "PATH", requires = "ssh")]
    ssh_key: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let client = GitHubClient::from_env();
    let auth = if cli.ssh {
        match cli.ssh_key {
            Some(path) => GitAuth::ssh_key(path),
            None => GitAuth::ssh_default()?,
        }
    } else {
        GitAuth::github_token()?
    };

    let path = expand_tilde(&cli.path)?;

    let mut options = PublishOptions::new(&cli.name);
    if let Some(description) = cli.description {
        options = options.description(description);
    }
    if cli.private {
        options = options.private();
    }
    if cli.ssh {
        options = options.protocol(RemoteProtocol::Ssh);
    }

    let outcome = publish(&client, auth, &path, &options)?;

    let url = match options.protocol {
        RemoteProtocol::Https => &outcome.repo.clone_url,
        RemoteProtocol::Ssh => &outcome.repo.ssh_url,
    };
    println!(
        "Published {} to {} ({})",
        outcome.branch, outcome.repo.full_name, url
    );

    Ok(())
}
