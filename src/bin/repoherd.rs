//! CLI for bulk-cloning a GitHub account's public repositories.

use anyhow::Result;
use clap::Parser;
use repoherd::prelude::*;

#[derive(Parser)]
#[command(name = "repoherd")]
#[command(
    version,
    about = "Clone every public repository owned by a GitHub user or organization",
    long_about = None
)]
struct Cli {
    /// GitHub user or organization name
    account: String,

    /// Directory to clone into (defaults to ~/github-repos, ~ is expanded)
    target: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let account = AccountName::parse(&cli.account)?;
    let target = match &cli.target {
        Some(path) => expand_tilde(path)?,
        None => default_target_dir()?,
    };

    let client = GitHubClient::from_env();
    let repos = client.list_repos(&account)?;

    if repos.is_empty() {
        println!("{} has no public repositories", account);
        return Ok(());
    }

    println!("Found {} repositories for {}", repos.len(), account);
    println!("Cloning into {}", target.display());

    let report = CloneExecutor::new(&client, &target).execute(&repos)?;

    for result in &report.repo_results {
        match &result.outcome {
            CloneOutcome::Cloned => println!("  cloned   {}", result.name),
            CloneOutcome::Skipped => println!("  skipped  {} (already present)", result.name),
            CloneOutcome::Failed(reason) => println!("  failed   {}: {}", result.name, reason),
        }
    }

    let summary = &report.summary;
    println!(
        "\n{} cloned, {} skipped, {} failed ({} total)",
        summary.cloned,
        summary.skipped,
        summary.failed,
        summary.total()
    );

    if summary.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
