//! Integration tests for the batch clone executor, using local git
//! repositories as remotes.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use repoherd::prelude::*;
use tempfile::TempDir;

/// Build a Repo record whose clone URL is a local path.
fn repo_record(name: &str, clone_url: &str) -> Repo {
    Repo {
        id: 0,
        name: name.to_string(),
        full_name: format!("local/{name}"),
        clone_url: clone_url.to_string(),
        ssh_url: clone_url.to_string(),
        default_branch: "master".to_string(),
        archived: false,
        fork: false,
        description: None,
        is_private: false,
    }
}

/// Create a real git repository with one commit under `parent`.
fn make_origin(parent: &Path, name: &str) -> Repo {
    let path = parent.join(name);
    let repo = git2::Repository::init(&path).unwrap();

    File::create(path.join("README.md"))
        .unwrap()
        .write_all(format!("# {name}\n").as_bytes())
        .unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new("README.md")).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = git2::Signature::now("tester", "tester@example.com").unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .unwrap();

    repo_record(name, path.to_str().unwrap())
}

#[test]
fn clones_everything_into_an_empty_target() {
    let remotes = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    let repos: Vec<Repo> = ["alpha", "beta", "gamma"]
        .iter()
        .map(|name| make_origin(remotes.path(), name))
        .collect();

    let client = GitHubClient::new();
    let report = CloneExecutor::new(&client, target.path())
        .execute(&repos)
        .unwrap();

    assert_eq!(
        report.summary,
        CloneSummary {
            cloned: 3,
            skipped: 0,
            failed: 0
        }
    );
    assert_eq!(report.summary.total(), repos.len());

    for repo in &repos {
        let clone = target.path().join(&repo.name);
        assert!(clone.join(".git").exists(), "{} was not cloned", repo.name);
        assert!(clone.join("README.md").exists());
    }

    // Results come back in listing order
    let names: Vec<&str> = report
        .repo_results
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    assert!(
        report
            .repo_results
            .iter()
            .all(|r| r.outcome == CloneOutcome::Cloned)
    );
}

#[test]
fn rerun_skips_everything() {
    let remotes = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    let repos: Vec<Repo> = ["alpha", "beta"]
        .iter()
        .map(|name| make_origin(remotes.path(), name))
        .collect();

    let client = GitHubClient::new();
    let executor = CloneExecutor::new(&client, target.path());

    let first = executor.execute(&repos).unwrap();
    assert_eq!(first.summary.cloned, 2);

    let second = executor.execute(&repos).unwrap();
    assert_eq!(
        second.summary,
        CloneSummary {
            cloned: 0,
            skipped: 2,
            failed: 0
        }
    );
    assert_eq!(second.summary.skipped, second.summary.total());
}

#[test]
fn existing_directory_is_never_cloned_over() {
    let remotes = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    let repos: Vec<Repo> = ["alpha", "beta", "gamma"]
        .iter()
        .map(|name| make_origin(remotes.path(), name))
        .collect();

    // Pre-existing plain directory shadowing one repository
    let existing = target.path().join("beta");
    std::fs::create_dir_all(&existing).unwrap();
    File::create(existing.join("sentinel.txt"))
        .unwrap()
        .write_all(b"do not touch\n")
        .unwrap();

    let client = GitHubClient::new();
    let report = CloneExecutor::new(&client, target.path())
        .execute(&repos)
        .unwrap();

    assert_eq!(
        report.summary,
        CloneSummary {
            cloned: 2,
            skipped: 1,
            failed: 0
        }
    );
    assert_eq!(report.repo_results[1].outcome, CloneOutcome::Skipped);

    // The existing directory was left exactly as it was
    assert!(existing.join("sentinel.txt").exists());
    assert!(!existing.join(".git").exists());
}

#[test]
fn clone_failure_does_not_abort_the_batch() {
    let remotes = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    let broken = remotes.path().join("does-not-exist");
    let repos = vec![
        make_origin(remotes.path(), "alpha"),
        repo_record("broken", broken.to_str().unwrap()),
        make_origin(remotes.path(), "gamma"),
    ];

    let client = GitHubClient::new();
    let report = CloneExecutor::new(&client, target.path())
        .execute(&repos)
        .unwrap();

    assert_eq!(
        report.summary,
        CloneSummary {
            cloned: 2,
            skipped: 0,
            failed: 1
        }
    );
    assert_eq!(report.summary.total(), 3);

    assert!(matches!(
        report.repo_results[1].outcome,
        CloneOutcome::Failed(_)
    ));
    // The repository after the failure was still processed
    assert_eq!(report.repo_results[2].outcome, CloneOutcome::Cloned);
    assert!(target.path().join("gamma").join(".git").exists());
}

#[test]
fn missing_target_directory_is_created() {
    let remotes = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    let target = scratch.path().join("nested").join("clones");

    let repos = vec![make_origin(remotes.path(), "alpha")];

    let client = GitHubClient::new();
    let report = CloneExecutor::new(&client, &target).execute(&repos).unwrap();

    assert_eq!(report.summary.cloned, 1);
    assert!(target.join("alpha").join(".git").exists());
}
