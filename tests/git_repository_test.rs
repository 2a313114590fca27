// Git2Repository tests against real on-disk repositories.

use std::fs;
use std::path::Path;

use git2::Repository as RawRepository;
use tempfile::TempDir;

use git_release::git::{Git2Repository, Repository};
use git_release::ReleaseError;

fn init_repo(dir: &Path) -> RawRepository {
    let repo = RawRepository::init(dir).unwrap();
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Release Tester").unwrap();
    config.set_str("user.email", "release@example.com").unwrap();
    repo
}

fn commit_file(repo: &RawRepository, name: &str, content: &str, message: &str) {
    let workdir = repo.workdir().unwrap();
    fs::write(workdir.join(name), content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let signature = repo.signature().unwrap();
    let parent = repo.head().ok().map(|head| head.peel_to_commit().unwrap());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .unwrap();
}

#[test]
fn test_list_tags_and_tag_exists() {
    let dir = TempDir::new().unwrap();
    let raw = init_repo(dir.path());
    commit_file(&raw, "main.go", "package main\n", "initial commit");
    let repo = Git2Repository::from_git2(raw);

    assert!(repo.list_tags().unwrap().is_empty());
    assert!(!repo.tag_exists("v1.0.0").unwrap());

    repo.create_annotated_tag("v1.0.0", "release v1.0.0").unwrap();

    assert!(repo.tag_exists("v1.0.0").unwrap());
    assert_eq!(repo.list_tags().unwrap(), vec!["v1.0.0".to_string()]);
}

#[test]
fn test_created_tag_is_annotated() {
    let dir = TempDir::new().unwrap();
    let raw = init_repo(dir.path());
    commit_file(&raw, "main.go", "package main\n", "initial commit");

    {
        let repo = Git2Repository::from_git2(RawRepository::open(dir.path()).unwrap());
        repo.create_annotated_tag("v0.1.0", "first release").unwrap();
    }

    // An annotated tag peels to a tag object carrying the message
    let reference = raw.find_reference("refs/tags/v0.1.0").unwrap();
    let tag = reference.peel_to_tag().unwrap();
    assert_eq!(tag.message().map(str::trim), Some("first release"));
}

#[test]
fn test_duplicate_tag_is_rejected() {
    let dir = TempDir::new().unwrap();
    let raw = init_repo(dir.path());
    commit_file(&raw, "main.go", "package main\n", "initial commit");
    let repo = Git2Repository::from_git2(raw);

    repo.create_annotated_tag("v1.0.0", "v1.0.0").unwrap();
    let err = repo.create_annotated_tag("v1.0.0", "again").unwrap_err();

    assert!(matches!(err, ReleaseError::TagExists(_)));
}

#[test]
fn test_path_has_changes_and_commit_path() {
    let dir = TempDir::new().unwrap();
    let raw = init_repo(dir.path());
    commit_file(&raw, "main.go", "version = 1.0.0\n", "initial commit");
    let repo = Git2Repository::from_git2(RawRepository::open(dir.path()).unwrap());

    assert!(!repo.path_has_changes("main.go").unwrap());

    fs::write(dir.path().join("main.go"), "version = 1.1.0\n").unwrap();
    assert!(repo.path_has_changes("main.go").unwrap());

    repo.commit_path("main.go", "release: bump version to 1.1.0")
        .unwrap();

    assert!(!repo.path_has_changes("main.go").unwrap());
    let head = raw.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.message(), Some("release: bump version to 1.1.0"));
}

#[test]
fn test_path_has_changes_ignores_other_files() {
    let dir = TempDir::new().unwrap();
    let raw = init_repo(dir.path());
    commit_file(&raw, "main.go", "package main\n", "initial commit");
    let repo = Git2Repository::from_git2(raw);

    fs::write(dir.path().join("README.md"), "docs\n").unwrap();

    assert!(!repo.path_has_changes("main.go").unwrap());
    assert!(repo.path_has_changes("README.md").unwrap());
}

#[test]
fn test_push_tag_to_local_bare_remote() {
    let work_dir = TempDir::new().unwrap();
    let remote_dir = TempDir::new().unwrap();
    let bare = RawRepository::init_bare(remote_dir.path()).unwrap();

    let raw = init_repo(work_dir.path());
    commit_file(&raw, "main.go", "package main\n", "initial commit");
    raw.remote("origin", remote_dir.path().to_str().unwrap())
        .unwrap();

    let repo = Git2Repository::from_git2(raw);
    repo.create_annotated_tag("v1.0.0", "v1.0.0").unwrap();
    repo.push_tag("origin", "v1.0.0").unwrap();

    assert!(bare.find_reference("refs/tags/v1.0.0").is_ok());
}

#[test]
fn test_push_tag_to_missing_remote_is_rejected() {
    let dir = TempDir::new().unwrap();
    let raw = init_repo(dir.path());
    commit_file(&raw, "main.go", "package main\n", "initial commit");
    let repo = Git2Repository::from_git2(raw);
    repo.create_annotated_tag("v1.0.0", "v1.0.0").unwrap();

    let err = repo.push_tag("nowhere", "v1.0.0").unwrap_err();

    assert!(matches!(err, ReleaseError::RemoteRejected { .. }));
}
