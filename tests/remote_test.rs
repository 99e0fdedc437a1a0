use git2::Repository;
use refdocs::remote::{
    parse_source_base_url, resolve_source_base_url, GitRemote, RemoteUrlSource, StaticRemote,
};
use tempfile::TempDir;

const EXPECTED: &str = "https://github.com/org/repo/blob/main";

#[test]
fn test_ssh_remotes() {
    assert_eq!(parse_source_base_url("git@github.com:org/repo.git", "main"), EXPECTED);
    assert_eq!(parse_source_base_url("git@github.com:org/repo", "main"), EXPECTED);
    assert_eq!(parse_source_base_url("ssh://git@github.com/org/repo.git", "main"), EXPECTED);
}

#[test]
fn test_https_remotes() {
    assert_eq!(parse_source_base_url("https://github.com/org/repo.git", "main"), EXPECTED);
    assert_eq!(parse_source_base_url("https://github.com/org/repo", "main"), EXPECTED);
    assert_eq!(parse_source_base_url("https://github.com/org/repo/", "main"), EXPECTED);
    assert_eq!(
        parse_source_base_url("https://user@gitlab.example.com/group/sub/project.git\n", "dev"),
        "https://gitlab.example.com/group/sub/project/blob/dev"
    );
}

#[test]
fn test_only_trailing_git_suffix_is_removed() {
    assert_eq!(
        parse_source_base_url("git@github.com:org/my.github.io.git", "main"),
        "https://github.com/org/my.github.io/blob/main"
    );
}

#[test]
fn test_unusable_remotes() {
    assert_eq!(parse_source_base_url("", "main"), "");
    assert_eq!(parse_source_base_url("   ", "main"), "");
    assert_eq!(parse_source_base_url("/srv/git/repo.git", "main"), "");
    assert_eq!(parse_source_base_url("file:///srv/git/repo.git", "main"), "");
    assert_eq!(parse_source_base_url("https://github.com/", "main"), "");
}

#[test]
fn test_resolve_without_remote() {
    assert_eq!(resolve_source_base_url(&StaticRemote(None), "main"), "");
}

#[test]
fn test_resolve_with_remote() {
    let remote = StaticRemote(Some("git@github.com:org/repo.git".to_string()));
    assert_eq!(resolve_source_base_url(&remote, "main"), EXPECTED);
}

#[test]
fn test_git_remote_reads_repository_config() {
    let temp_dir = TempDir::new().unwrap();
    let repo = Repository::init(temp_dir.path()).unwrap();
    repo.remote("origin", "https://github.com/org/repo.git").unwrap();

    let nested = temp_dir.path().join("src").join("pkg");
    std::fs::create_dir_all(&nested).unwrap();

    let remote = GitRemote::new(&nested, "origin");
    assert_eq!(remote.remote_url().as_deref(), Some("https://github.com/org/repo.git"));
    assert_eq!(resolve_source_base_url(&remote, "main"), EXPECTED);
}

#[test]
fn test_git_remote_missing_remote() {
    let temp_dir = TempDir::new().unwrap();
    let repo = Repository::init(temp_dir.path()).unwrap();
    repo.remote("upstream", "https://github.com/org/repo.git").unwrap();

    let remote = GitRemote::new(temp_dir.path(), "origin");
    assert_eq!(remote.remote_url(), None);
    assert_eq!(resolve_source_base_url(&remote, "main"), "");
}
