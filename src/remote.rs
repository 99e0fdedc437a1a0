//! Source browsing links derived from the repository's git remote.
//! The remote is read through [`RemoteUrlSource`] so the URL handling can be
//! exercised without a real repository.

use git2::Repository;
use log::debug;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use url::Url;

/// Provides the configured remote URL of a repository.
pub trait RemoteUrlSource {
    /// Returns the remote URL, or `None` when there is no usable remote.
    fn remote_url(&self) -> Option<String>;
}

/// Reads a named remote from the repository containing `repo_dir`.
#[derive(Debug)]
pub struct GitRemote {
    repo_dir: PathBuf,
    remote_name: String,
}

impl GitRemote {
    /// Creates a new GitRemote instance.
    pub fn new<P: AsRef<Path>, S: Into<String>>(repo_dir: P, remote_name: S) -> Self {
        Self { repo_dir: repo_dir.as_ref().to_path_buf(), remote_name: remote_name.into() }
    }

    fn lookup(&self) -> Result<Option<String>, git2::Error> {
        let repo = Repository::discover(&self.repo_dir)?;
        let remote = repo.find_remote(&self.remote_name)?;
        Ok(remote.url().map(str::to_string))
    }
}

impl RemoteUrlSource for GitRemote {
    fn remote_url(&self) -> Option<String> {
        match self.lookup() {
            Ok(url) => url,
            Err(e) => {
                debug!("Remote '{}' lookup failed: {}", self.remote_name, e.message());
                None
            }
        }
    }
}

/// A fixed remote URL; `None` behaves like a repository without remotes.
#[derive(Debug, Default)]
pub struct StaticRemote(pub Option<String>);

impl RemoteUrlSource for StaticRemote {
    fn remote_url(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Matches scp-like SSH remotes such as `git@github.com:org/repo.git`.
static SCP_LIKE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[^@/\s]+@)?([^:/\s]+):(.+)$").expect("valid regex")
});

/// Splits a git remote URL into host and repository path.
fn host_and_path(git_url: &str) -> Option<(String, String)> {
    // `host:path` also parses as a URL with `host` as its scheme.
    if let Ok(url) = Url::parse(git_url) {
        if !url.cannot_be_a_base() {
            return url.host_str().map(|host| (host.to_string(), url.path().to_string()));
        }
    }

    // Single-letter hosts are drive letters, not scp-like remotes.
    SCP_LIKE_RE
        .captures(git_url)
        .filter(|caps| caps[1].len() > 1)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
}

/// Converts a git remote URL into a source browsing prefix.
///
/// Works for SSH and HTTPS remotes of any hosting service:
/// `git@github.com:org/repo.git` and `https://github.com/org/repo` both map to
/// `https://github.com/org/repo/blob/<branch>`.
///
/// # Returns
/// * An empty string when the URL is empty or has no host and path
pub fn parse_source_base_url(git_url: &str, branch: &str) -> String {
    let git_url = git_url.trim();
    if git_url.is_empty() {
        return String::new();
    }

    let Some((host, path)) = host_and_path(git_url) else {
        debug!("Unrecognized remote URL '{git_url}'");
        return String::new();
    };

    let path = path.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path).trim_end_matches('/');
    if path.is_empty() {
        return String::new();
    }

    format!("https://{host}/{path}/blob/{branch}")
}

/// Resolves the source browsing prefix for this run.
///
/// Never fails: a missing repository, a missing remote or an unrecognized URL
/// all yield an empty string, which disables link rewriting.
pub fn resolve_source_base_url(remote: &dyn RemoteUrlSource, branch: &str) -> String {
    remote
        .remote_url()
        .map(|url| parse_source_base_url(&url, branch))
        .unwrap_or_default()
}
