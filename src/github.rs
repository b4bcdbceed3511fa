//! GitHub REST API listing source.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, ACCEPT};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::FetchError;
use crate::repo::RepoRef;
use crate::source::{Listing, PathSource};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("repotree/", env!("CARGO_PKG_VERSION"));

/// Tried in order when the default branch can't be resolved.
const FALLBACK_BRANCHES: &[&str] = &["main", "master"];

/// Longest error body carried into an `Api` error.
const MAX_ERROR_BODY: usize = 200;

/// Connection settings for [`GitHubSource`].
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// API base URL (GitHub Enterprise installs use `https://HOST/api/v3`).
    pub api_url: String,
    /// Personal access token, sent as a bearer token.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Return a partial listing instead of failing when the provider truncates.
    pub allow_truncated: bool,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(30),
            allow_truncated: false,
        }
    }
}

#[derive(Deserialize)]
struct RepoInfo {
    #[serde(default)]
    default_branch: Option<String>,
}

#[derive(Deserialize)]
struct BranchInfo {
    commit: BranchCommit,
}

#[derive(Deserialize)]
struct BranchCommit {
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    tree: TreeRef,
}

#[derive(Deserialize)]
struct TreeRef {
    sha: String,
}

#[derive(Deserialize)]
struct TreeResponse {
    tree: Vec<TreeItem>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Deserialize)]
struct TreeItem {
    path: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Fetches the recursive file listing of one repository.
pub struct GitHubSource {
    http: Client,
    base: Url,
    target: RepoRef,
    allow_truncated: bool,
    token: Option<String>,
}

impl GitHubSource {
    pub fn new(target: RepoRef, config: GitHubConfig) -> Result<Self, FetchError> {
        let base = Url::parse(&config.api_url)
            .map_err(|e| FetchError::invalid_input(&config.api_url, e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(FetchError::invalid_input(&config.api_url, "not a base URL"));
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base,
            target,
            allow_truncated: config.allow_truncated,
            token: config.token,
        })
    }

    /// `{base}/repos/{owner}/{name}/{extra...}` with each segment escaped.
    fn endpoint(&self, extra: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend([
                    "repos",
                    self.target.id.owner.as_str(),
                    self.target.id.name.as_str(),
                ])
                .extend(extra);
        }
        url
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        tracing::debug!(%url, "GET");

        let mut request = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status();
        if status.is_success() {
            let body = response.text()?;
            return Ok(serde_json::from_str(&body)?);
        }

        let headers = response.headers().clone();
        let body = response.text().unwrap_or_default();
        Err(classify_failure(status, &headers, &body, url.path()))
    }

    /// Branches to try, most specific first.
    fn branch_candidates(&self) -> Result<Vec<String>, FetchError> {
        if let Some(branch) = &self.target.branch {
            return Ok(vec![branch.clone()]);
        }

        let info: RepoInfo = self.get_json(self.endpoint(&[]))?;
        let mut candidates: Vec<String> = info.default_branch.into_iter().collect();
        for fallback in FALLBACK_BRANCHES {
            if !candidates.iter().any(|b| b == fallback) {
                candidates.push((*fallback).to_string());
            }
        }
        Ok(candidates)
    }

    fn tree_sha(&self, branch: &str) -> Result<String, FetchError> {
        let info: BranchInfo = self.get_json(self.endpoint(&["branches", branch]))?;
        Ok(info.commit.commit.tree.sha)
    }

    fn fetch_tree(&self, branch: &str, sha: &str) -> Result<Listing, FetchError> {
        let mut url = self.endpoint(&["git", "trees", sha]);
        url.query_pairs_mut().append_pair("recursive", "1");

        let response: TreeResponse = self.get_json(url)?;
        let paths: Vec<String> = response.tree.into_iter().map(|item| item.path).collect();

        if response.truncated {
            if !self.allow_truncated {
                return Err(FetchError::Truncated(paths.len()));
            }
            tracing::warn!(
                entries = paths.len(),
                "listing was truncated by the provider; the tree is incomplete"
            );
        }

        tracing::info!(repo = %self.target.id, branch, entries = paths.len(), "fetched listing");
        Ok(Listing {
            branch: Some(branch.to_string()),
            paths,
            truncated: response.truncated,
        })
    }
}

impl PathSource for GitHubSource {
    fn fetch_paths(&self) -> Result<Listing, FetchError> {
        let explicit = self.target.branch.is_some();
        let candidates = self.branch_candidates()?;

        for branch in &candidates {
            match self.tree_sha(branch) {
                Ok(sha) => return self.fetch_tree(branch, &sha),
                Err(FetchError::NotFound(_)) if !explicit => {
                    tracing::warn!(branch = %branch, "branch not found, trying next candidate");
                }
                Err(FetchError::NotFound(what)) => {
                    return Err(FetchError::NotFound(format!(
                        "{what} (branch '{branch}'; pass --branch for names containing '/')"
                    )));
                }
                Err(e) => return Err(e),
            }
        }

        Err(FetchError::NotFound(format!(
            "{}: no branch among {}",
            self.target.id,
            candidates.join(", ")
        )))
    }
}

/// Map a non-success response onto an error kind.
fn classify_failure(status: StatusCode, headers: &HeaderMap, body: &str, what: &str) -> FetchError {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    // Secondary limits answer 403 with retry-after while quota remains.
    let limited = header("x-ratelimit-remaining") == Some("0") || header("retry-after").is_some();
    if status == StatusCode::TOO_MANY_REQUESTS || (status == StatusCode::FORBIDDEN && limited) {
        let detail = match (header("retry-after"), header("x-ratelimit-reset")) {
            (Some(secs), _) => format!(" (retry after {secs}s)"),
            (None, Some(reset)) => format!(" (resets at unix time {reset})"),
            (None, None) => String::new(),
        };
        return FetchError::RateLimited(detail);
    }

    if status == StatusCode::NOT_FOUND {
        return FetchError::NotFound(what.to_string());
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.to_string());
    FetchError::Api {
        status: status.as_u16(),
        body: message.chars().take(MAX_ERROR_BODY).collect(),
    }
}
