//! Repository identifier parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::FetchError;

const HOST: &str = "github.com";
const USAGE: &str = "expected OWNER/REPO or a github.com URL";

/// An `owner/name` pair on the hosting provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A repository plus an optional branch taken from a `/tree/<branch>` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub id: RepoId,
    pub branch: Option<String>,
}

impl FromStr for RepoRef {
    type Err = FetchError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        // Drop query and fragment.
        let trimmed = trimmed
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        let rest = strip_host(trimmed).ok_or_else(|| {
            FetchError::invalid_input(input, format!("only {HOST} repositories are supported"))
        })?;

        let mut segments = rest.split('/');
        let owner = segments.next().unwrap_or_default();
        let name = segments.next().unwrap_or_default();
        let name = name.strip_suffix(".git").unwrap_or(name);

        if owner.is_empty() || name.is_empty() {
            return Err(FetchError::invalid_input(input, USAGE));
        }
        for part in [owner, name] {
            if !is_valid_component(part) {
                return Err(FetchError::invalid_input(
                    input,
                    format!("'{part}' contains characters not allowed in a repository path"),
                ));
            }
        }

        let branch = match (segments.next(), segments.next()) {
            (Some("tree"), Some(branch)) if !branch.is_empty() => {
                if segments.next().is_some() {
                    tracing::warn!(
                        branch,
                        "URL continues past the branch; use --branch for names with '/'"
                    );
                }
                Some(branch.to_string())
            }
            _ => None,
        };

        Ok(RepoRef {
            id: RepoId {
                owner: owner.to_string(),
                name: name.to_string(),
            },
            branch,
        })
    }
}

/// Strip scheme and host, returning the `owner/repo/...` remainder.
/// `None` means the input names a host other than ours.
fn strip_host(input: &str) -> Option<&str> {
    if let Some(rest) = input.strip_prefix("git@") {
        return rest.strip_prefix(HOST)?.strip_prefix(':');
    }

    let (had_scheme, rest) = match input.split_once("://") {
        Some((_, rest)) => (true, rest),
        None => (false, input),
    };
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    match rest.strip_prefix(HOST) {
        Some(path) => path.strip_prefix('/'),
        None if had_scheme => None,
        // Shorthand OWNER/REPO, unless the first segment looks like a host.
        None => {
            let first = rest.split('/').next().unwrap_or_default();
            (!first.contains('.') || !rest.contains('/')).then_some(rest)
        }
    }
}

fn is_valid_component(part: &str) -> bool {
    part.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && part != "."
        && part != ".."
}
