use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::FetchError;
use crate::github::{GitHubConfig, DEFAULT_API_URL};
use crate::repo::RepoRef;

const EXAMPLES: &str = "\
Examples:
  repotree rust-lang/cargo
  repotree https://github.com/tokio-rs/tokio -L 2
  repotree https://github.com/vercel/next.js/tree/canary --level 1
  git ls-files | repotree --paths-file - -L 4";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "repotree",
    version,
    about = "Render a GitHub repository's file listing as a tree",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Repository as OWNER/REPO or a github.com URL
    #[arg(required_unless_present_any = ["paths_file", "completions", "man"])]
    pub repo: Option<String>,

    /// Max display depth
    #[arg(
        short = 'L',
        long = "level",
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(1..=5)
    )]
    pub max_depth: u8,

    /// Branch to list (default: the repository's default branch)
    #[arg(short = 'b', long = "branch")]
    pub branch: Option<String>,

    /// GitHub token used to authenticate API requests
    #[arg(long = "token", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API base URL
    #[arg(long = "api-url", env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds (minimum 1)
    #[arg(long = "timeout", default_value = "30")]
    pub timeout_secs: u64,

    /// Render a partial tree when the provider truncates the listing
    #[arg(long = "allow-truncated")]
    pub allow_truncated: bool,

    /// Read paths (one per line) from FILE instead of GitHub; `-` reads stdin
    #[arg(
        long = "paths-file",
        value_name = "FILE",
        conflicts_with_all = ["repo", "branch", "allow_truncated"]
    )]
    pub paths_file: Option<PathBuf>,

    /// Print entry names verbatim, without escaping control characters
    #[arg(long = "raw")]
    pub raw: bool,

    /// Increase diagnostic output (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Print shell completions and exit
    #[arg(long = "completions", value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,

    /// Print the man page and exit
    #[arg(long = "man")]
    pub man: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.timeout_secs < 1 {
            self.timeout_secs = 1;
        }
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// Parse the positional repository argument, applying `--branch`.
    pub fn target(&self) -> Result<Option<RepoRef>, FetchError> {
        let Some(input) = &self.repo else {
            return Ok(None);
        };
        let mut target: RepoRef = input.parse()?;
        if let Some(branch) = &self.branch {
            target.branch = Some(branch.clone());
        }
        Ok(Some(target))
    }

    pub fn github_config(&self) -> GitHubConfig {
        GitHubConfig {
            api_url: self.api_url.clone(),
            token: self.token.clone().filter(|t| !t.trim().is_empty()),
            timeout: Duration::from_secs(self.timeout_secs),
            allow_truncated: self.allow_truncated,
        }
    }
}
