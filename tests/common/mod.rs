#![allow(dead_code)]

use repotree::github::{GitHubConfig, GitHubSource};
use repotree::repo::RepoRef;
use std::io::Write;
use tempfile::NamedTempFile;

/// A small listing shaped like a typical web project, in provider order.
pub const PROJECT_PATHS: &[&str] = &[
    ".github",
    ".github/workflows",
    ".github/workflows/ci.yml",
    "README.md",
    "package.json",
    "src",
    "src/app",
    "src/app/layout.tsx",
    "src/app/page.tsx",
    "src/components",
    "src/components/ui",
    "src/components/ui/button.tsx",
    "src/lib",
    "src/lib/utils.ts",
    "tsconfig.json",
];

/// Write `paths` one per line to a temporary file.
pub fn write_paths_file(paths: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for p in paths {
        writeln!(file, "{p}").unwrap();
    }
    file.flush().unwrap();
    file
}

/// Build a GitHub source pointed at a local mock server.
pub fn mock_source(server_url: &str, target: &str, allow_truncated: bool) -> GitHubSource {
    let target: RepoRef = target.parse().unwrap();
    let config = GitHubConfig {
        api_url: server_url.to_string(),
        token: None,
        allow_truncated,
        ..GitHubConfig::default()
    };
    GitHubSource::new(target, config).unwrap()
}

/// Connector portion of a rendered line (everything up to the name).
pub fn connector_of(line: &str) -> &str {
    let end = line
        .find("\u{2500}\u{2500} ")
        .map(|i| i + "\u{2500}\u{2500} ".len())
        .unwrap_or(0);
    &line[..end]
}
