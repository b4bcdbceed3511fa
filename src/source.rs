//! Where path listings come from.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::error::FetchError;

/// A fetched, provider-ordered path listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// Branch the listing was taken from, when known.
    pub branch: Option<String>,
    /// One slash-delimited path per tracked file or directory.
    pub paths: Vec<String>,
    /// Whether the provider cut the listing short.
    pub truncated: bool,
}

/// Abstraction over listing retrieval so it can be swapped or mocked.
pub trait PathSource {
    fn fetch_paths(&self) -> Result<Listing, FetchError>;
}

/// Reads one path per line from a local file, or stdin when the path is `-`.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> io::Result<String> {
        if self.path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            Ok(buf)
        } else {
            fs::read_to_string(&self.path)
        }
    }
}

impl PathSource for FileSource {
    fn fetch_paths(&self) -> Result<Listing, FetchError> {
        let contents = self.read_all().map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;

        let paths = parse_path_lines(&contents);
        tracing::debug!(count = paths.len(), path = %self.path.display(), "read path list");

        Ok(Listing {
            branch: None,
            paths,
            truncated: false,
        })
    }
}

/// Split a newline-separated listing, dropping blank lines and CR endings.
pub fn parse_path_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
