#![forbid(unsafe_code)]
//! repotree — render a hosted repository's file listing as a depth-limited tree.

pub mod cli;
pub mod error;
pub mod github;
pub mod logging;
pub mod render;
pub mod repo;
pub mod source;
pub mod tree;

/// Build the hierarchy for `paths` and render it in one step.
pub fn render_paths<I, S>(paths: I, max_depth: usize) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    render::render(&tree::build_hierarchy(paths, max_depth))
}
