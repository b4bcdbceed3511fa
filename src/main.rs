#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use repotree::cli::Args;
use repotree::github::GitHubSource;
use repotree::render::{render_with, RenderConfig};
use repotree::source::{FileSource, PathSource};
use repotree::{logging, tree};
use std::io::{self, Write};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("repotree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();

    if let Some(shell) = args.completions {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "repotree", &mut io::stdout());
        return Ok(());
    }
    if args.man {
        clap_mangen::Man::new(Args::command())
            .render(&mut io::stdout())
            .context("failed to render man page")?;
        return Ok(());
    }

    logging::init(args.verbose, args.quiet);

    let source: Box<dyn PathSource> = if let Some(file) = &args.paths_file {
        Box::new(FileSource::new(file))
    } else {
        let target = args.target()?.context("no repository given")?;
        let label = target.id.to_string();
        let source = GitHubSource::new(target, args.github_config())
            .with_context(|| format!("{label}: failed to set up API client"))?;
        Box::new(source)
    };

    let listing = source.fetch_paths()?;
    let root = tree::build_hierarchy(&listing.paths, usize::from(args.max_depth));
    tracing::info!(
        branch = listing.branch.as_deref().unwrap_or("-"),
        paths = listing.paths.len(),
        nodes = root.count(),
        depth = args.max_depth,
        "built tree"
    );

    let render_config = RenderConfig { sanitize: !args.raw };
    let text = render_with(&root, &render_config);

    let mut stdout = io::stdout().lock();
    match stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("failed to write tree"),
    }
}
