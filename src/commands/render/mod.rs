use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::infra::github::{GitHubClient, RepoRef};
use crate::shared::config::{Config, load_config};
use crate::thread::{
    HtmlSurface, PageOutcome, RenderOptions, ThreadCommentLoader, ThreadRef, find_thread_id,
};

const MISSING_REPO: &str =
    "No repository configured: pass -R owner/repo or set github.repo in the config file";

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct RenderArgs {
    /// Issue number holding the thread (read from --page-file when omitted)
    #[arg(required_unless_present = "page_file")]
    pub thread_id: Option<String>,

    /// HTML page whose `gh-comments` element carries a data-ghcommentid attribute
    #[arg(long, value_name = "PATH", conflicts_with = "thread_id")]
    pub page_file: Option<PathBuf>,

    /// Repository holding the threads (owner/repo); overrides github.repo
    #[arg(short = 'R', long)]
    pub repo: Option<String>,

    /// Page to load first
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Keep pressing "load more" until no further page is advertised
    #[arg(long)]
    pub all: bool,

    /// Stop --all after this many pages
    #[arg(long, requires = "all", value_name = "N")]
    pub max_pages: Option<u32>,
}

#[tokio::main]
pub async fn run(args: &RenderArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    let output = run_with_config(args, &config).await?;
    print!("{output}");
    Ok(())
}

/// Render the thread and return the resulting HTML (empty when nothing was rendered).
pub(super) async fn run_with_config(args: &RenderArgs, config: &Config) -> anyhow::Result<String> {
    let Some(thread_id) = resolve_thread_id(args)? else {
        info!("page has no comment thread");
        return Ok(String::new());
    };

    let repo: RepoRef = args
        .repo
        .as_deref()
        .or(config.github.repo.as_deref())
        .context(MISSING_REPO)?
        .parse()?;

    let client = GitHubClient::from_config(&config.github, repo)?;
    let loader = ThreadCommentLoader::new(client, RenderOptions::from_config(config));
    let thread = ThreadRef::at_page(thread_id, args.page);
    let mut surface = HtmlSurface::new();

    let outcomes = if args.all {
        loader
            .load_all(&thread, &mut surface, args.max_pages)
            .await
            .with_context(|| format!("Failed to load comments for thread {thread}"))?
    } else {
        vec![
            loader
                .load_page(&thread, &mut surface)
                .await
                .with_context(|| format!("Failed to load comments for thread {thread}"))?,
        ]
    };

    log_summary(&thread, &outcomes, &surface);

    if surface.is_empty() {
        return Ok(String::new());
    }
    Ok(surface.to_html())
}

fn log_summary(thread: &ThreadRef, outcomes: &[PageOutcome], surface: &HtmlSurface) {
    let comments: usize = outcomes
        .iter()
        .map(|outcome| match outcome {
            PageOutcome::Rendered { comments, .. } => *comments,
            PageOutcome::NoComments | PageOutcome::NotOpen { .. } => 0,
        })
        .sum();
    let next_page = outcomes.last().and_then(|outcome| match outcome {
        PageOutcome::Rendered { next, .. } => next.as_ref().map(|n| n.page),
        PageOutcome::NoComments | PageOutcome::NotOpen { .. } => None,
    });
    let refused_status = outcomes.iter().find_map(|outcome| match outcome {
        PageOutcome::NotOpen { status } => Some(*status),
        PageOutcome::NoComments | PageOutcome::Rendered { .. } => None,
    });
    info!(
        %thread,
        pages = outcomes.len(),
        comments,
        blocks = surface.blocks().len(),
        ?next_page,
        ?refused_status,
        "thread rendered"
    );
}

fn resolve_thread_id(args: &RenderArgs) -> anyhow::Result<Option<String>> {
    if let Some(id) = &args.thread_id {
        return Ok(Some(id.clone()));
    }
    let Some(path) = &args.page_file else {
        return Ok(None);
    };
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read page {}", path.display()))?;
    Ok(find_thread_id(&html))
}
