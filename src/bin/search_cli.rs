//! CLI binary for catalog search.

use std::path::PathBuf;

use bookshelf::{BookshelfConfig, SearchPage, SearchRequest, SortMode};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Search the book catalog for literary titles.
#[derive(Parser)]
#[command(name = "bookshelf-search", version, about)]
struct Cli {
    /// Free-text query, e.g. a title or title fragment.
    query: String,

    /// Sort order: relevance, year or author.
    #[arg(short, long, default_value = "relevance")]
    sort: SortMode,

    /// 1-based page number.
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Results per page (overrides the config file).
    #[arg(long)]
    page_size: Option<usize>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the page as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bookshelf=info,bookshelf_search=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = BookshelfConfig::load(cli.config.as_deref())?;
    if let Some(page_size) = cli.page_size {
        config.search.page_size = page_size;
    }
    debug!(query = %cli.query, sort = %cli.sort, page = cli.page, "running search");

    let request = SearchRequest::new(&cli.query, cli.sort, cli.page);
    let page = bookshelf::search(&config, &request).await?;

    if cli.json {
        println!("{}", bookshelf::render_json(&page)?);
    } else {
        print_page(&page);
    }
    Ok(())
}

fn print_page(page: &SearchPage) {
    if page.results.is_empty() {
        println!("No results for \"{}\".", page.query);
        return;
    }

    println!(
        "{} result(s) for \"{}\" sorted by {} (page {}):",
        page.total, page.query, page.sort, page.page
    );
    let offset = page.page.saturating_sub(1) * page.page_size;
    for (i, book) in page.results.iter().enumerate() {
        let authors = if book.authors.is_empty() {
            "unknown author"
        } else {
            book.authors.as_str()
        };
        let year = if book.year.is_empty() {
            "n.d."
        } else {
            book.year.as_str()
        };
        println!(
            "{:>3}. {} - {} ({}) [{}]",
            offset + i + 1,
            book.title,
            authors,
            year,
            book.genres
        );
    }
    if page.has_more {
        println!("More results: --page {}", page.page + 1);
    }
}
