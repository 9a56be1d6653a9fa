use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Response;

mod args;
mod dom;
mod error;
mod loader;
mod outcome;
mod page;
mod source;
#[cfg(test)]
mod test_util;

use loader::NavbarLoader;
use outcome::Outcome;
use page::Page;
use source::HttpSource;

#[tokio::main]
async fn main() -> Result<()> {
    let args = args::Args::parse();

    env_logger::builder()
        .format_timestamp(None)
        .filter_module("navbar_loader", args.log_level)
        .init();

    let html = if let Some(url) = args.page_url() {
        log::debug!("Loading page from {url}");
        reqwest::get(url.clone())
            .await
            .and_then(Response::error_for_status)
            .with_context(|| format!("Failed loading page from {url}"))?
            .text()
            .await?
    } else {
        log::debug!("Loading page from file {}", args.page);
        std::fs::read_to_string(&args.page)
            .with_context(|| format!("Failed loading page from file {}", args.page))?
    };

    let site = args
        .site()
        .context("No site to fetch the navbar from, use --site")?;
    let loader = NavbarLoader::new(HttpSource::new(site));

    let mut page = Page::parse(&html);
    if let Some(Outcome::Inserted(insertion)) = page.dispatch_load_ready(&loader).await {
        log::debug!("{} node(s) inserted", insertion.nodes);
    }

    let html = page.html();
    match args.output {
        Some(path) => std::fs::write(&path, html)
            .with_context(|| format!("Failed writing page to {}", path.display()))?,
        None => println!("{html}"),
    }

    Ok(())
}
