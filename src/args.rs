use std::path::PathBuf;

use clap::Parser;
use reqwest::Url;

/// Fetch the shared navbar of a site and splice it into a page
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Page to load: either an http(s) URL or the path of a local HTML file
    pub page: String,

    /// Site serving /navbar.html (defaults to the page itself when it is a URL)
    #[arg(short, long, env = "NAVBAR_SITE")]
    pub site: Option<Url>,

    /// File to write the resulting page to (rather than standard output)
    #[arg(short, long, env = "NAVBAR_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Log-level (error, warn, info, debug, trace)
    #[arg(short, long, env = "NAVBAR_LOG_LEVEL", default_value = "info")]
    pub log_level: log::LevelFilter,
}

impl Args {
    /// The page as a URL, if it is an http(s) one.
    pub fn page_url(&self) -> Option<Url> {
        Url::parse(&self.page)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
    }

    /// The site to fetch the navbar from: `--site` if given, else the page URL.
    ///
    /// None when the page is a local file and no site was given.
    pub fn site(&self) -> Option<Url> {
        self.site.clone().or_else(|| self.page_url())
    }
}
