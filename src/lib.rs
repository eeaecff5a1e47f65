//! rss2png
//!
//! Fetches an RSS feed, pulls the newest item's title and a short plain-text
//! summary of its HTML description, and renders both plus a footer line into
//! a small PNG banner.
//!
//! # Pipeline
//!
//! - [`fetch`]: one blocking HTTP GET behind the [`FeedSource`] trait
//! - [`extract`]: item location, budgeted HTML flattening, ellipsis handling
//! - [`rendering`]: fixed three-line layout rasterized to a 450x68 PNG
//!
//! Each stage returns fresh values to the next; the image is only written once
//! every earlier stage has succeeded.
//!
//! # Example
//!
//! ```no_run
//! use rss2png::{Config, HttpFetcher};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     output: "/tmp/banner.png".into(),
//!     ..Default::default()
//! };
//!
//! let fetcher = HttpFetcher::new(&config)?;
//! let report = rss2png::run(&config, &fetcher)?;
//! println!("Title: {}", report.title);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use log::debug;
use url::Url;

pub mod error;
pub use error::{Error, Result};

pub mod extract;
pub use extract::{BoundedText, Extracted, Tag};

pub mod fetch;
pub use fetch::{FeedSource, HttpFetcher, RawFeed};

pub mod rendering;
pub use rendering::{RenderSpec, Screenshot};

/// Crate version, also sent in the user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Feed fetched when no URL is configured.
pub const DEFAULT_FEED_URL: &str = "https://blog.securolytics.io/feed/";

/// Footer line drawn under the summary.
pub const DEFAULT_FOOTER: &str = "https://blog.securolytics.io/";

/// Environment variable whose presence turns on progress logging.
pub const DEBUG_ENV: &str = "RSS2PNG_DEBUG";

/// File name used inside the temp directory when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "rss.png";

/// Configuration for one fetch-extract-render run
///
/// The defaults fetch the built-in feed with a 30 second timeout and write
/// `rss.png` into the system temp directory.
///
/// # Examples
///
/// ```
/// let cfg = rss2png::Config::default();
/// assert!(cfg.user_agent.starts_with("rss2png/"));
/// assert!(cfg.output.ends_with("rss.png"));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Feed to fetch
    pub feed_url: String,
    /// Static text drawn on the last line
    pub footer: String,
    /// User agent string sent with the request
    pub user_agent: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Where the PNG is written
    pub output: PathBuf,
    /// Whether progress logging was requested
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            user_agent: format!("rss2png/{}", VERSION),
            timeout_ms: 30000,
            output: Self::default_output_path(),
            debug: false,
        }
    }
}

impl Config {
    pub fn default_output_path() -> PathBuf {
        std::env::temp_dir().join(DEFAULT_OUTPUT_FILE)
    }

    /// Whether the debug variable is present in the environment.
    pub fn debug_from_env() -> bool {
        std::env::var_os(DEBUG_ENV).is_some()
    }

    /// Check the configuration before any network traffic happens.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.feed_url)
            .map_err(|e| Error::ConfigError(format!("feed URL '{}': {}", self.feed_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::ConfigError(format!(
                "feed URL must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.timeout_ms == 0 {
            return Err(Error::ConfigError("timeout must be greater than zero".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(Error::ConfigError("output path is empty".into()));
        }
        Ok(())
    }
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub title: BoundedText,
    pub summary: BoundedText,
    pub output: PathBuf,
    pub png_bytes: usize,
}

/// Fetch, extract and render once, writing the banner to `config.output`.
pub fn run<S: FeedSource + ?Sized>(config: &Config, source: &S) -> Result<RunReport> {
    config.validate()?;

    debug!("Fetching feed: {}", config.feed_url);
    let feed = source.fetch(&config.feed_url)?;

    let Extracted { title, summary } = extract::extract(feed.as_str())?;
    debug!("Extracted title and summary :-");
    debug!("  title   : {}", title);
    debug!("  summary : {}", summary);

    let spec = RenderSpec::new(title.to_string(), summary.to_string(), config.footer.clone());
    debug!("Generating image...");
    let screenshot = rendering::render(&spec)?;
    screenshot.write_to(&config.output)?;
    debug!("Wrote {} bytes to {}", screenshot.png_data.len(), config.output.display());

    Ok(RunReport {
        title,
        summary,
        output: config.output.clone(),
        png_bytes: screenshot.png_data.len(),
    })
}
