use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::debug;
use tracing_subscriber::EnvFilter;
use url::Url;

use rss2png::{Config, Error, HttpFetcher};

/// Render the newest item of an RSS feed into a small PNG banner
#[derive(Debug, Parser)]
#[command(name = "rss2png", version)]
struct Cli {
    /// Where to write the PNG [default: rss.png in the temp directory]
    #[arg(short = 'o', long = "output", value_name = "output")]
    output: Option<PathBuf>,

    /// Feed to fetch instead of the built-in one
    #[arg(long, value_name = "url", value_parser = Url::parse)]
    url: Option<Url>,

    /// Text drawn on the footer line
    #[arg(long, value_name = "text")]
    footer: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, value_name = "ms")]
    timeout_ms: Option<u64>,
}

impl Cli {
    fn into_config(self, debug: bool) -> Config {
        let defaults = Config::default();
        Config {
            feed_url: self.url.map(String::from).unwrap_or(defaults.feed_url),
            footer: self.footer.unwrap_or(defaults.footer),
            timeout_ms: self.timeout_ms.unwrap_or(defaults.timeout_ms),
            output: self.output.unwrap_or(defaults.output),
            debug,
            ..defaults
        }
    }
}

/// Debug output is limited to this crate so HTTP and TLS internals stay quiet.
fn log_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("warn,rss2png=debug")
    } else {
        EnvFilter::new("warn")
    }
}

fn init_logging(debug: bool) {
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .with_env_filter(log_filter(debug));
    // Progress goes to stdout; otherwise only warnings, on stderr.
    let _ = if debug {
        builder.with_writer(std::io::stdout).try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };
}

fn try_main(config: &Config) -> anyhow::Result<()> {
    let fetcher = HttpFetcher::new(config).context("Failed to set up feed fetcher")?;
    let report = rss2png::run(config, &fetcher)
        .with_context(|| format!("Failed to render {}", config.feed_url))?;
    debug!("Done: {} ({} bytes)", report.output.display(), report.png_bytes);
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let reason = e.to_string();
            let reason = reason.lines().next().unwrap_or_default().trim_start_matches("error: ");
            eprintln!("{}", Error::UsageError(reason.to_string()));
            eprintln!("{}", Cli::command().render_usage());
            return ExitCode::FAILURE;
        }
    };

    let config = cli.into_config(Config::debug_from_env());
    init_logging(config.debug);
    debug!("rss2png {}", rss2png::VERSION);

    match try_main(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
