use anyhow::Context;
use clap::Parser;
use nbparse_core::{BookmarkParser, Config, DateRange, Visibility};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nbparse", about = "Convert a Netscape bookmark file into JSON records")]
struct Cli {
    /// Bookmark file exported by a browser.
    file: PathBuf,

    /// TOML config file; defaults to ~/.config/nbparse/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tag added to every entry. Repeatable; replaces configured default tags.
    #[arg(long = "default-tag")]
    default_tags: Vec<String>,

    /// Do not tag entries with the folders they sit in.
    #[arg(long)]
    no_nested_tags: bool,

    /// Mark entries public unless the markup says otherwise.
    #[arg(long)]
    public: bool,

    /// Keep ADD_DATE epochs as written, even far in the future.
    #[arg(long)]
    no_normalize_dates: bool,

    /// Window for normalised dates, e.g. "30 years".
    #[arg(long)]
    date_range: Option<DateRange>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Log parser decisions to stderr at debug level.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "warn" })
            }),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading default config")?,
    };

    let mut parser_config = config.parser;
    if !cli.default_tags.is_empty() {
        parser_config.default_tags = cli.default_tags;
    }
    if cli.no_nested_tags {
        parser_config.keep_nested_tags = false;
    }
    if cli.public {
        parser_config.default_pub = Visibility::Public;
    }
    if cli.no_normalize_dates {
        parser_config.normalize_dates = false;
    }
    if let Some(range) = cli.date_range {
        parser_config.date_range = range;
    }

    let mut parser = BookmarkParser::new(parser_config);
    let entries = parser
        .read_file(&cli.file)?
        .parse()
        .with_context(|| format!("parsing {}", cli.file.display()))?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };
    println!("{json}");

    Ok(())
}
