use clap::Parser;
use std::io::Read;

use tagfilter::config::Config;
use tagfilter::request::{self, RequestOptions};
use tagfilter::rewrite;

#[derive(Parser)]
#[command(
    name = "tagfilter",
    about = "Rewrite grid filter expressions into search-index syntax"
)]
struct Cli {
    /// Filter expression to rewrite. Reads stdin when omitted.
    filter: Option<String>,

    /// Build the grid's contains encoding from a comma-separated id list and
    /// rewrite that instead of reading a filter.
    #[arg(long, value_name = "IDS", conflicts_with = "filter")]
    tags: Option<String>,

    /// Print the prepared request (params and headers) as JSON instead of
    /// the bare filter.
    #[arg(long)]
    request: bool,

    /// Write debug logs to stderr (set RUST_LOG to adjust).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::debug!("tagfilter debug logging enabled");
    }

    let filter = if let Some(tags) = &cli.tags {
        let ids = tagfilter::parse_tag_list(tags)?;
        tagfilter::expr::contains_expr(rewrite::TAGS_FIELD, &ids)
    } else if let Some(filter) = cli.filter {
        filter
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf.trim_end_matches(['\r', '\n']).to_string()
    };

    if cli.request {
        let config = Config::load().unwrap_or_else(|_| Config::defaults());
        let mut options = RequestOptions::new().param(request::FILTER_PARAM, filter);
        request::before_send(&mut options, &config.service);
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else if let Some(rewritten) = rewrite::rewrite_filter(&filter) {
        println!("{rewritten}");
    }

    Ok(())
}
