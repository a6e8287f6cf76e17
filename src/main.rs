use std::path::PathBuf;

use clap::Parser;
use sb_tui::RunOptions;

/// Keyboard-driven clipboard snippet manager.
#[derive(Debug, Parser)]
#[command(name = "snipboard", version, about)]
struct Args {
    /// Initial search term. A `...?q=term` string is accepted as well.
    #[arg(short, long)]
    query: Option<String>,

    /// Config file (defaults to config.toml in the data directory).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// The `q` parameter of a `...?q=term` string, decoded; any other input as is.
fn search_term(raw: &str) -> String {
    raw.split_once('?')
        .and_then(|(_, params)| {
            url::form_urlencoded::parse(params.as_bytes())
                .find(|(key, _)| key == "q")
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_else(|| raw.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    sb_tui::run(RunOptions {
        config_path: args.config,
        query: args.query.as_deref().map(search_term),
    })
    .await
}
