//! CLI binary for finding.

use anyhow::Context;
use clap::Parser;
use finding::config::APP_ID_ENV;
use finding::{FindItemsResponse, FindingClient, FindingConfig, Operation, RawParams};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validate and run Finding search calls.
#[derive(Parser)]
#[command(name = "finding", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Application ID. Overrides the config file and FINDING_APP_ID.
    #[arg(long)]
    app_id: Option<String>,

    /// Print the request URL instead of sending it.
    #[arg(long)]
    dry_run: bool,

    /// Operation name, e.g. findItemsByKeywords.
    operation: Operation,

    /// Parameters as KEY=VALUE pairs.
    #[arg(value_parser = parse_pair)]
    params: Vec<(String, String)>,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    Ok((key.to_owned(), value.to_owned()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("finding=info,finding_query=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => FindingConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => {
            let path = FindingConfig::default_config_path();
            if path.exists() {
                FindingConfig::from_file(&path)?
            } else {
                FindingConfig::default()
            }
        }
    };
    config.apply_app_id_override(std::env::var(APP_ID_ENV).ok());
    config.apply_app_id_override(cli.app_id);

    let client = FindingClient::from_config(&config)?;
    let raw: RawParams = cli.params.into_iter().collect();

    if cli.dry_run {
        println!("{}", client.request_url(cli.operation, &raw)?);
        return Ok(());
    }

    info!(operation = %cli.operation, "running search");
    let pages = run(&client, cli.operation, &raw).await?;
    print_pages(&pages);
    Ok(())
}

async fn run(
    client: &FindingClient,
    operation: Operation,
    raw: &RawParams,
) -> anyhow::Result<Vec<FindItemsResponse>> {
    use finding::ResultProvider;

    let pages = match operation {
        Operation::ByCategory => client.find_items_by_category(raw).await?.results().to_vec(),
        Operation::ByKeywords => client.find_items_by_keywords(raw).await?.results().to_vec(),
        Operation::Advanced => client.find_items_advanced(raw).await?.results().to_vec(),
        Operation::ByProduct => client.find_items_by_product(raw).await?.results().to_vec(),
        Operation::InStores => client.find_items_in_stores(raw).await?.results().to_vec(),
    };
    Ok(pages)
}

fn print_pages(pages: &[FindItemsResponse]) {
    for page in pages {
        if let Some(ack) = page.ack.first() {
            println!("ack: {ack}");
        }
        for error in page.error_message.iter().flat_map(|m| m.error.iter()) {
            let message = error.message.first().map(String::as_str).unwrap_or("");
            println!("error: {message}");
        }
        for item in page.items() {
            let title = item.title().unwrap_or("<untitled>");
            match item.current_price() {
                Some(price) => println!("{title}  {} {}", price.value, price.currency_id),
                None => println!("{title}"),
            }
        }
    }
}
