mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "tebex")]
#[command(about = "Browse a Tebex webstore and manage baskets from the command line")]
struct Cli {
    /// Output format: table, markdown or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Public webstore identifier (falls back to TEBEX_WEBSTORE_ID)
    #[arg(long, global = true)]
    webstore: Option<String>,

    /// Private key for authenticated calls (falls back to TEBEX_PRIVATE_KEY)
    #[arg(long, global = true)]
    private_key: Option<String>,

    /// API base URL (falls back to TEBEX_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the webstore's configuration
    Webstore,
    /// List the webstore's pages
    Pages,
    /// List categories or look one up
    Categories(commands::categories::CategoriesArgs),
    /// List packages or look one up
    Packages(commands::packages::PackagesArgs),
    /// Create and modify baskets
    Basket(commands::basket::BasketArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tebex=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let settings = Settings::from_env(
        cli.webstore.as_deref(),
        cli.private_key.as_deref(),
        cli.base_url.as_deref(),
    )?;
    let client = settings.client()?;
    tracing::debug!("Using {:?}", client);

    match &cli.command {
        Commands::Webstore => commands::store::run_webstore(&client, &format).await?,
        Commands::Pages => commands::store::run_pages(&client, &format).await?,
        Commands::Categories(args) => commands::categories::run(args, &client, &format).await?,
        Commands::Packages(args) => commands::packages::run(args, &client, &format).await?,
        Commands::Basket(args) => commands::basket::run(args, &client, &format).await?,
    }

    Ok(())
}
