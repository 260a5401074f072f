use anyhow::Result;
use clap::Args;
use tebex_headless::{Client, PackageQuery};

use crate::output::{print_packages, OutputFormat};

#[derive(Args)]
pub struct PackagesArgs {
    /// Get a single package by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Price packages for this basket
    #[arg(long)]
    pub basket: Option<String>,

    /// Price packages for this visitor IP address
    #[arg(long)]
    pub ip: Option<String>,
}

pub async fn run(args: &PackagesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = PackageQuery::default();
    if let Some(basket) = &args.basket {
        query = query.with_basket_ident(basket);
    }
    if let Some(ip) = &args.ip {
        query = query.with_ip_address(ip);
    }

    let packages = match args.id {
        Some(id) => vec![client.get_package(id, &query).await?],
        None => client.get_packages(&query).await?,
    };
    tracing::info!("Fetched {} packages", packages.len());
    print_packages(&packages, format);
    Ok(())
}
