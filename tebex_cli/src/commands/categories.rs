use anyhow::Result;
use clap::Args;
use tebex_headless::{CategoryQuery, Client};

use crate::output::{print_categories, OutputFormat};

#[derive(Args)]
pub struct CategoriesArgs {
    /// Get a single category by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Embed each category's packages
    #[arg(long)]
    pub include_packages: bool,

    /// Price packages for this basket
    #[arg(long)]
    pub basket: Option<String>,

    /// Price packages for this visitor IP address
    #[arg(long)]
    pub ip: Option<String>,
}

impl CategoriesArgs {
    fn query(&self) -> CategoryQuery {
        let mut query = CategoryQuery::default();
        if self.include_packages {
            query = query.with_include_packages(true);
        }
        if let Some(basket) = &self.basket {
            query = query.with_basket_ident(basket);
        }
        if let Some(ip) = &self.ip {
            query = query.with_ip_address(ip);
        }
        query
    }
}

pub async fn run(args: &CategoriesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = args.query();
    let categories = match args.id {
        Some(id) => vec![client.get_category(id, &query).await?],
        None => client.get_categories(&query).await?,
    };
    tracing::info!("Fetched {} categories", categories.len());
    print_categories(&categories, format);
    Ok(())
}
