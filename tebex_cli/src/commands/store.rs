use anyhow::Result;
use tebex_headless::Client;

use crate::output::{print_pages, print_webstore, OutputFormat};

pub async fn run_webstore(client: &Client, format: &OutputFormat) -> Result<()> {
    let webstore = client.get_webstore().await?;
    print_webstore(&webstore, format);
    Ok(())
}

pub async fn run_pages(client: &Client, format: &OutputFormat) -> Result<()> {
    let pages = client.get_pages().await?;
    print_pages(&pages, format);
    Ok(())
}
