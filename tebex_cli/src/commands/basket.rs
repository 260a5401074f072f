use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde_json::{Map, Value};
use tebex_headless::types::{AddPackage, ApplyType, BasketUrls, PackageType, RedeemCode};
use tebex_headless::Client;

use crate::output::{print_basket, print_json, print_message, OutputFormat};

#[derive(Args)]
pub struct BasketArgs {
    #[command(subcommand)]
    pub command: BasketCommand,
}

#[derive(Subcommand)]
pub enum BasketCommand {
    /// Show a basket
    Show { ident: String },
    /// Create a new basket
    Create(CreateArgs),
    /// List login providers for a basket
    AuthUrl {
        ident: String,
        /// Where the provider sends the visitor back to
        #[arg(long)]
        return_url: String,
    },
    /// Add a package to a basket
    Add(AddArgs),
    /// Add a package to a basket as a gift
    Gift {
        ident: String,
        package_id: i64,
        /// Username ID of the recipient
        #[arg(long)]
        to: String,
    },
    /// Remove a package from a basket
    Remove { ident: String, package_id: i64 },
    /// Set the quantity of a package in a basket
    Quantity {
        ident: String,
        package_id: i64,
        quantity: u32,
    },
    /// Apply a code: coupons, giftcards or creator-codes
    Apply(CodeArgs),
    /// Remove a previously applied code
    Unapply(CodeArgs),
    /// Move a subscription tier to another package (needs a private key)
    Tier { tier_id: String, package_id: i64 },
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub complete_url: String,

    #[arg(long)]
    pub cancel_url: String,

    /// Bind the basket to this Minecraft username
    #[arg(long)]
    pub username: Option<String>,

    /// Custom data as key=value, repeatable
    #[arg(long = "custom")]
    pub custom: Vec<String>,

    /// Redirect to the complete URL automatically after payment
    #[arg(long)]
    pub auto_redirect: Option<bool>,

    /// Visitor IP address
    #[arg(long)]
    pub ip: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    pub ident: String,
    pub package_id: i64,

    #[arg(long, default_value = "1")]
    pub quantity: u32,

    /// Package type: subscription, single or both
    #[arg(long = "type")]
    pub package_type: Option<String>,

    /// Variable data as key=value, repeatable
    #[arg(long = "var")]
    pub variables: Vec<String>,
}

#[derive(Args)]
pub struct CodeArgs {
    pub ident: String,
    /// coupons, giftcards or creator-codes
    pub kind: String,
    pub code: String,
}

impl CodeArgs {
    fn redeem_code(&self) -> Result<RedeemCode> {
        let apply_type: ApplyType = self.kind.parse()?;
        Ok(RedeemCode::from_parts(apply_type, &self.code))
    }
}

/// Parses repeated `key=value` arguments into a JSON object.
pub fn parse_pairs(pairs: &[String]) -> Result<Map<String, Value>> {
    let mut map = Map::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("expected key=value, got '{}'", pair);
        };
        if key.is_empty() {
            bail!("empty key in '{}'", pair);
        }
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(map)
}

pub async fn run(args: &BasketArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        BasketCommand::Show { ident } => {
            print_basket(&client.get_basket(ident).await?, format);
        }
        BasketCommand::Create(create) => {
            let mut urls = BasketUrls::new(&create.complete_url, &create.cancel_url);
            if !create.custom.is_empty() {
                urls = urls.with_custom(parse_pairs(&create.custom)?);
            }
            if let Some(redirect) = create.auto_redirect {
                urls = urls.with_complete_auto_redirect(redirect);
            }
            let basket = match &create.username {
                Some(username) => {
                    client
                        .create_minecraft_basket(username, &urls, create.ip.as_deref())
                        .await?
                }
                None => client.create_basket(&urls, create.ip.as_deref()).await?,
            };
            tracing::info!("Created basket {}", basket.ident);
            print_basket(&basket, format);
        }
        BasketCommand::AuthUrl { ident, return_url } => {
            let urls = client.get_basket_auth_url(ident, return_url).await?;
            match format {
                OutputFormat::Json => print_json(&urls),
                _ => {
                    for url in urls {
                        println!("{}: {}", url.name, url.url);
                    }
                }
            }
        }
        BasketCommand::Add(add) => {
            let mut package = AddPackage::new(add.package_id, add.quantity);
            if let Some(package_type) = &add.package_type {
                package = package.with_type(package_type.parse::<PackageType>()?);
            }
            if !add.variables.is_empty() {
                package = package.with_variable_data(parse_pairs(&add.variables)?);
            }
            print_basket(&client.add_package_to_basket(&add.ident, &package).await?, format);
        }
        BasketCommand::Gift {
            ident,
            package_id,
            to,
        } => {
            print_basket(&client.gift_package(ident, *package_id, to).await?, format);
        }
        BasketCommand::Remove { ident, package_id } => {
            print_basket(&client.remove_package(ident, *package_id).await?, format);
        }
        BasketCommand::Quantity {
            ident,
            package_id,
            quantity,
        } => {
            print_basket(
                &client.update_quantity(ident, *package_id, *quantity).await?,
                format,
            );
        }
        BasketCommand::Apply(code) => {
            let message = client.apply(&code.ident, code.redeem_code()?).await?;
            print_message(&message, format);
        }
        BasketCommand::Unapply(code) => {
            let message = client.remove(&code.ident, code.redeem_code()?).await?;
            print_message(&message, format);
        }
        BasketCommand::Tier {
            tier_id,
            package_id,
        } => {
            if !client.is_authenticated() {
                tracing::warn!("Updating a tier without a private key; expect a 401");
            }
            print_message(&client.update_tier(tier_id, *package_id).await?, format);
        }
    }
    Ok(())
}
