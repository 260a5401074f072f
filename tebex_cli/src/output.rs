use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tebex_headless::types::{Basket, Category, Message, Package, Page, Webstore};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Parent")]
    parent: String,
    #[tabled(rename = "Packages")]
    packages: usize,
    #[tabled(rename = "Layout")]
    layout: String,
}

#[derive(Tabled)]
struct PackageRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    package_type: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
}

#[derive(Tabled)]
struct BasketLineRow {
    #[tabled(rename = "Package")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Gift To")]
    gift_to: String,
}

#[derive(Tabled)]
struct PageRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Visible")]
    visible: String,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_category_rows(categories: &[Category]) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id,
            name: c.name.clone(),
            parent: c.parent.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
            packages: c.packages.len(),
            layout: c.display_type.to_string(),
        })
        .collect()
}

fn build_package_rows(packages: &[Package]) -> Vec<PackageRow> {
    packages
        .iter()
        .map(|p| PackageRow {
            id: p.id,
            name: p.name.clone(),
            package_type: p.package_type.to_string(),
            category: p.category.name.clone(),
            price: format_price(p.total_price.value(), &p.currency),
        })
        .collect()
}

fn build_basket_rows(basket: &Basket) -> Vec<BasketLineRow> {
    basket
        .packages
        .iter()
        .map(|p| BasketLineRow {
            id: p.id,
            name: p.name.clone(),
            quantity: p.in_basket.quantity,
            price: format_price(p.in_basket.price.value(), &basket.currency),
            gift_to: p
                .in_basket
                .gift_recipient()
                .map(|(_, name)| name.to_string())
                .unwrap_or_default(),
        })
        .collect()
}

fn build_page_rows(pages: &[Page]) -> Vec<PageRow> {
    pages
        .iter()
        .map(|p| PageRow {
            id: p.id,
            title: p.title.clone(),
            slug: p.slug.clone(),
            visible: if p.hidden || p.disabled || p.private {
                "no".to_string()
            } else {
                "yes".to_string()
            },
        })
        .collect()
}

fn build_basket_summary(basket: &Basket) -> Vec<FieldRow> {
    let codes: Vec<&str> = basket
        .coupons
        .iter()
        .map(|c| c.code.as_str())
        .chain(basket.giftcards.iter().map(|g| g.card_number.as_str()))
        .chain(Some(basket.creator_code.as_str()).filter(|c| !c.is_empty()))
        .collect();
    vec![
        FieldRow {
            field: "Ident",
            value: basket.ident.clone(),
        },
        FieldRow {
            field: "User",
            value: basket
                .user()
                .map(|(_, name)| name.to_string())
                .unwrap_or_default(),
        },
        FieldRow {
            field: "Items",
            value: basket.item_count().to_string(),
        },
        FieldRow {
            field: "Codes",
            value: codes.join(", "),
        },
        FieldRow {
            field: "Total",
            value: format_price(basket.total_price.value(), &basket.currency),
        },
        FieldRow {
            field: "Checkout",
            value: basket.links.checkout.clone(),
        },
    ]
}

fn build_webstore_summary(webstore: &Webstore) -> Vec<FieldRow> {
    vec![
        FieldRow {
            field: "ID",
            value: webstore.id.to_string(),
        },
        FieldRow {
            field: "Name",
            value: webstore.name.clone(),
        },
        FieldRow {
            field: "URL",
            value: webstore.webstore_url.clone(),
        },
        FieldRow {
            field: "Currency",
            value: webstore.currency.clone(),
        },
        FieldRow {
            field: "Platform",
            value: webstore.platform_type.clone(),
        },
        FieldRow {
            field: "Created",
            value: webstore
                .created_at
                .to_datetime()
                .map(|t| t.date_naive().to_string())
                .unwrap_or_else(|_| webstore.created_at.to_string()),
        },
    ]
}

// -- Printers --

fn print_rows<R: Tabled>(rows: Vec<R>, format: &OutputFormat) {
    let mut table = Table::new(rows);
    if *format == OutputFormat::Markdown {
        table.with(Style::markdown());
    }
    println!("{}", table);
}

pub fn print_categories(categories: &[Category], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&categories),
        _ => print_rows(build_category_rows(categories), format),
    }
}

pub fn print_packages(packages: &[Package], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&packages),
        _ => print_rows(build_package_rows(packages), format),
    }
}

pub fn print_basket(basket: &Basket, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(basket),
        _ => {
            print_rows(build_basket_summary(basket), format);
            if !basket.packages.is_empty() {
                print_rows(build_basket_rows(basket), format);
            }
        }
    }
}

pub fn print_pages(pages: &[Page], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&pages),
        _ => print_rows(build_page_rows(pages), format),
    }
}

pub fn print_webstore(webstore: &Webstore, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(webstore),
        _ => print_rows(build_webstore_summary(webstore), format),
    }
}

pub fn print_message(message: &Message, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(message),
        _ => {
            let status = if message.success { "ok" } else { "failed" };
            println!("{}: {}", status, message.message);
        }
    }
}

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_price(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_data<T: serde::de::DeserializeOwned>(json_str: &str) -> T {
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        serde_json::from_value(resp["data"].clone()).unwrap()
    }

    fn load_basket() -> Basket {
        load_data(include_str!("../../tebex_headless/tests/fixtures/basket.json"))
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(9.8, "USD"), "9.80 USD");
        assert_eq!(format_price(0.0, "EUR"), "0.00 EUR");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("anything"), OutputFormat::Table);
    }

    #[test]
    fn test_build_category_rows_mapping() {
        let categories: Vec<Category> =
            load_data(include_str!("../../tebex_headless/tests/fixtures/categories.json"));
        let rows = build_category_rows(&categories);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].parent, "");
        assert_eq!(rows[0].layout, "grid");
        assert_eq!(rows[1].parent, "Store");
        assert_eq!(rows[1].layout, "list");
    }

    #[test]
    fn test_build_package_rows_mapping() {
        let packages: Vec<Package> =
            load_data(include_str!("../../tebex_headless/tests/fixtures/packages.json"));
        let rows = build_package_rows(&packages);
        assert_eq!(rows[0].name, "VIP Rank");
        assert_eq!(rows[0].package_type, "single");
        assert_eq!(rows[0].category, "Ranks");
        assert_eq!(rows[0].price, "9.80 USD");
        assert_eq!(rows[1].package_type, "subscription");
    }

    #[test]
    fn test_build_basket_rows_mapping() {
        let rows = build_basket_rows(&load_basket());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].gift_to, "");
        assert_eq!(rows[1].gift_to, "jeb_");
    }

    #[test]
    fn test_build_basket_summary() {
        let rows = build_basket_summary(&load_basket());
        let codes = rows.iter().find(|r| r.field == "Codes").unwrap();
        assert_eq!(codes.value, "SAVE10, GC-0001-0002, streamer");
        let user = rows.iter().find(|r| r.field == "User").unwrap();
        assert_eq!(user.value, "Notch");
    }

    #[test]
    fn test_build_page_rows_visibility() {
        let pages: Vec<Page> =
            load_data(include_str!("../../tebex_headless/tests/fixtures/pages.json"));
        let rows = build_page_rows(&pages);
        assert_eq!(rows[0].visible, "yes");
        assert_eq!(rows[1].visible, "no");
    }

    #[test]
    fn test_build_webstore_summary() {
        let webstore: Webstore =
            load_data(include_str!("../../tebex_headless/tests/fixtures/webstore.json"));
        let rows = build_webstore_summary(&webstore);
        assert_eq!(rows[1].value, "Example Network");
        assert_eq!(rows[5].value, "2021-06-10");
    }
}
