//! Catalog categories.

use serde::{Deserialize, Serialize};

use super::Package;

/// Numeric identifier for a category.
pub type CategoryID = i64;

/// How the storefront lays out a category's packages.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    Grid,
    List,
}

impl std::fmt::Display for DisplayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DisplayType::Grid => "grid",
                DisplayType::List => "list",
            }
        )
    }
}

/// A category returned by the `/categories` endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryID,
    pub name: String,
    pub description: String,

    /// Enclosing category. Categories form a tree through this link.
    pub parent: Option<Box<Category>>,

    /// Position among sibling categories.
    pub order: i64,

    /// Empty unless the request asked for `includePackages`.
    pub packages: Vec<Package>,

    pub display_type: DisplayType,
    pub slug: Option<String>,
}

impl Category {
    /// Walks the `parent` chain up to the root, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Category> {
        std::iter::successors(self.parent.as_deref(), |c| c.parent.as_deref())
    }
}
