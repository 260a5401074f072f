use std::str::FromStr;

use crate::Error;

/// Top-level path root of a Headless API endpoint.
///
/// Store-scoped calls go through `accounts/{webstore}`; calls that act on a
/// basket the caller already holds go through `baskets/{ident}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Accounts,
    Baskets,
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Route::Accounts => "accounts",
                Route::Baskets => "baskets",
            }
        )
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accounts" => Ok(Route::Accounts),
            "baskets" => Ok(Route::Baskets),
            other => Err(Error::InvalidInput(format!("unknown route '{}'", other))),
        }
    }
}
