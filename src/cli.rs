//! # Command Line
//!
//! `clap` front end for the `inventory` binary. Each subcommand maps onto the UI
//! events a user would produce on the product page.

use crate::config::{Config, DEFAULT_API_URL, DEFAULT_CHANNEL_CAPACITY, DEFAULT_TIMEOUT_SECS};
use crate::model::SortKey;
use crate::store::FilterMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::time::Duration;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "inventory", version, about = "Browse and edit the product inventory")]
pub struct Cli {
    /// Base URL of the Products API.
    #[arg(long, global = true, env = "INVENTORY_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "INVENTORY_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Accept self-signed TLS certificates.
    #[arg(long, global = true, env = "INVENTORY_INSECURE")]
    pub insecure: bool,

    /// Apply the name and category filters together instead of only the last one typed.
    #[arg(long, global = true, env = "INVENTORY_COMPOSE_FILTERS")]
    pub compose_filters: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show products, optionally filtered and sorted.
    List(ListArgs),
    /// Add a product.
    Add(AddArgs),
    /// Change fields of an existing product.
    Edit(EditArgs),
    /// Delete a product.
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring of the name.
    #[arg(long)]
    pub name: Option<String>,
    /// Case-insensitive substring of the category.
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, value_enum)]
    pub sort: Option<SortColumn>,
    /// Sort descending.
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

/// Column names accepted by `list --sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortColumn {
    Name,
    Category,
    Price,
    Stock,
}

impl From<SortColumn> for SortKey {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Name => SortKey::Name,
            SortColumn::Category => SortKey::Category,
            SortColumn::Price => SortKey::Price,
            SortColumn::Stock => SortKey::Stock,
        }
    }
}

/// Form values are taken as typed; numbers are coerced the way the form does it.
#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub category: String,
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,
    #[arg(long, allow_hyphen_values = true)]
    pub stock: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub stock: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: i64,
    /// Skip the confirmation prompt.
    #[arg(long, short)]
    pub yes: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            api_base: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            accept_invalid_certs: self.insecure,
            filter_mode: if self.compose_filters {
                FilterMode::Intersect
            } else {
                FilterMode::Latest
            },
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}
