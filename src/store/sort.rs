//! Ordering of a display collection.

use crate::model::{Product, SortKey};
use std::cmp::Ordering;

/// Direction of a sort click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

/// Three-way comparison on one column: `Less` if `a < b`, `Greater` if `a > b`,
/// `Equal` otherwise. NaN prices equal each other and order after every number.
pub fn compare_by(key: SortKey, a: &Product, b: &Product) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Category => a.category.cmp(&b.category),
        SortKey::Price => compare_price(a.price, b.price),
        SortKey::Stock => a.stock.cmp(&b.stock),
    }
}

// `sort_by` needs a total order.
fn compare_price(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Returns `products` reordered by `key`. The sort is stable in both directions.
pub fn sorted(products: &[Product], key: SortKey, direction: SortDirection) -> Vec<Product> {
    let mut out = products.to_vec();
    match direction {
        SortDirection::Ascending => out.sort_by(|a, b| compare_by(key, a, b)),
        SortDirection::Descending => out.sort_by(|a, b| compare_by(key, b, a)),
    }
    out
}
