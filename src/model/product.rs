//! Represents a product in the inventory, as returned by the Products API.
//!
//! # Wire Format
//! The API speaks camelCase JSON. Every field is a single word, so the derived
//! serde names already match, but the attribute keeps that explicit.
//!
//! See [`ProductDraft`] for the body sent on create and update.
use serde::{Deserialize, Serialize, Serializer};

use std::fmt::Display;

/// Type-safe identifier for Products. Assigned by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the API
    /// * `name` - Product name
    /// * `category` - Free-form category label
    /// * `price` - Unit price
    /// * `stock` - Quantity on hand
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock,
        }
    }
}

/// Body for Product creation and updates.
///
/// `price` and `stock` hold whatever the form text coerced to, which may be NaN.
/// Both are written as JSON numbers the way a browser writes them: whole values
/// without a fractional part (`5`, not `5.0`) and non-finite values as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    #[serde(serialize_with = "js_number")]
    pub price: f64,
    #[serde(serialize_with = "js_number")]
    pub stock: f64,
}

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn js_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let value = *value;
    if !value.is_finite() {
        serializer.serialize_none()
    } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}

/// Column a display collection can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Category,
    Price,
    Stock,
}
