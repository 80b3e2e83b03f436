//! # Product Store
//!
//! Owns the **master collection** (every product as last confirmed by the API) and
//! the **display collection** (the filtered and sorted view the table renders).
//!
//! ## Invariants
//!
//! - The display collection is always a subset, by id, of the master collection.
//!   It is only ever rebuilt from master (load, filter) or reordered (sort).
//! - With both filter boxes empty after a load or filter change, display equals
//!   master in master order.
//!
//! ## Load Generations
//!
//! Nothing cancels an in-flight `GET`, so a slow response could land after a newer
//! one. Every load takes the next generation number from [`ProductStore::begin_load`]
//! and [`ProductStore::accept_load`] only takes the response carrying the most
//! recently issued number.

pub mod filter;
pub mod sort;

pub use filter::*;
pub use sort::*;

use crate::model::{Product, ProductId, SortKey};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    master: Vec<Product>,
    display: Vec<Product>,
    filters: FilterState,
    mode: FilterMode,
    generation: u64,
}

impl ProductStore {
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn master(&self) -> &[Product] {
        &self.master
    }

    pub fn display(&self) -> &[Product] {
        &self.display
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Looks a product up in the master collection.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.master.iter().find(|p| p.id == id)
    }

    /// Reserves the generation number for a new load request.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Replaces master and display with a load result, in server order.
    ///
    /// Returns `false` and leaves the store untouched when `generation` is not the
    /// most recently issued one.
    pub fn accept_load(&mut self, generation: u64, products: Vec<Product>) -> bool {
        if generation != self.generation {
            debug!(generation, latest = self.generation, "Dropping stale load");
            return false;
        }
        self.display = products.clone();
        self.master = products;
        true
    }

    /// Records the new text of one filter box and re-derives the display
    /// collection from master.
    pub fn apply_filter(&mut self, kind: FilterKind, text: impl Into<String>) {
        self.filters.set(kind, text);
        self.display = filter::derive(&self.master, &self.filters, kind, self.mode);
    }

    /// Reorders the current display collection.
    pub fn sort(&mut self, key: SortKey, direction: SortDirection) {
        self.display = sort::sorted(&self.display, key, direction);
    }
}
