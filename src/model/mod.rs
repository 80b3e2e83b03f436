//! Pure data structures shared by the store, the edit session and the API client.

pub mod product;

pub use product::*;
