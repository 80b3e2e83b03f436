//! Presentation collaborators: notifications, delete confirmation and the product
//! table.

pub mod confirm;
pub mod notify;
pub mod table;

pub use confirm::*;
pub use notify::*;
pub use table::*;
