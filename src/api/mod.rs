//! # Products API
//!
//! The remote CRUD service is an external collaborator. The controller only sees the
//! [`ProductApi`] trait, so it runs the same against the real HTTP service
//! ([`HttpProductApi`]) and against the scripted [`mock::MockProductApi`] in tests.
//!
//! | Operation | Request | Success |
//! |-----------|---------|---------|
//! | [`list`](ProductApi::list) | `GET /api/Products` | any 2xx, JSON array |
//! | [`create`](ProductApi::create) | `POST /api/Products` | any 2xx |
//! | [`update`](ProductApi::update) | `PUT /api/Products/id?id={id}` | any 2xx |
//! | [`delete`](ProductApi::delete) | `DELETE /api/Products/id?id={id}` | exactly 200 |

pub mod error;
pub mod http;
pub mod mock;

pub use error::*;
pub use http::*;

use crate::model::{Product, ProductDraft, ProductId};
use async_trait::async_trait;

#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Fetches every product, in the order the service returns them.
    async fn list(&self) -> Result<Vec<Product>, ApiError>;

    /// Creates a product. The service assigns the id.
    async fn create(&self, draft: &ProductDraft) -> Result<(), ApiError>;

    /// Replaces the fields of product `id`.
    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<(), ApiError>;

    /// Deletes product `id`.
    async fn delete(&self, id: ProductId) -> Result<(), ApiError>;
}
