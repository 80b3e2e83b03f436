//! # HTTP Client
//!
//! [`ProductApi`] over HTTPS with `reqwest`.

use super::{ApiError, ProductApi};
use crate::config::Config;
use crate::model::{Product, ProductDraft, ProductId};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info, instrument};
use url::Url;

const PRODUCTS_PATH: &str = "api/Products";
const BODY_SNIPPET_CHARS: usize = 200;

/// Client for the Products endpoints under a configured base URL.
#[derive(Clone)]
pub struct HttpProductApi {
    http: Client,
    products_url: Url,
    item_url: Url,
}

impl HttpProductApi {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        Self::with_client(http, &config.api_base)
    }

    /// Builds the client around an existing `reqwest::Client`.
    pub fn with_client(http: Client, base: &Url) -> Result<Self, ApiError> {
        let products_url = products_url(base)?;
        let mut item_url = products_url.clone();
        item_url
            .path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(base.to_string()))?
            .push("id");

        Ok(Self {
            http,
            products_url,
            item_url,
        })
    }

    pub fn products_url(&self) -> &Url {
        &self.products_url
    }

    /// `{base}/api/Products/id?id={id}`
    pub fn item_url(&self, id: ProductId) -> Url {
        let mut url = self.item_url.clone();
        url.query_pairs_mut().append_pair("id", &id.to_string());
        url
    }
}

/// Resolves the collection endpoint, treating `base` as a directory even when its
/// path has no trailing slash.
fn products_url(base: &Url) -> Result<Url, ApiError> {
    let mut dir = base.clone();
    if !dir.path().ends_with('/') {
        let path = format!("{}/", dir.path());
        dir.set_path(&path);
    }
    Ok(dir.join(PRODUCTS_PATH)?)
}

/// Turns a non-2xx response into [`ApiError::Rejected`], keeping the start of the body.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Rejected {
        status: status.as_u16(),
        body: body.chars().take(BODY_SNIPPET_CHARS).collect(),
    })
}

#[async_trait]
impl ProductApi for HttpProductApi {
    #[instrument(skip(self), fields(url = %self.products_url))]
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        debug!("Sending request");
        let response = self.http.get(self.products_url.clone()).send().await?;
        let products: Vec<Product> = ensure_success(response).await?.json().await?;
        info!(count = products.len(), "Listed products");
        Ok(products)
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: &ProductDraft) -> Result<(), ApiError> {
        debug!(?draft, "Sending request");
        let response = self
            .http
            .post(self.products_url.clone())
            .json(draft)
            .send()
            .await?;
        ensure_success(response).await?;
        info!("Created product");
        Ok(())
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<(), ApiError> {
        debug!(?draft, "Sending request");
        let response = self.http.put(self.item_url(id)).json(draft).send().await?;
        ensure_success(response).await?;
        info!("Updated product");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ProductId) -> Result<(), ApiError> {
        debug!("Sending request");
        let response = self.http.delete(self.item_url(id)).send().await?;
        let status = ensure_success(response).await?.status();
        if status != StatusCode::OK {
            return Err(ApiError::UnexpectedStatus(status.as_u16()));
        }
        info!("Deleted product");
        Ok(())
    }
}
