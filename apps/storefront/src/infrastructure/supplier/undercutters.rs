//! UnderCutters supplier HTTP client.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use crate::application::dto::ProductDto;
use crate::application::ports::{SupplierCatalogPort, SupplierError};
use crate::config::SupplierConfig;

/// HTTP client for the UnderCutters product API.
///
/// Endpoints are `{base_url}/products` and `{base_url}/products/{id}`.
#[derive(Debug, Clone)]
pub struct UnderCuttersClient {
    client: Client,
    base_url: String,
}

impl UnderCuttersClient {
    /// Create a new client from config.
    ///
    /// # Errors
    ///
    /// Returns `SupplierError::Http` if the HTTP client cannot be built.
    pub fn new(config: &SupplierConfig) -> Result<Self, SupplierError> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn product_url(&self, id: i64) -> String {
        format!("{}/products/{id}", self.base_url)
    }
}

fn ensure_success(response: Response) -> Result<Response, SupplierError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::warn!(status = status.as_u16(), url = %response.url(), "Supplier request failed");
        Err(SupplierError::UnexpectedStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

#[async_trait]
impl SupplierCatalogPort for UnderCuttersClient {
    async fn get_products(&self) -> Result<Vec<ProductDto>, SupplierError> {
        let response = self.client.get(self.products_url()).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    async fn get_product_by_id(&self, id: i64) -> Result<Option<ProductDto>, SupplierError> {
        let response = self.client.get(self.product_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(ensure_success(response)?.json().await?))
    }

    async fn add_product(&self, product: ProductDto) -> Result<ProductDto, SupplierError> {
        let response = self
            .client
            .post(self.products_url())
            .json(&product)
            .send()
            .await?;
        Ok(ensure_success(response)?.json().await?)
    }

    async fn update_product(&self, product: &ProductDto) -> Result<(), SupplierError> {
        let response = self
            .client
            .put(self.product_url(product.id))
            .json(product)
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    async fn delete_product(&self, id: i64) -> Result<(), SupplierError> {
        let response = self.client.delete(self.product_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        ensure_success(response)?;
        Ok(())
    }
}
