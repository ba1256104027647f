//! Products API.

use crate::client::DepotClient;
use crate::error::Result;
use crate::types::Product;

/// Products API client.
pub struct ProductsApi {
    client: DepotClient,
}

impl ProductsApi {
    pub(crate) fn new(client: DepotClient) -> Self {
        Self { client }
    }

    /// List all products.
    pub async fn list(&self) -> Result<Vec<Product>> {
        self.client.get("products").await
    }

    /// Create a product.
    pub async fn create(&self, product: &Product) -> Result<Product> {
        self.client.post("products", product).await
    }

    /// Delete a product.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("products/{}", id)).await
    }
}
