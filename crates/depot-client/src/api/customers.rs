//! Customers API.

use crate::client::DepotClient;
use crate::error::Result;
use crate::types::Customer;

/// Customers API client.
pub struct CustomersApi {
    client: DepotClient,
}

impl CustomersApi {
    pub(crate) fn new(client: DepotClient) -> Self {
        Self { client }
    }

    /// List all customers.
    pub async fn list(&self) -> Result<Vec<Customer>> {
        self.client.get("customers").await
    }

    /// Create a customer.
    pub async fn create(&self, customer: &Customer) -> Result<Customer> {
        self.client.post("customers", customer).await
    }

    /// Update a customer.
    pub async fn update(&self, id: i64, customer: &Customer) -> Result<Customer> {
        self.client.put(&format!("customers/{}", id), customer).await
    }

    /// Delete a customer.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("customers/{}", id)).await
    }
}
