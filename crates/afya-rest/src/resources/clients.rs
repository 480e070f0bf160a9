//! Client registry endpoints.

use tracing::{debug, instrument};
use uuid::Uuid;

use afya_core::Result;
use afya_core::model::{Client, NewClient};

use crate::client::RestClient;
use crate::endpoints;

/// Typed access to the client registry.
#[derive(Debug, Clone)]
pub struct Clients {
    client: RestClient,
}

impl Clients {
    /// Create a service over the given client.
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Fetch all clients.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Client>> {
        debug!("Listing clients");
        self.client.get(endpoints::CLIENTS).await
    }

    /// Fetch one client by identifier.
    #[instrument(skip(self))]
    pub async fn get(&self, uuid: Uuid) -> Result<Client> {
        debug!("Fetching client");
        self.client.get(&endpoints::client(uuid)).await
    }

    /// Register a new client.
    ///
    /// Returns the created record, including the server-assigned
    /// identifier and computed age.
    #[instrument(skip(self, new))]
    pub async fn create(&self, new: &NewClient) -> Result<Client> {
        debug!("Registering client");
        self.client.post(endpoints::CLIENT_CREATE, new).await
    }

    /// Delete a client by identifier.
    #[instrument(skip(self))]
    pub async fn delete(&self, uuid: Uuid) -> Result<()> {
        debug!("Deleting client");
        self.client.delete(&endpoints::client(uuid)).await
    }
}
