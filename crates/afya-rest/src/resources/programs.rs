//! Health program endpoints.

use tracing::{debug, instrument};
use uuid::Uuid;

use afya_core::Result;
use afya_core::model::{NewProgram, Program, ProgramUpdate};

use crate::client::RestClient;
use crate::endpoints;

/// Typed access to the program registry.
///
/// Mutations return the record as the backend stored it; callers that
/// maintain cross-view caches publish the returned record on the event bus
/// so sibling views can merge it without a refetch.
#[derive(Debug, Clone)]
pub struct Programs {
    client: RestClient,
}

impl Programs {
    /// Create a service over the given client.
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Fetch all programs.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Program>> {
        debug!("Listing programs");
        self.client.get(endpoints::PROGRAMS).await
    }

    /// Fetch one program by identifier, including its enrolled clients.
    #[instrument(skip(self))]
    pub async fn get(&self, uuid: Uuid) -> Result<Program> {
        debug!("Fetching program");
        self.client.get(&endpoints::program(uuid)).await
    }

    /// Create a new program.
    #[instrument(skip(self, new))]
    pub async fn create(&self, new: &NewProgram) -> Result<Program> {
        debug!("Creating program");
        self.client.post(endpoints::PROGRAM_CREATE, new).await
    }

    /// Edit a program's description.
    #[instrument(skip(self, update))]
    pub async fn update(&self, uuid: Uuid, update: &ProgramUpdate) -> Result<Program> {
        debug!("Updating program");
        self.client
            .patch(&endpoints::program_update(uuid), update)
            .await
    }
}
