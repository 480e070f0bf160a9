//! Activity feed endpoints.

use tracing::{debug, instrument};

use afya_core::Result;
use afya_core::model::{ActivityPage, ActivityQuery};

use crate::client::RestClient;
use crate::endpoints;

/// Typed access to the activity feed.
#[derive(Debug, Clone)]
pub struct Activities {
    client: RestClient,
}

impl Activities {
    /// Create a service over the given client.
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Fetch the most recent activity, newest first.
    #[instrument(skip(self))]
    pub async fn list(&self, query: &ActivityQuery) -> Result<ActivityPage> {
        debug!("Fetching activity feed");

        if query.is_empty() {
            return self.client.get(endpoints::ACTIVITIES).await;
        }

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        for entity_type in &query.entity_types {
            params.push(("entity_type", entity_type.clone()));
        }
        if let Some(uuid) = &query.entity_uuid {
            params.push(("entity_uuid", uuid.clone()));
        }

        self.client
            .get_with_query(endpoints::ACTIVITIES, &params)
            .await
    }

    /// Fetch the activity trail of one entity.
    #[instrument(skip(self))]
    pub async fn for_entity(&self, entity_type: &str, entity_uuid: &str) -> Result<ActivityPage> {
        debug!("Fetching entity activity");

        let query = ActivityQuery {
            entity_types: vec![entity_type.to_string()],
            entity_uuid: Some(entity_uuid.to_string()),
            ..Default::default()
        };
        self.list(&query).await
    }

    /// Fetch activity about clients and programs only.
    ///
    /// The feed shown on the dashboard overview.
    #[instrument(skip(self))]
    pub async fn for_clients_and_programs(&self, limit: Option<u32>) -> Result<ActivityPage> {
        let query = ActivityQuery {
            limit,
            entity_types: vec!["client".to_string(), "program".to_string()],
            ..Default::default()
        };
        self.list(&query).await
    }
}
