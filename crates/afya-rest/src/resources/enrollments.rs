//! Enrollment endpoints.

use tracing::{debug, instrument};

use afya_core::Result;
use afya_core::model::{Enrollment, NewEnrollment};

use crate::client::RestClient;
use crate::endpoints;

/// Typed access to enrollments.
///
/// The backend only exposes creation; enrollments are read through the
/// client and program detail records they appear in.
#[derive(Debug, Clone)]
pub struct Enrollments {
    client: RestClient,
}

impl Enrollments {
    /// Create a service over the given client.
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Enroll a client into a program.
    #[instrument(skip(self, new))]
    pub async fn create(&self, new: &NewEnrollment) -> Result<Enrollment> {
        debug!(client = %new.client, program = %new.program, "Enrolling client");
        self.client.post(endpoints::ENROLLMENT_CREATE, new).await
    }
}
