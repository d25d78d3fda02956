//! Service health probe. Unversioned and namespace-exempt.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::HealthReply;

pub const HEALTH_PATH: &str = "/health";

#[derive(Debug)]
pub struct HealthService<'a> {
    client: &'a ApiClient,
}

impl<'a> HealthService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn check(&self) -> Result<HealthReply, ApiError> {
        self.client.get_json(HEALTH_PATH).await
    }
}
