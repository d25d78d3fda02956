//! Email (SMTP) sender configurations.

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{EmailConfigItem, GlobalStatus, Page, PageQuery, WithUid};

pub const LIST_PATH: &str = "/v1/email/configs";
pub const CREATE_PATH: &str = "/v1/email/config";

#[must_use]
pub fn item_path(uid: &str) -> String {
    format!("/v1/email/config/{}", uid.trim())
}

#[must_use]
pub fn status_path(uid: &str) -> String {
    format!("/v1/email/config/{}/status", uid.trim())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmailConfigRequest {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmailConfigRequest {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    /// Omitted to keep the stored password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
struct UpdateStatusBody<'a> {
    uid: &'a str,
    status: GlobalStatus,
}

#[derive(Debug)]
pub struct EmailConfigService<'a> {
    client: &'a ApiClient,
}

impl<'a> EmailConfigService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &PageQuery) -> Result<Page<EmailConfigItem>, ApiError> {
        self.client.get_json_query(LIST_PATH, query).await
    }

    pub async fn get(&self, uid: &str) -> Result<EmailConfigItem, ApiError> {
        self.client.get_json(&item_path(uid)).await
    }

    pub async fn create(&self, request: &CreateEmailConfigRequest) -> Result<(), ApiError> {
        self.client.post_ack(CREATE_PATH, request).await
    }

    pub async fn update(
        &self,
        uid: &str,
        request: &UpdateEmailConfigRequest,
    ) -> Result<(), ApiError> {
        let body = WithUid { uid, data: request };
        self.client.put_ack(&item_path(uid), &body).await
    }

    pub async fn update_status(&self, uid: &str, status: GlobalStatus) -> Result<(), ApiError> {
        let body = UpdateStatusBody { uid, status };
        self.client.put_ack(&status_path(uid), &body).await
    }

    pub async fn delete(&self, uid: &str) -> Result<(), ApiError> {
        self.client.delete_ack(&item_path(uid)).await
    }
}
