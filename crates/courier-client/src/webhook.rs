//! Webhook sender configurations.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{
    GlobalStatus, HttpMethod, Page, PageQuery, WebhookApp, WebhookConfigItem, WithUid,
};

pub const LIST_PATH: &str = "/v1/webhook/configs";
pub const CREATE_PATH: &str = "/v1/webhook/config";

#[must_use]
pub fn item_path(uid: &str) -> String {
    format!("/v1/webhook/config/{}", uid.trim())
}

#[must_use]
pub fn status_path(uid: &str) -> String {
    format!("/v1/webhook/config/{}/status", uid.trim())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWebhookQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<WebhookApp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookConfigRequest {
    pub app: WebhookApp,
    pub name: String,
    pub url: String,
    pub method: HttpMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

#[derive(Debug, Serialize)]
struct UpdateStatusBody<'a> {
    uid: &'a str,
    status: GlobalStatus,
}

#[derive(Debug)]
pub struct WebhookConfigService<'a> {
    client: &'a ApiClient,
}

impl<'a> WebhookConfigService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        query: &ListWebhookQuery,
    ) -> Result<Page<WebhookConfigItem>, ApiError> {
        self.client.get_json_query(LIST_PATH, query).await
    }

    pub async fn get(&self, uid: &str) -> Result<WebhookConfigItem, ApiError> {
        self.client.get_json(&item_path(uid)).await
    }

    pub async fn create(&self, request: &WebhookConfigRequest) -> Result<(), ApiError> {
        self.client.post_ack(CREATE_PATH, request).await
    }

    pub async fn update(
        &self,
        uid: &str,
        request: &WebhookConfigRequest,
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
