//! Message templates: stored, parameterizable JSON payloads bound to one
//! delivery channel.

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{GlobalStatus, Page, PageQuery, TemplateApp, TemplateItem, WithUid};

pub const LIST_PATH: &str = "/v1/templates";
pub const CREATE_PATH: &str = "/v1/template";

#[must_use]
pub fn item_path(uid: &str) -> String {
    format!("/v1/template/{}", uid.trim())
}

#[must_use]
pub fn status_path(uid: &str) -> String {
    format!("/v1/template/{}/status", uid.trim())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTemplateQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<TemplateApp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    pub name: String,
    pub app: TemplateApp,
    pub json_data: String,
}

#[derive(Debug, Serialize)]
struct UpdateStatusBody<'a> {
    uid: &'a str,
    status: GlobalStatus,
}

#[derive(Debug)]
pub struct TemplateService<'a> {
    client: &'a ApiClient,
}

impl<'a> TemplateService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListTemplateQuery) -> Result<Page<TemplateItem>, ApiError> {
        self.client.get_json_query(LIST_PATH, query).await
    }

    pub async fn get(&self, uid: &str) -> Result<TemplateItem, ApiError> {
        self.client.get_json(&item_path(uid)).await
    }

    pub async fn create(&self, request: &TemplateRequest) -> Result<(), ApiError> {
        self.client.post_ack(CREATE_PATH, request).await
    }

    pub async fn update(&self, uid: &str, request: &TemplateRequest) -> Result<(), ApiError> {
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
