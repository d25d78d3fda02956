//! Namespace management. Namespaces are keyed by `name` rather than a
//! server-assigned uid, and their endpoints are exempt from namespace
//! scoping.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{GlobalStatus, NamespaceItem, Page, PageQuery};

pub const LIST_PATH: &str = "/v1/namespaces";
pub const CREATE_PATH: &str = "/v1/namespace";

#[must_use]
pub fn item_path(name: &str) -> String {
    format!("/v1/namespace/{}", name.trim())
}

#[must_use]
pub fn status_path(name: &str) -> String {
    format!("/v1/namespace/{}/status", name.trim())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNamespaceRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNamespaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Serialize)]
struct UpdateNamespaceBody<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a BTreeMap<String, String>>,
}

#[derive(Debug, Serialize)]
struct UpdateNamespaceStatusBody<'a> {
    name: &'a str,
    status: GlobalStatus,
}

#[derive(Debug)]
pub struct NamespaceService<'a> {
    client: &'a ApiClient,
}

impl<'a> NamespaceService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &PageQuery) -> Result<Page<NamespaceItem>, ApiError> {
        self.client.get_json_query(LIST_PATH, query).await
    }

    pub async fn get(&self, name: &str) -> Result<NamespaceItem, ApiError> {
        self.client.get_json(&item_path(name)).await
    }

    pub async fn get_optional(&self, name: &str) -> Result<Option<NamespaceItem>, ApiError> {
        self.client.get_optional_json(&item_path(name)).await
    }

    pub async fn create(&self, request: &CreateNamespaceRequest) -> Result<(), ApiError> {
        self.client.post_ack(CREATE_PATH, request).await
    }

    pub async fn update(
        &self,
        name: &str,
        request: &UpdateNamespaceRequest,
    ) -> Result<(), ApiError> {
        let body = UpdateNamespaceBody {
            name,
            metadata: request.metadata.as_ref(),
        };
        self.client.put_ack(&item_path(name), &body).await
    }

    pub async fn update_status(&self, name: &str, status: GlobalStatus) -> Result<(), ApiError> {
        let body = UpdateNamespaceStatusBody { name, status };
        self.client.put_ack(&status_path(name), &body).await
    }

    pub async fn delete(&self, name: &str) -> Result<(), ApiError> {
        self.client.delete_ack(&item_path(name)).await
    }
}
