//! One-shot dispatch requests, keyed by the sender configuration uid.
//!
//! These endpoints acknowledge acceptance only; the resulting message-log
//! entry shows up in the log listing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{SendReply, WithUid};

#[must_use]
pub fn email_path(uid: &str) -> String {
    format!("/v1/sender/email/{}", uid.trim())
}

#[must_use]
pub fn email_template_path(uid: &str) -> String {
    format!("/v1/sender/email/{}/template", uid.trim())
}

#[must_use]
pub fn webhook_path(uid: &str) -> String {
    format!("/v1/sender/webhook/{}", uid.trim())
}

#[must_use]
pub fn webhook_template_path(uid: &str) -> String {
    format!("/v1/sender/webhook/{}/template", uid.trim())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    pub subject: String,
    pub body: String,
    pub to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailWithTemplateRequest {
    #[serde(rename = "templateUID")]
    pub template_uid: String,
    pub json_data: String,
    pub to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendWebhookRequest {
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendWebhookWithTemplateRequest {
    #[serde(rename = "templateUID")]
    pub template_uid: String,
    pub json_data: String,
}

#[derive(Debug)]
pub struct SenderService<'a> {
    client: &'a ApiClient,
}

impl<'a> SenderService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn send_email(
        &self,
        uid: &str,
        request: &SendEmailRequest,
    ) -> Result<SendReply, ApiError> {
        let body = WithUid { uid, data: request };
        self.client.post_json(&email_path(uid), &body).await
    }

    pub async fn send_email_with_template(
        &self,
        uid: &str,
        request: &SendEmailWithTemplateRequest,
    ) -> Result<SendReply, ApiError> {
        let body = WithUid { uid, data: request };
        self.client.post_json(&email_template_path(uid), &body).await
    }

    pub async fn send_webhook(
        &self,
        uid: &str,
        request: &SendWebhookRequest,
    ) -> Result<SendReply, ApiError> {
        let body = WithUid { uid, data: request };
        self.client.post_json(&webhook_path(uid), &body).await
    }

    pub async fn send_webhook_with_template(
        &self,
        uid: &str,
        request: &SendWebhookWithTemplateRequest,
    ) -> Result<SendReply, ApiError> {
        let body = WithUid { uid, data: request };
        self.client
            .post_json(&webhook_template_path(uid), &body)
            .await
    }
}
