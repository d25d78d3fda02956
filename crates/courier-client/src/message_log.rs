//! Message-send logs and their retry/cancel transitions.

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{MessageLogItem, MessageStatus, MessageType, Page};

pub const LIST_PATH: &str = "/v1/message-logs";

#[must_use]
pub fn item_path(uid: &str) -> String {
    format!("/v1/message-log/{}", uid.trim())
}

#[must_use]
pub fn action_path(uid: &str, action: LogAction) -> String {
    format!("/v1/message-log/{}/{}", uid.trim(), action.segment())
}

/// The two log state transitions an operator can request. Eligibility is
/// enforced server-side; [`LogAction::permitted`] only gates what the
/// console offers, based on the last-known status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    Retry,
    Cancel,
}

impl LogAction {
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Retry => "retry",
            Self::Cancel => "cancel",
        }
    }

    #[must_use]
    pub fn permitted(self, status: MessageStatus) -> bool {
        match self {
            Self::Retry => status == MessageStatus::Failed,
            Self::Cancel => status == MessageStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMessageLogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at_unix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at_unix: Option<String>,
}

#[derive(Debug, Serialize)]
struct TransitionBody<'a> {
    uid: &'a str,
}

#[derive(Debug)]
pub struct MessageLogService<'a> {
    client: &'a ApiClient,
}

impl<'a> MessageLogService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        query: &ListMessageLogQuery,
    ) -> Result<Page<MessageLogItem>, ApiError> {
        self.client.get_json_query(LIST_PATH, query).await
    }

    pub async fn get(&self, uid: &str) -> Result<MessageLogItem, ApiError> {
        self.client.get_json(&item_path(uid)).await
    }

    pub async fn transition(&self, uid: &str, action: LogAction) -> Result<(), ApiError> {
        let body = TransitionBody { uid };
        self.client.put_ack(&action_path(uid, action), &body).await
    }

    pub async fn retry(&self, uid: &str) -> Result<(), ApiError> {
        self.transition(uid, LogAction::Retry).await
    }

    pub async fn cancel(&self, uid: &str) -> Result<(), ApiError> {
        self.transition(uid, LogAction::Cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers_are_deterministic() {
        assert_eq!(item_path("log_1"), "/v1/message-log/log_1");
        assert_eq!(
            action_path("log_1", LogAction::Retry),
            "/v1/message-log/log_1/retry"
        );
        assert_eq!(
            action_path("log_1", LogAction::Cancel),
            "/v1/message-log/log_1/cancel"
        );
    }

    #[test]
    fn retry_is_permitted_only_from_failed() {
        assert!(LogAction::Retry.permitted(MessageStatus::Failed));
        assert!(!LogAction::Retry.permitted(MessageStatus::Pending));
        assert!(!LogAction::Retry.permitted(MessageStatus::Sent));
        assert!(!LogAction::Retry.permitted(MessageStatus::Cancelled));
    }

    #[test]
    fn cancel_is_permitted_only_from_pending() {
        assert!(LogAction::Cancel.permitted(MessageStatus::Pending));
        assert!(!LogAction::Cancel.permitted(MessageStatus::Failed));
        assert!(!LogAction::Cancel.permitted(MessageStatus::Sent));
        assert!(!LogAction::Cancel.permitted(MessageStatus::Cancelled));
    }

    #[test]
    fn list_query_uses_wire_parameter_names() {
        let query = ListMessageLogQuery {
            page: Some(1),
            page_size: Some(20),
            message_type: Some(MessageType::Email),
            status: Some(MessageStatus::Failed),
            start_at_unix: Some("1754000000".to_string()),
            end_at_unix: None,
        };
        assert_eq!(
            serde_json::to_value(&query).expect("serialize"),
            serde_json::json!({
                "page": 1,
                "pageSize": 20,
                "type": "EMAIL",
                "status": "FAILED",
                "startAtUnix": "1754000000"
            })
        );
    }
}
