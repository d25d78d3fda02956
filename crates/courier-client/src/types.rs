//! Wire types shared across the service modules.
//!
//! The backend exposed two incompatible revisions of this contract; the
//! canonical one here uses string status enums and echoes identifiers in
//! mutation bodies. Responses are parsed into these types at the client
//! boundary, so a malformed server payload fails the call instead of
//! leaking into rendering code.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlobalStatus {
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    Email,
    Webhook,
    Sms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageStatus {
    Pending,
    Sent,
    Failed,
    Cancelled,
}

/// Webhook provider variant carried by webhook configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookApp {
    Dingtalk,
    Wechat,
    Feishu,
    Other,
}

/// Delivery channel a template is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateApp {
    Email,
    WebhookDingtalk,
    WebhookWechat,
    WebhookFeishu,
    WebhookOther,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

macro_rules! impl_from_str {
    ($ty:ident, $kind:literal, { $($name:literal => $variant:ident),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw.trim().to_ascii_uppercase().as_str() {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: $kind,
                        value: raw.to_string(),
                    }),
                }
            }
        }
    };
}

impl_from_str!(GlobalStatus, "status", {
    "ENABLED" => Enabled,
    "DISABLED" => Disabled,
});

impl_from_str!(MessageType, "message type", {
    "EMAIL" => Email,
    "WEBHOOK" => Webhook,
    "SMS" => Sms,
});

impl_from_str!(MessageStatus, "message status", {
    "PENDING" => Pending,
    "SENT" => Sent,
    "FAILED" => Failed,
    "CANCELLED" => Cancelled,
});

impl_from_str!(WebhookApp, "webhook app", {
    "DINGTALK" => Dingtalk,
    "WECHAT" => Wechat,
    "FEISHU" => Feishu,
    "OTHER" => Other,
});

impl_from_str!(TemplateApp, "template app", {
    "EMAIL" => Email,
    "WEBHOOK_DINGTALK" => WebhookDingtalk,
    "WEBHOOK_WECHAT" => WebhookWechat,
    "WEBHOOK_FEISHU" => WebhookFeishu,
    "WEBHOOK_OTHER" => WebhookOther,
});

impl_from_str!(HttpMethod, "http method", {
    "GET" => Get,
    "POST" => Post,
    "PUT" => Put,
    "DELETE" => Delete,
    "PATCH" => Patch,
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceItem {
    pub name: String,
    #[serde(default)]
    pub metadata: Option<BTreeMap<String, String>>,
    pub status: GlobalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailConfigItem {
    pub uid: String,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    /// Servers omit the stored password on reads.
    #[serde(default)]
    pub password: Option<String>,
    pub status: GlobalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookConfigItem {
    pub uid: String,
    pub app: WebhookApp,
    pub name: String,
    pub url: String,
    pub method: HttpMethod,
    #[serde(default)]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub secret: Option<String>,
    pub status: GlobalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateItem {
    pub uid: String,
    pub name: String,
    pub app: TemplateApp,
    pub json_data: String,
    pub status: GlobalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageLogItem {
    pub uid: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub status: MessageStatus,
    #[serde(default)]
    pub retry_count: u32,
    #[serde(default)]
    pub last_error: Option<String>,
    pub send_at: DateTime<Utc>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReply {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// One-shot dispatch acknowledgement. The created message-log entry is not
/// returned; operators find it in the log listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReply {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Common pagination/filter parameters forwarded to the server as query
/// parameters. Unset fields are omitted from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GlobalStatus>,
}

impl PageQuery {
    #[must_use]
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..Self::default()
        }
    }
}

/// Mutation bodies echo the path identifier so the server can validate
/// path/body consistency; serializes as `{ uid, ...data }`.
#[derive(Debug, Serialize)]
pub(crate) struct WithUid<'a, T: Serialize> {
    pub uid: &'a str,
    #[serde(flatten)]
    pub data: &'a T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_enum_uses_wire_strings() {
        assert_eq!(
            serde_json::to_value(GlobalStatus::Enabled).expect("serialize"),
            json!("ENABLED")
        );
        let parsed: GlobalStatus =
            serde_json::from_value(json!("DISABLED")).expect("deserialize");
        assert_eq!(parsed, GlobalStatus::Disabled);
    }

    #[test]
    fn template_app_uses_channel_prefixed_names() {
        assert_eq!(
            serde_json::to_value(TemplateApp::WebhookFeishu).expect("serialize"),
            json!("WEBHOOK_FEISHU")
        );
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("enabled".parse::<GlobalStatus>(), Ok(GlobalStatus::Enabled));
        assert_eq!("Failed".parse::<MessageStatus>(), Ok(MessageStatus::Failed));
        assert_eq!(
            "webhook_other".parse::<TemplateApp>(),
            Ok(TemplateApp::WebhookOther)
        );
        assert!("nope".parse::<GlobalStatus>().is_err());
    }

    #[test]
    fn message_log_item_parses_wire_shape() {
        let item: MessageLogItem = serde_json::from_value(json!({
            "uid": "log_1",
            "type": "WEBHOOK",
            "status": "FAILED",
            "retryCount": 2,
            "lastError": "connect timeout",
            "sendAt": "2026-08-01T10:00:00Z",
            "message": "{\"text\":\"deploy done\"}",
            "createdAt": "2026-08-01T10:00:00Z",
            "updatedAt": "2026-08-01T10:05:00Z"
        }))
        .expect("message log item");
        assert_eq!(item.message_type, MessageType::Webhook);
        assert_eq!(item.status, MessageStatus::Failed);
        assert_eq!(item.retry_count, 2);
        assert_eq!(item.last_error.as_deref(), Some("connect timeout"));
    }

    #[test]
    fn page_query_omits_unset_fields() {
        let query = PageQuery::page(1, 20);
        let encoded = serde_urlencoded_like(&query);
        assert_eq!(encoded, json!({"page": 1, "pageSize": 20}));
    }

    fn serde_urlencoded_like<T: Serialize>(value: &T) -> serde_json::Value {
        serde_json::to_value(value).expect("serialize query")
    }
}
