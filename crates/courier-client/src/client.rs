//! HTTP client wrapper: the single point of outbound request configuration
//! and response-level policy.
//!
//! Every request picks up the bearer token and, unless the path is
//! namespace-exempt, the `X-Namespace` header from the injected session
//! store. A 401 response clears the stored token (suppressed in dev mode)
//! before the error is handed back to the caller. No retries happen here;
//! every non-401 error propagates unchanged.

use std::sync::Arc;
use std::time::Duration;

use courier_client_core::{SessionStore, normalize_base_url};
use reqwest::StatusCode;
use serde::Serialize;
use uuid::Uuid;

use crate::email::EmailConfigService;
use crate::error::{ApiError, format_http_error};
use crate::health::HealthService;
use crate::message_log::MessageLogService;
use crate::namespace::NamespaceService;
use crate::sender::SenderService;
use crate::template::TemplateService;
use crate::webhook::WebhookConfigService;

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Namespace scoping header sent on every non-exempt request.
pub const HEADER_NAMESPACE: &str = "X-Namespace";

#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub dev_mode: bool,
}

impl ApiClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            dev_mode: false,
        }
    }

    /// Resolves base URL and dev mode from the environment.
    pub fn from_env() -> Result<Self, ApiError> {
        let (base_url, source) =
            courier_client_core::resolve_base_url().map_err(|_| ApiError::BaseUrlMissing)?;
        tracing::debug!(base_url = %base_url, source, "resolved console base url");
        let mut config = Self::new(base_url);
        config.dev_mode = courier_client_core::resolve_dev_mode();
        Ok(config)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    dev_mode: bool,
    session: Arc<dyn SessionStore>,
    http: reqwest::Client,
}

/// Paths under `/v1/namespace` and `/v1/namespaces`, plus `/health`, are the
/// surface that manages namespaces themselves; they never carry the scoping
/// header.
#[must_use]
pub fn is_namespace_exempt(path: &str) -> bool {
    path.starts_with("/v1/namespace") || path.starts_with("/v1/namespaces") || path == "/health"
}

impl ApiClient {
    pub fn new(
        config: ApiClientConfig,
        session: Arc<dyn SessionStore>,
    ) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(&config.base_url).map_err(|error| match error {
            courier_client_core::ConfigError::EmptyBaseUrl => ApiError::BaseUrlMissing,
            courier_client_core::ConfigError::InvalidBaseUrl => ApiError::BaseUrlInvalid,
        })?;
        Ok(Self {
            base_url,
            timeout: Duration::from_millis(config.timeout_ms.max(250)),
            dev_mode: config.dev_mode,
            session,
            http: reqwest::Client::new(),
        })
    }

    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> Option<String> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.starts_with('/') {
            Some(format!("{}{}", self.base_url, trimmed))
        } else {
            Some(format!("{}/{}", self.base_url, trimmed))
        }
    }

    // --- typed service surfaces ---

    #[must_use]
    pub fn namespaces(&self) -> NamespaceService<'_> {
        NamespaceService::new(self)
    }

    #[must_use]
    pub fn email_configs(&self) -> EmailConfigService<'_> {
        EmailConfigService::new(self)
    }

    #[must_use]
    pub fn webhook_configs(&self) -> WebhookConfigService<'_> {
        WebhookConfigService::new(self)
    }

    #[must_use]
    pub fn templates(&self) -> TemplateService<'_> {
        TemplateService::new(self)
    }

    #[must_use]
    pub fn sender(&self) -> SenderService<'_> {
        SenderService::new(self)
    }

    #[must_use]
    pub fn message_logs(&self) -> MessageLogService<'_> {
        MessageLogService::new(self)
    }

    #[must_use]
    pub fn health(&self) -> HealthService<'_> {
        HealthService::new(self)
    }

    // --- request helpers ---

    pub async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let builder = self.request(reqwest::Method::GET, path)?;
        self.execute_json(builder).await
    }

    pub async fn get_json_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: for<'de> serde::Deserialize<'de>,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(reqwest::Method::GET, path)?.query(query);
        self.execute_json(builder).await
    }

    /// GET where a 404 means "absent" rather than an error.
    pub async fn get_optional_json<T>(&self, path: &str) -> Result<Option<T>, ApiError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let builder = self.request(reqwest::Method::GET, path)?;
        match self.execute_json(builder).await {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.is_not_found() => Ok(None),
            Err(error) => Err(error),
        }
    }

    pub async fn post_json<Req, Res>(&self, path: &str, payload: &Req) -> Result<Res, ApiError>
    where
        Req: Serialize + ?Sized,
        Res: for<'de> serde::Deserialize<'de>,
    {
        let builder = self.request(reqwest::Method::POST, path)?.json(payload);
        self.execute_json(builder).await
    }

    /// POST whose response body the caller does not consume; consoles
    /// refetch the listing instead of patching local state.
    pub async fn post_ack<Req>(&self, path: &str, payload: &Req) -> Result<(), ApiError>
    where
        Req: Serialize + ?Sized,
    {
        let builder = self.request(reqwest::Method::POST, path)?.json(payload);
        self.execute_checked(builder).await.map(|_| ())
    }

    pub async fn put_ack<Req>(&self, path: &str, payload: &Req) -> Result<(), ApiError>
    where
        Req: Serialize + ?Sized,
    {
        let builder = self.request(reqwest::Method::PUT, path)?.json(payload);
        self.execute_checked(builder).await.map(|_| ())
    }

    pub async fn delete_ack(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.request(reqwest::Method::DELETE, path)?;
        self.execute_checked(builder).await.map(|_| ())
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let url = self.endpoint(path).ok_or(ApiError::InvalidPath)?;
        let mut builder = self
            .http
            .request(method, url)
            .header("x-request-id", format!("req_{}", Uuid::new_v4().simple()))
            .timeout(self.timeout);

        // Order matters only for readability; the two headers are
        // independent. A missing token or namespace means the header is
        // omitted entirely, never sent empty.
        if let Some(token) = self.session.auth_token() {
            builder = builder.bearer_auth(token);
        }
        if !is_namespace_exempt(path)
            && let Some(namespace) = self.session.current_namespace()
        {
            builder = builder.header(HEADER_NAMESPACE, namespace);
        }
        Ok(builder)
    }

    async fn execute_json<T>(&self, builder: reqwest::RequestBuilder) -> Result<T, ApiError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let bytes = self.execute_checked(builder).await?;
        serde_json::from_slice::<T>(&bytes).map_err(|error| ApiError::Decode {
            message: error.to_string(),
        })
    }

    async fn execute_checked(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<Vec<u8>, ApiError> {
        let response = builder.send().await.map_err(|error| ApiError::Request {
            message: error.to_string(),
        })?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|error| ApiError::Read {
                message: error.to_string(),
            })?
            .to_vec();

        if status == StatusCode::UNAUTHORIZED {
            self.on_unauthorized();
        }
        if !status.is_success() {
            return Err(format_http_error(status, &bytes));
        }
        Ok(bytes)
    }

    /// Central 401 policy: drop the stored token so the next interaction
    /// starts from the login step. The namespace selection survives. Dev
    /// builds skip the logout so a backend that answers 401 during local
    /// iteration does not wipe the session on every call.
    fn on_unauthorized(&self) {
        if self.dev_mode {
            tracing::debug!("401 received; dev mode keeps the stored token");
            return;
        }
        if let Err(error) = self.session.clear_auth_token() {
            tracing::warn!(%error, "failed to clear auth token after 401");
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("dev_mode", &self.dev_mode)
            .finish_non_exhaustive()
    }
}
