//! Typed client for the Courier notification-dispatch admin API.
//!
//! Every outbound request goes through [`ApiClient`], which owns the base
//! configuration and the cross-cutting request contract: bearer-token
//! injection, namespace scoping via the `X-Namespace` header, and central
//! 401 handling. Per-resource modules expose the typed CRUD/query surface on
//! top of it; [`NamespaceContext`] tracks the operator's namespace selection
//! against the injected session store.

pub mod client;
pub mod context;
pub mod email;
pub mod error;
pub mod health;
pub mod message_log;
pub mod namespace;
pub mod sender;
pub mod template;
pub mod types;
pub mod webhook;

pub use client::{ApiClient, ApiClientConfig, DEFAULT_TIMEOUT_MS};
pub use context::NamespaceContext;
pub use error::{ApiError, FieldErrors};
pub use types::*;
