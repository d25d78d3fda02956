//! Shared client core for the Courier console: the injectable session store
//! and environment/base-URL resolution used by every client surface.

pub mod config;
pub mod session;

pub use config::{
    ConfigError, DEFAULT_BASE_URL, ENV_BASE_URL, ENV_DEV_MODE, normalize_base_url,
    resolve_base_url, resolve_dev_mode,
};
pub use session::{FileSessionStore, MemorySessionStore, SessionError, SessionStore};
