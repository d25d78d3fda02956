//! Operator console for the Courier notification service.
//!
//! Thin command surface over `courier-client`: every subcommand maps to one
//! API call, with the session (auth token + namespace selection) persisted
//! in a JSON file between invocations.

#![allow(clippy::print_stdout)]

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand};
use courier_client::client::{ApiClient, ApiClientConfig};
use courier_client::context::NamespaceContext;
use courier_client::email::{CreateEmailConfigRequest, UpdateEmailConfigRequest};
use courier_client::error::ApiError;
use courier_client::message_log::{ListMessageLogQuery, LogAction};
use courier_client::namespace::{CreateNamespaceRequest, UpdateNamespaceRequest};
use courier_client::sender::{
    SendEmailRequest, SendEmailWithTemplateRequest, SendWebhookRequest,
    SendWebhookWithTemplateRequest,
};
use courier_client::template::{ListTemplateQuery, TemplateRequest};
use courier_client::types::{
    GlobalStatus, HttpMethod, MessageStatus, MessageType, PageQuery, TemplateApp, WebhookApp,
};
use courier_client::webhook::{ListWebhookQuery, WebhookConfigRequest};
use courier_client_core::{FileSessionStore, SessionStore};
use serde::Serialize;
use serde_json::json;

#[derive(Parser)]
#[command(name = "courier-console")]
#[command(about = "Operator console for the Courier notification service")]
struct Cli {
    /// API base URL; falls back to COURIER_CONSOLE_BASE_URL, then the local
    /// dev server.
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Session file; defaults to ~/.courier/session.json.
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,
    /// Dev mode: a 401 response does not clear the stored token.
    #[arg(long, global = true)]
    dev: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store an auth token for subsequent commands.
    Login {
        #[arg(long)]
        token: String,
    },
    /// Clear the stored token and namespace selection.
    Logout,
    Namespace {
        #[command(subcommand)]
        command: NamespaceCommands,
    },
    EmailConfig {
        #[command(subcommand)]
        command: EmailConfigCommands,
    },
    WebhookConfig {
        #[command(subcommand)]
        command: WebhookConfigCommands,
    },
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
    Send {
        #[command(subcommand)]
        command: SendCommands,
    },
    Log {
        #[command(subcommand)]
        command: LogCommands,
    },
    /// Probe the service health endpoint.
    Health,
}

#[derive(Args)]
struct ListArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long, default_value_t = 20)]
    page_size: u32,
    #[arg(long)]
    keyword: Option<String>,
    #[arg(long)]
    status: Option<GlobalStatus>,
}

impl ListArgs {
    fn query(&self) -> PageQuery {
        PageQuery {
            page: Some(self.page),
            page_size: Some(self.page_size),
            keyword: self.keyword.clone(),
            status: self.status,
        }
    }
}

#[derive(Subcommand)]
enum NamespaceCommands {
    List(ListArgs),
    Get {
        name: String,
    },
    Create {
        name: String,
        /// key=value pairs, repeatable.
        #[arg(long = "meta")]
        metadata: Vec<String>,
    },
    Update {
        name: String,
        #[arg(long = "meta")]
        metadata: Vec<String>,
    },
    Enable {
        name: String,
    },
    Disable {
        name: String,
    },
    Delete {
        name: String,
    },
    /// Select the namespace scoped requests are issued against.
    Use {
        name: String,
    },
    /// Clear the namespace selection.
    Unuse,
    /// Show the current selection.
    Current,
}

#[derive(Subcommand)]
enum EmailConfigCommands {
    List(ListArgs),
    Get {
        uid: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        host: String,
        #[arg(long)]
        port: u16,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Update {
        uid: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        host: String,
        #[arg(long)]
        port: u16,
        #[arg(long)]
        username: String,
        /// Omit to keep the stored password.
        #[arg(long)]
        password: Option<String>,
    },
    Enable {
        uid: String,
    },
    Disable {
        uid: String,
    },
    Delete {
        uid: String,
    },
}

#[derive(Subcommand)]
enum WebhookConfigCommands {
    List {
        #[command(flatten)]
        list: ListArgs,
        #[arg(long)]
        app: Option<WebhookApp>,
    },
    Get {
        uid: String,
    },
    Create {
        #[arg(long)]
        app: WebhookApp,
        #[arg(long)]
        name: String,
        #[arg(long)]
        url: String,
        #[arg(long, default_value = "POST")]
        method: HttpMethod,
        /// key=value pairs, repeatable.
        #[arg(long = "header")]
        headers: Vec<String>,
        #[arg(long)]
        secret: Option<String>,
    },
    Update {
        uid: String,
        #[arg(long)]
        app: WebhookApp,
        #[arg(long)]
        name: String,
        #[arg(long)]
        url: String,
        #[arg(long, default_value = "POST")]
        method: HttpMethod,
        #[arg(long = "header")]
        headers: Vec<String>,
        #[arg(long)]
        secret: Option<String>,
    },
    Enable {
        uid: String,
    },
    Disable {
        uid: String,
    },
    Delete {
        uid: String,
    },
}

#[derive(Subcommand)]
enum TemplateCommands {
    List {
        #[command(flatten)]
        list: ListArgs,
        #[arg(long)]
        app: Option<TemplateApp>,
    },
    Get {
        uid: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        app: TemplateApp,
        #[arg(long)]
        json_data: String,
    },
    Update {
        uid: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        app: TemplateApp,
        #[arg(long)]
        json_data: String,
    },
    Enable {
        uid: String,
    },
    Disable {
        uid: String,
    },
    Delete {
        uid: String,
    },
}

#[derive(Subcommand)]
enum SendCommands {
    /// One-shot email through a stored configuration.
    Email {
        uid: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        body: String,
        #[arg(long = "to", required = true)]
        to: Vec<String>,
        #[arg(long = "cc")]
        cc: Vec<String>,
        #[arg(long)]
        content_type: Option<String>,
        #[arg(long = "header")]
        headers: Vec<String>,
    },
    EmailTemplate {
        uid: String,
        #[arg(long)]
        template_uid: String,
        #[arg(long)]
        json_data: String,
        #[arg(long = "to", required = true)]
        to: Vec<String>,
        #[arg(long = "cc")]
        cc: Vec<String>,
    },
    Webhook {
        uid: String,
        #[arg(long)]
        data: String,
    },
    WebhookTemplate {
        uid: String,
        #[arg(long)]
        template_uid: String,
        #[arg(long)]
        json_data: String,
    },
}

#[derive(Subcommand)]
enum LogCommands {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        page_size: u32,
        #[arg(long = "type")]
        message_type: Option<MessageType>,
        #[arg(long)]
        status: Option<MessageStatus>,
        #[arg(long)]
        start_at_unix: Option<String>,
        #[arg(long)]
        end_at_unix: Option<String>,
    },
    Get {
        uid: String,
    },
    /// Re-dispatch a failed log entry.
    Retry {
        uid: String,
        /// Skip the local status check and let the server decide.
        #[arg(long)]
        force: bool,
    },
    /// Cancel a pending log entry.
    Cancel {
        uid: String,
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    let session = open_session(cli.session_file.clone())?;

    match cli.command {
        Commands::Login { ref token } => {
            session.set_auth_token(token)?;
            print_json(&json!({"loggedIn": true}))
        }
        Commands::Logout => {
            session.clear()?;
            print_json(&json!({"loggedIn": false}))
        }
        ref command => {
            let client = build_client(&cli, Arc::clone(&session))?;
            dispatch(command, &client, &session).await
        }
    }
}

async fn dispatch(
    command: &Commands,
    client: &ApiClient,
    session: &Arc<dyn SessionStore>,
) -> Result<()> {
    match command {
        // Handled before a client is built.
        Commands::Login { .. } | Commands::Logout => Ok(()),
        Commands::Namespace { command } => run_namespace(command, client, session).await,
        Commands::EmailConfig { command } => run_email_config(command, client).await,
        Commands::WebhookConfig { command } => run_webhook_config(command, client).await,
        Commands::Template { command } => run_template(command, client).await,
        Commands::Send { command } => run_send(command, client).await,
        Commands::Log { command } => run_log(command, client).await,
        Commands::Health => {
            let reply = client.health().check().await.map_err(render_api_error)?;
            print_json(&reply)
        }
    }
}

async fn run_namespace(
    command: &NamespaceCommands,
    client: &ApiClient,
    session: &Arc<dyn SessionStore>,
) -> Result<()> {
    let service = client.namespaces();
    match command {
        NamespaceCommands::List(args) => {
            let page = service.list(&args.query()).await.map_err(render_api_error)?;
            print_json(&page)
        }
        NamespaceCommands::Get { name } => {
            let item = service.get(name).await.map_err(render_api_error)?;
            print_json(&item)
        }
        NamespaceCommands::Create { name, metadata } => {
            let request = CreateNamespaceRequest {
                name: name.clone(),
                metadata: parse_kv_pairs(metadata)?,
            };
            service.create(&request).await.map_err(render_api_error)?;
            print_json(&json!({"created": name}))
        }
        NamespaceCommands::Update { name, metadata } => {
            let request = UpdateNamespaceRequest {
                metadata: parse_kv_pairs(metadata)?,
            };
            service
                .update(name, &request)
                .await
                .map_err(render_api_error)?;
            print_json(&json!({"updated": name}))
        }
        NamespaceCommands::Enable { name } => {
            service
                .update_status(name, GlobalStatus::Enabled)
                .await
                .map_err(render_api_error)?;
            print_json(&json!({"name": name, "status": "ENABLED"}))
        }
        NamespaceCommands::Disable { name } => {
            service
                .update_status(name, GlobalStatus::Disabled)
                .await
                .map_err(render_api_error)?;
            print_json(&json!({"name": name, "status": "DISABLED"}))
        }
        NamespaceCommands::Delete { name } => {
            service.delete(name).await.map_err(render_api_error)?;
            print_json(&json!({"deleted": name}))
        }
        NamespaceCommands::Use { name } => {
            let exists = service
                .get_optional(name)
                .await
                .map_err(render_api_error)?
                .is_some();
            if !exists {
                bail!("namespace {name} does not exist");
            }
            let mut context = NamespaceContext::load(Arc::clone(session));
            context.set_current(Some(name)).map_err(render_api_error)?;
            print_json(&json!({"currentNamespace": name}))
        }
        NamespaceCommands::Unuse => {
            let mut context = NamespaceContext::load(Arc::clone(session));
            context.set_current(None).map_err(render_api_error)?;
            print_json(&json!({"currentNamespace": null}))
        }
        NamespaceCommands::Current => {
            let context = NamespaceContext::load(Arc::clone(session));
            print_json(&json!({"currentNamespace": context.current()}))
        }
    }
}

async fn run_email_config(command: &EmailConfigCommands, client: &ApiClient) -> Result<()> {
    let service = client.email_configs();
    match command {
        EmailConfigCommands::List(args) => {
            let page = service.list(&args.query()).await.map_err(render_api_error)?;
            print_json(&page)
        }
        EmailConfigCommands::Get { uid } => {
            let item = service.get(uid).await.map_err(render_api_error)?;
            print_json(&item)
        }
        EmailConfigCommands::Create {
            name,
            host,
            port,
            username,
            password,
        } => {
            let request = CreateEmailConfigRequest {
                name: name.clone(),
                host: host.clone(),
                port: *port,
                username: username.clone(),
                password: password.clone(),
            };
            service.create(&request).await.map_err(render_api_error)?;
            print_json(&json!({"created": name}))
        }
        EmailConfigCommands::Update {
            uid,
            name,
            host,
            port,
            username,
            password,
        } => {
            let request = UpdateEmailConfigRequest {
                name: name.clone(),
                host: host.clone(),
                port: *port,
                username: username.clone(),
                password: password.clone(),
            };
            service
                .update(uid, &request)
                .await
                .map_err(render_api_error)?;
            print_json(&json!({"updated": uid}))
        }
        EmailConfigCommands::Enable { uid } => {
            service
                .update_status(uid, GlobalStatus::Enabled)
                .await
                .map_err(render_api_error)?;
            print_json(&json!({"uid": uid, "status": "ENABLED"}))
        }
        EmailConfigCommands::Disable { uid } => {
            service
                .update_status(uid, GlobalStatus::Disabled)
                .await
                .map_err(render_api_error)?;
            print_json(&json!({"uid": uid, "status": "DISABLED"}))
        }
        EmailConfigCommands::Delete { uid } => {
            service.delete(uid).await.map_err(render_api_error)?;
            print_json(&json!({"deleted": uid}))
        }
    }
}

async fn run_webhook_config(command: &WebhookConfigCommands, client: &ApiClient) -> Result<()> {
    let service = client.webhook_configs();
    match command {
        WebhookConfigCommands::List { list, app } => {
            let query = ListWebhookQuery {
                page: list.query(),
                app: *app,
            };
            let page = service.list(&query).await.map_err(render_api_error)?;
            print_json(&page)
        }
        WebhookConfigCommands::Get { uid } => {
            let item = service.get(uid).await.map_err(render_api_error)?;
            print_json(&item)
        }
        WebhookConfigCommands::Create {
            app,
            name,
            url,
            method,
            headers,
            secret,
        } => {
            let request = WebhookConfigRequest {
                app: *app,
                name: name.clone(),
                url: url.clone(),
                method: *method,
                headers: parse_kv_pairs(headers)?,
                secret: secret.clone(),
            };
            service.create(&request).await.map_err(render_api_error)?;
            print_json(&json!({"created": name}))
        }
        WebhookConfigCommands::Update {
            uid,
            app,
            name,
            url,
            method,
            headers,
            secret,
        } => {
            let request = WebhookConfigRequest {
                app: *app,
                name: name.clone(),
                url: url.clone(),
                method: *method,
                headers: parse_kv_pairs(headers)?,
                secret: secret.clone(),
            };
            service
                .update(uid, &request)
                .await
                .map_err(render_api_error)?;
            print_json(&json!({"updated": uid}))
        }
        WebhookConfigCommands::Enable { uid } => {
            service
                .update_status(uid, GlobalStatus::Enabled)
                .await
                .map_err(render_api_error)?;
            print_json(&json!({"uid": uid, "status": "ENABLED"}))
        }
        WebhookConfigCommands::Disable { uid } => {
            service
                .update_status(uid, GlobalStatus::Disabled)
                .await
                .map_err(render_api_error)?;
            print_json(&json!({"uid": uid, "status": "DISABLED"}))
        }
        WebhookConfigCommands::Delete { uid } => {
            service.delete(uid).await.map_err(render_api_error)?;
            print_json(&json!({"deleted": uid}))
        }
    }
}

async fn run_template(command: &TemplateCommands, client: &ApiClient) -> Result<()> {
    let service = client.templates();
    match command {
        TemplateCommands::List { list, app } => {
            let query = ListTemplateQuery {
                page: list.query(),
                app: *app,
            };
            let page = service.list(&query).await.map_err(render_api_error)?;
            print_json(&page)
        }
        TemplateCommands::Get { uid } => {
            let item = service.get(uid).await.map_err(render_api_error)?;
            print_json(&item)
        }
        TemplateCommands::Create {
            name,
            app,
            json_data,
        } => {
            let request = TemplateRequest {
                name: name.clone(),
                app: *app,
                json_data: json_data.clone(),
            };
            service.create(&request).await.map_err(render_api_error)?;
            print_json(&json!({"created": name}))
        }
        TemplateCommands::Update {
            uid,
            name,
            app,
            json_data,
        } => {
            let request = TemplateRequest {
                name: name.clone(),
                app: *app,
                json_data: json_data.clone(),
            };
            service
                .update(uid, &request)
                .await
                .map_err(render_api_error)?;
            print_json(&json!({"updated": uid}))
        }
        TemplateCommands::Enable { uid } => {
            service
                .update_status(uid, GlobalStatus::Enabled)
                .await
                .map_err(render_api_error)?;
            print_json(&json!({"uid": uid, "status": "ENABLED"}))
        }
        TemplateCommands::Disable { uid } => {
            service
                .update_status(uid, GlobalStatus::Disabled)
                .await
                .map_err(render_api_error)?;
            print_json(&json!({"uid": uid, "status": "DISABLED"}))
        }
        TemplateCommands::Delete { uid } => {
            service.delete(uid).await.map_err(render_api_error)?;
            print_json(&json!({"deleted": uid}))
        }
    }
}

async fn run_send(command: &SendCommands, client: &ApiClient) -> Result<()> {
    let service = client.sender();
    let reply = match command {
        SendCommands::Email {
            uid,
            subject,
            body,
            to,
            cc,
            content_type,
            headers,
        } => {
            let request = SendEmailRequest {
                subject: subject.clone(),
                body: body.clone(),
                to: to.clone(),
                cc: non_empty(cc),
                content_type: content_type.clone(),
                headers: parse_kv_pairs(headers)?,
            };
            service
                .send_email(uid, &request)
                .await
                .map_err(render_api_error)?
        }
        SendCommands::EmailTemplate {
            uid,
            template_uid,
            json_data,
            to,
            cc,
        } => {
            let request = SendEmailWithTemplateRequest {
                template_uid: template_uid.clone(),
                json_data: json_data.clone(),
                to: to.clone(),
                cc: non_empty(cc),
            };
            service
                .send_email_with_template(uid, &request)
                .await
                .map_err(render_api_error)?
        }
        SendCommands::Webhook { uid, data } => {
            let request = SendWebhookRequest { data: data.clone() };
            service
                .send_webhook(uid, &request)
                .await
                .map_err(render_api_error)?
        }
        SendCommands::WebhookTemplate {
            uid,
            template_uid,
            json_data,
        } => {
            let request = SendWebhookWithTemplateRequest {
                template_uid: template_uid.clone(),
                json_data: json_data.clone(),
            };
            service
                .send_webhook_with_template(uid, &request)
                .await
                .map_err(render_api_error)?
        }
    };
    print_json(&reply)
}

async fn run_log(command: &LogCommands, client: &ApiClient) -> Result<()> {
    let service = client.message_logs();
    match command {
        LogCommands::List {
            page,
            page_size,
            message_type,
            status,
            start_at_unix,
            end_at_unix,
        } => {
            let query = ListMessageLogQuery {
                page: Some(*page),
                page_size: Some(*page_size),
                message_type: *message_type,
                status: *status,
                start_at_unix: start_at_unix.clone(),
                end_at_unix: end_at_unix.clone(),
            };
            let page = service.list(&query).await.map_err(render_api_error)?;
            print_json(&page)
        }
        LogCommands::Get { uid } => {
            let item = service.get(uid).await.map_err(render_api_error)?;
            print_json(&item)
        }
        LogCommands::Retry { uid, force } => {
            transition_log(client, uid, LogAction::Retry, *force).await
        }
        LogCommands::Cancel { uid, force } => {
            transition_log(client, uid, LogAction::Cancel, *force).await
        }
    }
}

/// Single handler for both log transitions. The local gate mirrors what the
/// console renders as clickable; the server stays the authority.
async fn transition_log(
    client: &ApiClient,
    uid: &str,
    action: LogAction,
    force: bool,
) -> Result<()> {
    let service = client.message_logs();
    if !force {
        let item = service.get(uid).await.map_err(render_api_error)?;
        if !action.permitted(item.status) {
            bail!(
                "log {uid} is {:?}; {} is not permitted from that status (use --force to let the server decide)",
                item.status,
                action.segment(),
            );
        }
    }
    match action {
        LogAction::Retry => service.retry(uid).await.map_err(render_api_error)?,
        LogAction::Cancel => service.cancel(uid).await.map_err(render_api_error)?,
    }
    print_json(&json!({"uid": uid, "action": action.segment()}))
}

fn open_session(path: Option<PathBuf>) -> Result<Arc<dyn SessionStore>> {
    let path = match path {
        Some(path) => path,
        None => dirs::home_dir()
            .context("cannot locate a home directory; pass --session-file")?
            .join(".courier")
            .join("session.json"),
    };
    tracing::debug!(path = %path.display(), "opening session file");
    let store = FileSessionStore::open(&path)
        .with_context(|| format!("open session file {}", path.display()))?;
    Ok(Arc::new(store))
}

fn build_client(cli: &Cli, session: Arc<dyn SessionStore>) -> Result<ApiClient> {
    let mut config = match &cli.base_url {
        Some(base_url) => ApiClientConfig::new(base_url.clone()),
        None => ApiClientConfig::from_env().map_err(render_api_error)?,
    };
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    config.dev_mode = config.dev_mode || cli.dev;
    ApiClient::new(config, session).map_err(render_api_error)
}

/// Maps API failures onto operator-facing messages: structured validation
/// bodies become per-field lines, a 401 points at the login command.
fn render_api_error(error: ApiError) -> anyhow::Error {
    if let Some(fields) = error.field_errors() {
        let mut lines = vec![format!("validation failed: {}", fields.message)];
        for (field, reason) in &fields.metadata {
            lines.push(format!("  {field}: {reason}"));
        }
        return anyhow!(lines.join("\n"));
    }
    match error {
        ApiError::Unauthorized { .. } => {
            anyhow!("session expired or not logged in; run `courier-console login --token <token>`")
        }
        other => anyhow::Error::from(other),
    }
}

fn parse_kv_pairs(pairs: &[String]) -> Result<Option<BTreeMap<String, String>>> {
    if pairs.is_empty() {
        return Ok(None);
    }
    let mut map = BTreeMap::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("expected key=value, got {pair}"))?;
        map.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(Some(map))
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_pairs_parse_and_trim() {
        let parsed = parse_kv_pairs(&["team = infra".to_string(), "tier=1".to_string()])
            .expect("parse")
            .expect("non-empty");
        assert_eq!(parsed.get("team").map(String::as_str), Some("infra"));
        assert_eq!(parsed.get("tier").map(String::as_str), Some("1"));
    }

    #[test]
    fn kv_pairs_reject_missing_separator() {
        assert!(parse_kv_pairs(&["no-separator".to_string()]).is_err());
    }

    #[test]
    fn empty_kv_pairs_become_none() {
        assert_eq!(parse_kv_pairs(&[]).expect("parse"), None);
    }

    #[test]
    fn cli_parses_log_retry() {
        let cli = Cli::try_parse_from([
            "courier-console",
            "log",
            "retry",
            "log_1",
            "--force",
        ])
        .expect("parse cli");
        match cli.command {
            Commands::Log {
                command: LogCommands::Retry { ref uid, force },
            } => {
                assert_eq!(uid, "log_1");
                assert!(force);
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn cli_parses_enum_valued_flags() {
        let cli = Cli::try_parse_from([
            "courier-console",
            "template",
            "list",
            "--app",
            "webhook_feishu",
            "--status",
            "enabled",
        ])
        .expect("parse cli");
        match cli.command {
            Commands::Template {
                command: TemplateCommands::List { ref list, app },
            } => {
                assert_eq!(app, Some(TemplateApp::WebhookFeishu));
                assert_eq!(list.status, Some(GlobalStatus::Enabled));
            }
            _ => panic!("unexpected command"),
        }
    }
}
