//! `hexauth-cli`: the admin console's operations from a terminal.
//!
//! Every command rides the same gate pipeline as the browser console. The
//! session token lives in a file instead of `localStorage`, and a rejected
//! session clears that file and prints a login hint instead of reloading a page.

mod store;
mod transport;


use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use gate::admin::{
    AdminApi, AuditFilter, ClientFilter, ClientStatus, LicenseCreate, LicenseFilter, LicenseStatus, LicenseUpdate,
    ProductCreate, ProductFilter, ProductStatus, ProductUpdate,
};
use gate::config::{BaseKind, DEFAULT_TIMEOUT_MS, base_kind};
use gate::{ApiConfig, ApiError, ConfigError, Pipeline, ProgressCounter};
use serde::Serialize;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use crate::store::{FileStore, default_token_path};
use crate::transport::{ReqwestTransport, TerminalNavigator};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("base URL must be absolute for the CLI, got `{0}`")]
    RelativeBaseUrl(String),
    #[error("no config directory found; pass --token-file or set HEXAUTH_TOKEN_FILE")]
    NoTokenPath,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "hexauth-cli", about = "hexauth license administration CLI")]
struct Cli {
    #[arg(long, env = "HEXAUTH_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[arg(long, env = "HEXAUTH_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    #[arg(long, env = "HEXAUTH_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a session token and save it.
    Login {
        #[arg(long, short)]
        username: String,
        #[arg(long, short, env = "HEXAUTH_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the saved session token.
    Logout,
    Whoami,
    Dashboard,
    Product(ProductCommand),
    License(LicenseCommand),
    Client(ClientCommand),
    Audit(AuditCommand),
}

#[derive(Args, Debug, Clone, Copy)]
struct Page {
    #[arg(long)]
    skip: Option<u32>,
    #[arg(long)]
    limit: Option<u32>,
}

#[derive(Args, Debug)]
struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProductSubcommand {
    List {
        #[command(flatten)]
        page: Page,
        #[arg(long)]
        status: Option<ProductStatus>,
    },
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        heartbeat: Option<u32>,
        #[arg(long)]
        status: Option<ProductStatus>,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        heartbeat: Option<u32>,
        #[arg(long)]
        status: Option<ProductStatus>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct LicenseCommand {
    #[command(subcommand)]
    command: LicenseSubcommand,
}

#[derive(Subcommand, Debug)]
enum LicenseSubcommand {
    List {
        #[command(flatten)]
        page: Page,
        #[arg(long)]
        status: Option<LicenseStatus>,
        #[arg(long)]
        product_code: Option<String>,
    },
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        key: String,
        #[arg(long)]
        product_code: String,
        #[arg(long, default_value_t = 1)]
        max_devices: u32,
        /// Expiry date, `YYYY-MM-DD`.
        #[arg(long)]
        expire_at: String,
        #[arg(long)]
        remark: Option<String>,
    },
    Update {
        id: i64,
        #[arg(long)]
        max_devices: Option<u32>,
        #[arg(long)]
        expire_at: Option<String>,
        #[arg(long)]
        remark: Option<String>,
    },
    Revoke {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct ClientCommand {
    #[command(subcommand)]
    command: ClientSubcommand,
}

#[derive(Subcommand, Debug)]
enum ClientSubcommand {
    List {
        #[command(flatten)]
        page: Page,
        #[arg(long)]
        status: Option<ClientStatus>,
        #[arg(long)]
        product_code: Option<String>,
        #[arg(long)]
        license_id: Option<i64>,
    },
    Get {
        id: i64,
    },
    Disable {
        id: i64,
    },
    Enable {
        id: i64,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct AuditCommand {
    #[command(subcommand)]
    command: AuditSubcommand,
}

#[derive(Subcommand, Debug)]
enum AuditSubcommand {
    List {
        #[command(flatten)]
        page: Page,
        #[arg(long)]
        admin: Option<String>,
        #[arg(long)]
        action: Option<String>,
        #[arg(long)]
        target_type: Option<String>,
    },
    Get {
        id: i64,
    },
    /// Delete the given entries.
    Clear {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli.base_url, cli.timeout_ms)?;
    let token_path = cli.token_file.or_else(default_token_path).ok_or(CliError::NoTokenPath)?;
    tracing::debug!(base_url = %config.base_url, token_file = %token_path.display(), "configured");

    let pipeline = Pipeline::new(
        ReqwestTransport::new()?,
        Arc::new(FileStore::new(token_path)),
        Arc::new(ProgressCounter::new()),
        Arc::new(TerminalNavigator),
        config,
    );
    let value = run(&AdminApi::new(&pipeline), cli.command).await?;
    print_json(&value)
}

fn build_config(base_url: &str, timeout_ms: u64) -> Result<ApiConfig, CliError> {
    let base_url = base_url.trim();
    if timeout_ms == 0 {
        return Err(ConfigError::ZeroTimeout.into());
    }
    if base_kind(base_url)? == BaseKind::Relative {
        return Err(CliError::RelativeBaseUrl(base_url.to_owned()));
    }
    Ok(ApiConfig::default()
        .with_base_url(base_url)
        .with_timeout(Duration::from_millis(timeout_ms)))
}

async fn run(api: &AdminApi<'_, ReqwestTransport>, command: Command) -> Result<Value, CliError> {
    match command {
        Command::Login { username, password } => {
            let login = api.login(&username, &password).await?;
            tracing::info!(username = %username, "signed in");
            Ok(json!({ "username": username, "token_type": login.token_type }))
        }
        Command::Logout => {
            api.logout();
            Ok(json!({ "signed_out": true }))
        }
        Command::Whoami => to_json(api.me().await?),
        Command::Dashboard => to_json(api.dashboard().await?),
        Command::Product(product) => run_product(api, product.command).await,
        Command::License(license) => run_license(api, license.command).await,
        Command::Client(client) => run_client(api, client.command).await,
        Command::Audit(audit) => run_audit(api, audit.command).await,
    }
}

async fn run_product(api: &AdminApi<'_, ReqwestTransport>, command: ProductSubcommand) -> Result<Value, CliError> {
    match command {
        ProductSubcommand::List { page, status } => {
            let filter = ProductFilter { skip: page.skip, limit: page.limit, status };
            to_json(api.products(&filter).await?)
        }
        ProductSubcommand::Get { id } => to_json(api.product(id).await?),
        ProductSubcommand::Create { code, name, heartbeat, status } => {
            let product = ProductCreate { product_code: code, name, heartbeat_interval: heartbeat, status };
            to_json(api.create_product(&product).await?)
        }
        ProductSubcommand::Update { id, name, heartbeat, status } => {
            let update = ProductUpdate { name, heartbeat_interval: heartbeat, status };
            to_json(api.update_product(id, &update).await?)
        }
        ProductSubcommand::Delete { id } => {
            api.delete_product(id).await?;
            Ok(json!({ "deleted": id }))
        }
    }
}

async fn run_license(api: &AdminApi<'_, ReqwestTransport>, command: LicenseSubcommand) -> Result<Value, CliError> {
    match command {
        LicenseSubcommand::List { page, status, product_code } => {
            let filter = LicenseFilter { skip: page.skip, limit: page.limit, status, product_code };
            to_json(api.licenses(&filter).await?)
        }
        LicenseSubcommand::Get { id } => to_json(api.license(id).await?),
        LicenseSubcommand::Create { key, product_code, max_devices, expire_at, remark } => {
            let license = LicenseCreate { license_key: key, product_code, max_devices, expire_at, remark };
            to_json(api.create_license(&license).await?)
        }
        LicenseSubcommand::Update { id, max_devices, expire_at, remark } => {
            let update = LicenseUpdate { max_devices, expire_at, remark };
            to_json(api.update_license(id, &update).await?)
        }
        LicenseSubcommand::Revoke { id } => to_json(api.revoke_license(id).await?),
    }
}

async fn run_client(api: &AdminApi<'_, ReqwestTransport>, command: ClientSubcommand) -> Result<Value, CliError> {
    match command {
        ClientSubcommand::List { page, status, product_code, license_id } => {
            let filter = ClientFilter { skip: page.skip, limit: page.limit, status, product_code, license_id };
            to_json(api.clients(&filter).await?)
        }
        ClientSubcommand::Get { id } => to_json(api.client(id).await?),
        ClientSubcommand::Disable { id } => to_json(api.disable_client(id).await?),
        ClientSubcommand::Enable { id } => to_json(api.enable_client(id).await?),
        ClientSubcommand::Delete { id } => {
            api.delete_client(id).await?;
            Ok(json!({ "deleted": id }))
        }
    }
}

async fn run_audit(api: &AdminApi<'_, ReqwestTransport>, command: AuditSubcommand) -> Result<Value, CliError> {
    match command {
        AuditSubcommand::List { page, admin, action, target_type } => {
            let filter =
                AuditFilter { skip: page.skip, limit: page.limit, admin_username: admin, action, target_type };
            to_json(api.audit_logs(&filter).await?)
        }
        AuditSubcommand::Get { id } => to_json(api.audit_log(id).await?),
        AuditSubcommand::Clear { ids } => Ok(api.clear_audit_logs(&ids).await?),
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value, CliError> {
    Ok(serde_json::to_value(value)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
