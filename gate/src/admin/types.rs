//! Admin API DTOs.
//!
//! DESIGN
//! ======
//! These mirror the backend JSON. Timestamps stay as strings: the backend
//! mixes offset-aware and naive datetimes, and the console only displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

macro_rules! lowercase_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok(Self::$variant),)+
                    other => Err(format!("unknown {} `{other}`", stringify!($name))),
                }
            }
        }
    };
}

lowercase_enum!(
    /// Whether a product accepts activations.
    ProductStatus { Enabled => "enabled", Disabled => "disabled" }
);

lowercase_enum!(
    LicenseStatus {
        Unactivated => "unactivated",
        Activated => "activated",
        Expired => "expired",
        Revoked => "revoked",
    }
);

lowercase_enum!(
    /// Form factor of an activated client instance.
    ClientType { Gui => "gui", Cli => "cli", Service => "service", Plugin => "plugin" }
);

lowercase_enum!(
    ClientStatus { Normal => "normal", Abnormal => "abnormal", Disabled => "disabled" }
);

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// `GET /admin/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub username: String,
    pub status: Option<String>,
    pub last_login: Option<String>,
    pub created_at: Option<String>,
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub health_status: HealthStatus,
    #[serde(default)]
    pub recent_activities: Vec<RecentActivity>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub product_count: u64,
    pub license_count: u64,
    pub active_client_count: u64,
    pub today_activations: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub api: bool,
    pub database: bool,
    pub service: bool,
}

impl HealthStatus {
    #[must_use]
    pub fn all_healthy(self) -> bool {
        self.api && self.database && self.service
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub id: i64,
    pub title: String,
    pub icon: String,
    pub time: String,
}

// =============================================================================
// PRODUCTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub product_code: String,
    pub name: String,
    pub heartbeat_interval: Option<u32>,
    pub status: Option<ProductStatus>,
    pub public_key: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub product_code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heartbeat_interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
}

/// Partial update; unset fields are left unchanged server-side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heartbeat_interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<ProductStatus>,
}

// =============================================================================
// LICENSES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub id: i64,
    pub license_key: String,
    pub product_code: String,
    pub max_devices: u32,
    /// `YYYY-MM-DD`.
    pub expire_at: String,
    pub remark: Option<String>,
    pub status: LicenseStatus,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseCreate {
    pub license_key: String,
    pub product_code: String,
    pub max_devices: u32,
    pub expire_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_devices: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LicenseFilter {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<LicenseStatus>,
    pub product_code: Option<String>,
}

// =============================================================================
// CLIENTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub license_id: i64,
    pub product_code: String,
    pub client_fp: String,
    pub client_type: ClientType,
    pub ip_address: Option<String>,
    pub last_heartbeat: Option<String>,
    pub status: ClientStatus,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientFilter {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<ClientStatus>,
    pub product_code: Option<String>,
    pub license_id: Option<i64>,
}

// =============================================================================
// AUDIT LOGS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: i64,
    pub admin_username: String,
    pub action: String,
    pub target_type: String,
    pub target_id: String,
    pub detail: Option<Value>,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditFilter {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub admin_username: Option<String>,
    pub action: Option<String>,
    pub target_type: Option<String>,
}
