//! Typed admin endpoints layered on the request pipeline.
//!
//! Every call goes through [`Pipeline::send`], so credentials, progress, and
//! `401` handling are identical across endpoints. Login is the only call that
//! writes the session store; logout is the only other call that clears it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::*;
use crate::error::ApiError;
use crate::pipeline::Pipeline;
use crate::request::RequestBuilder;
use crate::transport::Transport;

const AUTH_LOGIN: &str = "/admin/auth/login";
const AUTH_ME: &str = "/admin/auth/me";
const DASHBOARD: &str = "/admin/dashboard/";
const PRODUCTS: &str = "/admin/product/";
const LICENSES: &str = "/admin/license/";
const CLIENTS: &str = "/admin/client/";
const AUDIT: &str = "/admin/audit/";

fn item(collection: &str, id: i64) -> String {
    format!("{collection}{id}")
}

fn action(collection: &str, id: i64, verb: &str) -> String {
    format!("{collection}{id}/{verb}")
}

fn paged(request: RequestBuilder, skip: Option<u32>, limit: Option<u32>) -> RequestBuilder {
    request.query_opt("skip", skip).query_opt("limit", limit)
}

pub struct AdminApi<'a, T> {
    pipeline: &'a Pipeline<T>,
}

impl<'a, T: Transport> AdminApi<'a, T> {
    pub fn new(pipeline: &'a Pipeline<T>) -> Self {
        Self { pipeline }
    }

    // =========================================================================
    // SESSION
    // =========================================================================

    /// Exchange credentials for a token and store it.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors; rejected credentials surface as
    /// [`ApiError::Unauthorized`].
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = RequestBuilder::post(AUTH_LOGIN).form(&[("username", username), ("password", password)]);
        let login: LoginResponse = self.pipeline.send_as(request).await?;
        if login.access_token.trim().is_empty() {
            return Err(ApiError::Decode("login response carried an empty access token".to_owned()));
        }
        self.pipeline.store().set(&login.access_token);
        log::info!("signed in as {username}");
        Ok(login)
    }

    /// Drop the local session. The backend keeps no server-side session.
    pub fn logout(&self) {
        self.pipeline.store().clear();
        log::info!("signed out");
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn me(&self) -> Result<AdminProfile, ApiError> {
        self.pipeline.send_as(RequestBuilder::get(AUTH_ME)).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn dashboard(&self) -> Result<Dashboard, ApiError> {
        self.pipeline.send_as(RequestBuilder::get(DASHBOARD)).await
    }

    // =========================================================================
    // PRODUCTS
    // =========================================================================

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        let request = paged(RequestBuilder::get(PRODUCTS), filter.skip, filter.limit).query_opt("status", filter.status);
        self.pipeline.send_as(request).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn product(&self, id: i64) -> Result<Product, ApiError> {
        self.pipeline.send_as(RequestBuilder::get(&item(PRODUCTS, id))).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create_product(&self, product: &ProductCreate) -> Result<Product, ApiError> {
        self.pipeline.send_as(RequestBuilder::post(PRODUCTS).json(product)).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update_product(&self, id: i64, update: &ProductUpdate) -> Result<Product, ApiError> {
        self.pipeline.send_as(RequestBuilder::put(&item(PRODUCTS, id)).json(update)).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.pipeline.send(RequestBuilder::delete(&item(PRODUCTS, id))).await.map(drop)
    }

    // =========================================================================
    // LICENSES
    // =========================================================================

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn licenses(&self, filter: &LicenseFilter) -> Result<Vec<License>, ApiError> {
        let request = paged(RequestBuilder::get(LICENSES), filter.skip, filter.limit)
            .query_opt("status", filter.status)
            .query_opt("product_code", filter.product_code.as_deref());
        self.pipeline.send_as(request).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn license(&self, id: i64) -> Result<License, ApiError> {
        self.pipeline.send_as(RequestBuilder::get(&item(LICENSES, id))).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create_license(&self, license: &LicenseCreate) -> Result<License, ApiError> {
        self.pipeline.send_as(RequestBuilder::post(LICENSES).json(license)).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update_license(&self, id: i64, update: &LicenseUpdate) -> Result<License, ApiError> {
        self.pipeline.send_as(RequestBuilder::put(&item(LICENSES, id)).json(update)).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn revoke_license(&self, id: i64) -> Result<License, ApiError> {
        self.pipeline.send_as(RequestBuilder::post(&action(LICENSES, id, "revoke"))).await
    }

    // =========================================================================
    // CLIENTS
    // =========================================================================

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn clients(&self, filter: &ClientFilter) -> Result<Vec<Client>, ApiError> {
        let request = paged(RequestBuilder::get(CLIENTS), filter.skip, filter.limit)
            .query_opt("status", filter.status)
            .query_opt("product_code", filter.product_code.as_deref())
            .query_opt("license_id", filter.license_id);
        self.pipeline.send_as(request).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn client(&self, id: i64) -> Result<Client, ApiError> {
        self.pipeline.send_as(RequestBuilder::get(&item(CLIENTS, id))).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn disable_client(&self, id: i64) -> Result<Client, ApiError> {
        self.pipeline.send_as(RequestBuilder::post(&action(CLIENTS, id, "disable"))).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn enable_client(&self, id: i64) -> Result<Client, ApiError> {
        self.pipeline.send_as(RequestBuilder::post(&action(CLIENTS, id, "enable"))).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn delete_client(&self, id: i64) -> Result<(), ApiError> {
        self.pipeline.send(RequestBuilder::delete(&item(CLIENTS, id))).await.map(drop)
    }

    // =========================================================================
    // AUDIT LOGS
    // =========================================================================

    /// Newest first, as ordered by the backend.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn audit_logs(&self, filter: &AuditFilter) -> Result<Vec<AuditLog>, ApiError> {
        let request = paged(RequestBuilder::get(AUDIT), filter.skip, filter.limit)
            .query_opt("admin_username", filter.admin_username.as_deref())
            .query_opt("action", filter.action.as_deref())
            .query_opt("target_type", filter.target_type.as_deref());
        self.pipeline.send_as(request).await
    }

    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn audit_log(&self, id: i64) -> Result<AuditLog, ApiError> {
        self.pipeline.send_as(RequestBuilder::get(&item(AUDIT, id))).await
    }

    /// Delete the given entries, or every entry when `ids` is empty.
    ///
    /// The backend reads `log_ids` from a JSON array body; a missing body
    /// means "all", so ids must never travel in the query string.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn clear_audit_logs(&self, ids: &[i64]) -> Result<Value, ApiError> {
        let request = RequestBuilder::delete(&format!("{AUDIT}clear"));
        let request = if ids.is_empty() { request } else { request.json(ids) };
        self.pipeline.send(request).await
    }
}
