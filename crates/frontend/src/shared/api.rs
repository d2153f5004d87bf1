//! API plumbing for the remote platform services.
//!
//! Base-URL resolution, endpoint builders and JSON request helpers. Every
//! request carries the admin identity in the `X-Admin-Mobile` header.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

const PRODUCTION_BASE_URL: &str =
    "https://markwave-live-services-650581102834.asia-south1.run.app";
const LOCAL_BASE_URL: &str = "http://localhost:8000";

const ADMIN_MOBILE_HEADER: &str = "X-Admin-Mobile";
const ADMIN_MOBILE_STORAGE_KEY: &str = "markwave_admin_mobile";

fn base_for_hostname(hostname: &str) -> &'static str {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        LOCAL_BASE_URL
    } else {
        PRODUCTION_BASE_URL
    }
}

/// Resolve the backend base URL from the current window location.
pub fn api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    base_for_hostname(&hostname).to_string()
}

/// Admin identity for the `X-Admin-Mobile` header. Session handling lives
/// outside this dashboard; the mobile is taken from localStorage where the
/// login flow left it.
pub fn admin_mobile() -> String {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(ADMIN_MOBILE_STORAGE_KEY).ok().flatten())
        .unwrap_or_default()
}

/// Fully-qualified URLs for the fixed set of backend operations.
pub mod endpoints {
    use super::api_base;

    pub fn customers() -> String {
        format!("{}/users/customers", api_base())
    }

    pub fn referrals() -> String {
        format!("{}/users/referrals", api_base())
    }

    pub fn create_user() -> String {
        format!("{}/users/", api_base())
    }

    pub fn user_details(mobile: &str) -> String {
        format!("{}/users/{}", api_base(), mobile)
    }

    pub fn verify_user() -> String {
        format!("{}/users/verify", api_base())
    }

    pub fn update_user(mobile: &str) -> String {
        format!("{}/users/{}", api_base(), mobile)
    }

    pub fn products() -> String {
        format!("{}/products", api_base())
    }

    pub fn pending_orders() -> String {
        format!("{}/orders/pending", api_base())
    }

    pub fn approve_unit(unit_id: &str) -> String {
        format!("{}/orders/units/{}/approve", api_base(), unit_id)
    }

    pub fn reject_unit(unit_id: &str) -> String {
        format!("{}/orders/units/{}/reject", api_base(), unit_id)
    }

    pub fn health() -> String {
        format!("{}/health", api_base())
    }
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = Request::get(url)
        .header(ADMIN_MOBILE_HEADER, &admin_mobile())
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, String> {
    let resp = Request::post(url)
        .header(ADMIN_MOBILE_HEADER, &admin_mobile())
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST with no request body, for the approve/reject actions.
pub async fn post_empty<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = Request::post(url)
        .header(ADMIN_MOBILE_HEADER, &admin_mobile())
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, String> {
    let resp = Request::put(url)
        .header(ADMIN_MOBILE_HEADER, &admin_mobile())
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Health probe; only success/failure matters to the header indicator.
pub async fn health_check() -> Result<(), String> {
    let resp = Request::get(&endpoints::health())
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_for_hostname() {
        assert_eq!(base_for_hostname("localhost"), LOCAL_BASE_URL);
        assert_eq!(base_for_hostname("127.0.0.1"), LOCAL_BASE_URL);
        assert_eq!(base_for_hostname("admin.markwave.in"), PRODUCTION_BASE_URL);
    }
}
