pub mod auth;
pub mod insights;
pub mod prediction;
pub mod products;
pub mod records;
pub mod sales;

use crate::settings;
use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// GET an enveloped read endpoint.
///
/// The backend reports failures inside the body (`{status: "error",
/// message}`), usually paired with a non-2xx code, so the body is parsed
/// regardless of HTTP status and the envelope decides success.
pub async fn get_enveloped<T>(endpoint: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    let status = response.status();
    match response.json::<T>().await {
        Ok(envelope) => {
            log::trace!("GET {} - envelope parsed (HTTP {})", endpoint, status);
            Ok(envelope)
        }
        Err(_) if status >= 400 => {
            let error_msg = format!("HTTP error: {}", status);
            log::error!("GET {} - {}", endpoint, error_msg);
            Err(error_msg)
        }
        Err(e) => {
            let error_msg = format!("Failed to parse response: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            Err(error_msg)
        }
    }
}

/// GET a plain JSON endpoint (no `{status, ...}` envelope).
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })
}

/// POST a JSON body.
///
/// On a non-2xx response the server's error payload is returned verbatim as
/// the `Err` string; callers decide how much of it to show.
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, String>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        let status = response.status();
        let payload = response.text().await.unwrap_or_default();
        let error_msg = if payload.is_empty() {
            format!("HTTP error: {}", status)
        } else {
            payload
        };
        log::error!("POST {} - HTTP {}: {}", endpoint, status, error_msg);
        return Err(error_msg);
    }

    response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })
}
