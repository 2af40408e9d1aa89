use crate::api_client;
use common::{AuthError, AuthSuccess, LoginRequest, RegisterRequest};

/// Log an existing user in. On a non-2xx response the server's own message
/// is returned so it can be shown unchanged.
pub async fn login(request: &LoginRequest) -> Result<AuthSuccess, String> {
    log::debug!("Logging in: {}", request.email);
    let result = api_client::post::<AuthSuccess, _>("/auth/login/", request)
        .await
        .map_err(extract_message);
    match &result {
        Ok(_) => log::info!("Login succeeded for {}", request.email),
        Err(e) => log::warn!("Login failed for {}: {}", request.email, e),
    }
    result
}

/// Register a new user.
pub async fn register(request: &RegisterRequest) -> Result<AuthSuccess, String> {
    log::debug!("Registering: {}", request.email);
    let result = api_client::post::<AuthSuccess, _>("/auth/register/", request)
        .await
        .map_err(extract_message);
    match &result {
        Ok(_) => log::info!("Registration succeeded for {}", request.email),
        Err(e) => log::warn!("Registration failed for {}: {}", request.email, e),
    }
    result
}

/// The auth endpoints wrap failures as `{"message": ...}`; anything else
/// (transport failure, unexpected body) passes through as-is.
fn extract_message(raw: String) -> String {
    serde_json::from_str::<AuthError>(&raw)
        .map(|e| e.message)
        .unwrap_or(raw)
}
