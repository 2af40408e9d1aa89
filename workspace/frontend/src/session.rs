//! Session lifecycle and token persistence.
//!
//! The in-memory session is loaded once at startup and then read by many
//! consumers; only login, register and logout write to it. Persistence is
//! an explicit port ([`TokenStore`]) rather than ambient storage access,
//! so the store logic is testable without a browser.

use common::{AuthSuccess, LoginRequest, RegisterRequest, UserProfile};

use crate::api_client;

const TOKEN_KEY: &str = "authToken";
const USER_KEY: &str = "user";

/// Token plus optional profile, exactly as persisted between visits.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedAuth {
    pub token: String,
    pub user: Option<UserProfile>,
}

/// Persistence port for the session token and profile.
pub trait TokenStore {
    fn load(&self) -> Option<PersistedAuth>;
    fn save(&self, auth: &PersistedAuth) -> Result<(), String>;
    fn clear(&self) -> Result<(), String>;
}

impl<S: TokenStore + ?Sized> TokenStore for &S {
    fn load(&self) -> Option<PersistedAuth> {
        (**self).load()
    }

    fn save(&self, auth: &PersistedAuth) -> Result<(), String> {
        (**self).save(auth)
    }

    fn clear(&self) -> Result<(), String> {
        (**self).clear()
    }
}

/// Browser-backed store using localStorage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    fn storage() -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or_else(|| "No window available".to_string())?
            .local_storage()
            .map_err(|e| format!("localStorage unavailable: {:?}", e))?
            .ok_or_else(|| "localStorage unavailable".to_string())
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<PersistedAuth> {
        let storage = Self::storage().ok()?;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        let user = storage
            .get_item(USER_KEY)
            .ok()
            .flatten()
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("Ignoring unreadable persisted profile: {}", e);
                    None
                }
            });
        Some(PersistedAuth { token, user })
    }

    fn save(&self, auth: &PersistedAuth) -> Result<(), String> {
        let storage = Self::storage()?;
        storage
            .set_item(TOKEN_KEY, &auth.token)
            .map_err(|e| format!("Failed to persist token: {:?}", e))?;
        match &auth.user {
            Some(user) => {
                let raw = serde_json::to_string(user)
                    .map_err(|e| format!("Failed to serialize profile: {}", e))?;
                storage
                    .set_item(USER_KEY, &raw)
                    .map_err(|e| format!("Failed to persist profile: {:?}", e))?;
            }
            None => {
                storage
                    .remove_item(USER_KEY)
                    .map_err(|e| format!("Failed to clear profile: {:?}", e))?;
            }
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        let storage = Self::storage()?;
        storage
            .remove_item(TOKEN_KEY)
            .map_err(|e| format!("Failed to clear token: {:?}", e))?;
        storage
            .remove_item(USER_KEY)
            .map_err(|e| format!("Failed to clear profile: {:?}", e))?;
        Ok(())
    }
}

/// In-memory store for tests and non-browser contexts.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    auth: std::cell::RefCell<Option<PersistedAuth>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<PersistedAuth> {
        self.auth.borrow().clone()
    }

    fn save(&self, auth: &PersistedAuth) -> Result<(), String> {
        *self.auth.borrow_mut() = Some(auth.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        *self.auth.borrow_mut() = None;
        Ok(())
    }
}

/// Where the session is in its lifecycle. Consumers only ever see one of
/// these three; there is no partially valid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Persisted storage not read yet. Gates the dashboard mount.
    Initializing,
    Authenticated,
    Unauthenticated,
}

/// Owns the in-memory session and its persistence.
pub struct SessionStore<S: TokenStore> {
    store: S,
    phase: SessionPhase,
    token: Option<String>,
    user: Option<UserProfile>,
}

impl<S: TokenStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        SessionStore {
            store,
            phase: SessionPhase::Initializing,
            token: None,
            user: None,
        }
    }

    /// Read persisted storage once. Token presence alone decides the phase.
    pub fn initialize(&mut self) {
        match self.store.load() {
            Some(auth) => {
                log::info!("Restored session from storage");
                self.token = Some(auth.token);
                self.user = auth.user;
                self.phase = SessionPhase::Authenticated;
            }
            None => {
                log::debug!("No persisted session found");
                self.token = None;
                self.user = None;
                self.phase = SessionPhase::Unauthenticated;
            }
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Persist a fresh credential and switch to the authenticated phase.
    /// If persistence fails the in-memory session still switches; the user
    /// just will not be remembered across visits.
    pub fn apply_auth_success(&mut self, success: AuthSuccess) {
        let auth = PersistedAuth {
            token: success.token,
            user: success.user,
        };
        if let Err(e) = self.store.save(&auth) {
            log::error!("Failed to persist session: {}", e);
        }
        self.token = Some(auth.token);
        self.user = auth.user;
        self.phase = SessionPhase::Authenticated;
    }

    pub async fn login(&mut self, request: &LoginRequest) -> Result<(), String> {
        let success = api_client::auth::login(request).await?;
        self.apply_auth_success(success);
        Ok(())
    }

    pub async fn register(&mut self, request: &RegisterRequest) -> Result<(), String> {
        let success = api_client::auth::register(request).await?;
        self.apply_auth_success(success);
        Ok(())
    }

    /// Drop the credential from memory and storage.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            log::error!("Failed to clear persisted session: {}", e);
        }
        self.token = None;
        self.user = None;
        self.phase = SessionPhase::Unauthenticated;
        log::info!("Logged out");
    }
}
