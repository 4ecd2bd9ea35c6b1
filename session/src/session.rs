//! Session store: who is signed in, mirrored to durable storage.
//!
//! DESIGN
//! ======
//! Token and profile travel together as one [`Credentials`] value inside
//! [`SessionState::Authenticated`], so a half-authenticated state cannot be
//! represented. Memory is authoritative once [`SessionStore::init`] has run;
//! the durable copy is only read at startup.
//!
//! LIFECYCLE
//! =========
//! `Uninitialized --init--> Anonymous | Authenticated`
//! `Anonymous --login/register--> Authenticated`
//! `Authenticated --logout/invalidate--> Anonymous`
//!
//! ERROR HANDLING
//! ==============
//! Failed login/register calls return the client error untouched and leave
//! memory and storage as they were. Storage write failures never fail the
//! call; they are logged and the durable copy is cleared so a restart sees
//! no session rather than half of one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::api::ApiClient;
use crate::error::{ApiError, StorageError};
use crate::http::Transport;
use crate::storage::{Storage, TOKEN_KEY, USER_KEY};
use crate::types::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};

/// A bearer token with the profile it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct Credentials {
    pub token: String,
    pub user: UserProfile,
}

impl Credentials {
    /// Validate a login/register response into credentials.
    ///
    /// # Errors
    ///
    /// `ApiError::Decode` when the token is missing or empty, or the user
    /// is missing or not a JSON object.
    pub fn from_response(response: AuthResponse) -> Result<Self, ApiError> {
        let token = response
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Decode("auth response has no token".to_owned()))?;
        let user = response
            .user
            .and_then(UserProfile::from_value)
            .ok_or_else(|| ApiError::Decode("auth response has no user".to_owned()))?;
        Ok(Self { token, user })
    }
}

/// Where the store is in its lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// Durable storage has not been read yet.
    #[default]
    Uninitialized,
    Anonymous,
    Authenticated(Credentials),
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Uninitialized)
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            Self::Authenticated(credentials) => Some(credentials),
            Self::Uninitialized | Self::Anonymous => None,
        }
    }
}

/// Owner of the current session and its durable mirror.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    state: SessionState,
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    /// A store that has not yet looked at `storage`.
    pub fn new(storage: S) -> Self {
        Self { state: SessionState::Uninitialized, storage }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.state.credentials().map(|c| c.token.as_str())
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.state.credentials().map(|c| &c.user)
    }

    /// Rehydrate from durable storage. Runs once; later calls are no-ops.
    pub fn init(&mut self) {
        if !self.state.is_loading() {
            return;
        }
        self.state = match self.read_durable() {
            Some(credentials) => {
                log::debug!("session restored from storage");
                SessionState::Authenticated(credentials)
            }
            None => SessionState::Anonymous,
        };
    }

    fn read_durable(&self) -> Option<Credentials> {
        let token = self.storage.get(TOKEN_KEY).filter(|token| !token.is_empty())?;
        let raw_user = self.storage.get(USER_KEY)?;
        let Ok(value) = serde_json::from_str(&raw_user) else {
            log::warn!("stored user is not valid JSON; starting anonymous");
            return None;
        };
        let user = UserProfile::from_value(value)?;
        Some(Credentials { token, user })
    }

    /// Sign in with email and password, returning the signed-in profile.
    ///
    /// # Errors
    ///
    /// Whatever the client returned, unmodified; `Decode` if the response
    /// lacks a token or user. State is untouched on error.
    pub async fn login<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, ApiError> {
        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let response = client.login(&request, self.token()).await?;
        let credentials = Credentials::from_response(response)?;
        let user = credentials.user.clone();
        self.establish(credentials);
        log::info!("signed in");
        Ok(user)
    }

    /// Create an account and sign in with it.
    ///
    /// # Errors
    ///
    /// Same contract as [`SessionStore::login`].
    pub async fn register<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
        data: &RegisterRequest,
    ) -> Result<UserProfile, ApiError> {
        let response = client.register(data, self.token()).await?;
        let credentials = Credentials::from_response(response)?;
        let user = credentials.user.clone();
        self.establish(credentials);
        log::info!("registered and signed in");
        Ok(user)
    }

    /// Drop the session from memory and storage. Safe to call when anonymous.
    pub fn logout(&mut self) {
        self.state = SessionState::Anonymous;
        self.clear_durable();
        log::info!("signed out");
    }

    /// Drop a session the backend no longer accepts.
    pub fn invalidate(&mut self) {
        if self.is_authenticated() {
            log::warn!("session rejected by server; clearing");
        }
        self.state = SessionState::Anonymous;
        self.clear_durable();
    }

    /// Re-fetch the signed-in profile from `/users/me`.
    ///
    /// Returns `Ok(None)` without any request when nobody is signed in.
    /// A 401 invalidates the session before the error is returned.
    ///
    /// # Errors
    ///
    /// The client error; `Decode` if the profile is not a JSON object.
    pub async fn refresh_user<T: Transport>(&mut self, client: &ApiClient<T>) -> Result<Option<UserProfile>, ApiError> {
        let Some(token) = self.token().map(ToOwned::to_owned) else {
            return Ok(None);
        };
        let value = match client.current_user(Some(&token)).await {
            Ok(value) => value,
            Err(err) => {
                if err.is_unauthorized() {
                    self.invalidate();
                }
                return Err(err);
            }
        };
        let user = UserProfile::from_value(value)
            .ok_or_else(|| ApiError::Decode("profile is not an object".to_owned()))?;
        self.establish(Credentials { token, user: user.clone() });
        Ok(Some(user))
    }

    /// Install credentials in memory, then mirror them to storage.
    fn establish(&mut self, credentials: Credentials) {
        if let Err(err) = self.write_durable(&credentials) {
            log::warn!("could not persist session, it will not survive a restart: {err}");
            self.clear_durable();
        }
        self.state = SessionState::Authenticated(credentials);
    }

    fn write_durable(&self, credentials: &Credentials) -> Result<(), StorageError> {
        let user = serde_json::to_string(&credentials.user)?;
        self.storage.set(TOKEN_KEY, &credentials.token)?;
        self.storage.set(USER_KEY, &user)
    }

    fn clear_durable(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
