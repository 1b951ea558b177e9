//! Login state machine: `LoggedOut` until credentials are accepted, back to
//! `LoggedOut` on logout or on any failed profile fetch.

use std::sync::Arc;

use store_config::TokenStore;
use store_domain::{Credentials, Session, User};
use tracing::{info, warn};

use crate::{
    api::StoreApi,
    errors::{Result, StoreError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    LoggedOut,
    LoggedIn(Session),
}

pub struct AuthController {
    api: Arc<StoreApi>,
    store: Box<dyn TokenStore>,
    state: AuthState,
}

impl AuthController {
    pub fn new(api: Arc<StoreApi>, store: Box<dyn TokenStore>) -> Self {
        Self {
            api,
            store,
            state: AuthState::LoggedOut,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, AuthState::LoggedIn(_))
    }

    pub fn current_user(&self) -> Option<&User> {
        match &self.state {
            AuthState::LoggedIn(session) => Some(&session.user),
            AuthState::LoggedOut => None,
        }
    }

    /// Gate for protected views.
    pub fn require_session(&self) -> Result<&Session> {
        match &self.state {
            AuthState::LoggedIn(session) => Ok(session),
            AuthState::LoggedOut => Err(StoreError::NotAuthenticated),
        }
    }

    /// Re-validates a persisted token against the profile endpoint.
    ///
    /// Without a stored token nothing is requested. Any failure clears the
    /// session; the resulting state is returned either way.
    pub async fn restore(&mut self) -> Result<&AuthState> {
        let token = match self.store.load() {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "could not read stored session");
                None
            }
        };
        let Some(token) = token else {
            self.state = AuthState::LoggedOut;
            return Ok(&self.state);
        };

        self.api.set_token(Some(token.clone()));
        match self.api.profile().await {
            Ok(user) => {
                info!(user = %user.username, "restored session");
                self.state = AuthState::LoggedIn(Session::new(token, user));
            }
            Err(err) => {
                warn!(error = %err, "stored token rejected, clearing session");
                self.logout()?;
            }
        }
        Ok(&self.state)
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<&User> {
        let credentials = Credentials::new(username.trim(), password);
        if credentials.username.is_empty() || credentials.password.is_empty() {
            return Err(StoreError::InvalidInput(
                "username and password are required".into(),
            ));
        }

        let response = self.api.login(&credentials).await?;
        self.api.set_token(Some(response.token.clone()));
        self.store
            .save(&response.token)
            .map_err(|err| StoreError::Session(err.to_string()))?;
        info!(user = %response.user.username, "logged in");
        self.state = AuthState::LoggedIn(Session::new(response.token, response.user));

        match &self.state {
            AuthState::LoggedIn(session) => Ok(&session.user),
            AuthState::LoggedOut => Err(StoreError::NotAuthenticated),
        }
    }

    /// Re-reads the profile; a failure is treated as token invalidation.
    pub async fn refresh_profile(&mut self) -> Result<&User> {
        let token = self.require_session()?.token.clone();
        match self.api.profile().await {
            Ok(user) => {
                self.state = AuthState::LoggedIn(Session::new(token, user));
                self.require_session().map(|session| &session.user)
            }
            Err(err) => {
                warn!(error = %err, "profile refresh failed, logging out");
                self.logout()?;
                Err(err.into())
            }
        }
    }

    /// Drops the token from memory and from the persisted store.
    pub fn logout(&mut self) -> Result<()> {
        self.api.set_token(None);
        self.state = AuthState::LoggedOut;
        info!("logged out");
        self.store
            .clear()
            .map_err(|err| StoreError::Session(err.to_string()))
    }
}
