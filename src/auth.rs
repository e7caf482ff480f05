//! Authentication endpoints and the session state machine
//!
//! [`AuthApi`] is the thin typed surface over `/users/*`. [`Session`] sits
//! on top of it and owns the loading / authenticated / unauthenticated
//! lifecycle that a frontend gates its rendering on.

use serde_json::json;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{AuthTokens, User, UserUpdate, Wrapped};

/// Typed client for the user and authentication endpoints
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Log in with username and password.
    ///
    /// On success the returned token is stored (with any `Bearer ` prefix
    /// stripped) and used for all subsequent requests.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthTokens> {
        let tokens: AuthTokens = self
            .client
            .post(
                "/users/login",
                &json!({
                    "username": username,
                    "password": password,
                }),
            )
            .await?;
        self.client.set_token(&tokens.token);
        Ok(tokens)
    }

    /// Register a new account.
    ///
    /// The endpoint answers 204 and returns no token; callers log in
    /// afterwards with the same credentials. The empty `token` field asks
    /// the backend to create a fresh group for the account.
    pub async fn register(&self, email: &str, password: &str, name: &str) -> Result<()> {
        self.client
            .post_empty(
                "/users/register",
                &json!({
                    "name": name,
                    "email": email,
                    "password": password,
                    "token": "",
                }),
            )
            .await
    }

    /// Log out: best-effort server-side invalidation, then the local token
    /// is cleared unconditionally.
    pub async fn logout(&self) {
        if let Err(err) = self.client.request_post("/users/logout").execute_empty().await {
            log::warn!("server-side logout failed: {}", err);
        }
        self.client.clear_token();
    }

    /// Fetch the current user's identity record
    pub async fn get_self(&self) -> Result<User> {
        let wrapped: Wrapped<User> = self.client.get("/users/self").await?;
        Ok(wrapped.item)
    }

    /// Update the current user's profile
    pub async fn update_self(&self, update: &UserUpdate) -> Result<User> {
        let wrapped: Wrapped<User> = self.client.put("/users/self", update).await?;
        Ok(wrapped.item)
    }

    /// Change the current user's password
    pub async fn change_password(&self, current: &str, new: &str) -> Result<()> {
        self.client
            .put_empty(
                "/users/self/change-password",
                &json!({
                    "current": current,
                    "new": new,
                }),
            )
            .await
    }

    /// Rotate the session token. The replacement is stored like a login's.
    pub async fn refresh(&self) -> Result<AuthTokens> {
        let tokens: AuthTokens = self.client.get("/users/refresh").await?;
        self.client.set_token(&tokens.token);
        Ok(tokens)
    }
}

/// Where the session currently stands
#[derive(Debug, Clone)]
pub enum SessionState {
    /// Construction-time state, before `initialize` has resolved
    Loading,
    /// A token is held and the user record was fetched
    Authenticated(User),
    /// No usable session; `error` holds the last surfaced failure
    Unauthenticated { error: Option<String> },
}

/// Client-side session controller.
///
/// Drives the state machine every page consumes: starts `Loading`, resolves
/// to `Authenticated` or `Unauthenticated` after [`Session::initialize`],
/// and moves between the two through login / register / logout.
pub struct Session {
    api: AuthApi,
    client: ApiClient,
    state: SessionState,
}

impl Session {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self {
            api: AuthApi::new(client.clone()),
            client,
            state: SessionState::Loading,
        }
    }

    /// Resolve the initial state from any persisted token.
    ///
    /// Without a token this goes straight to `Unauthenticated` and issues
    /// no request at all. With one, the user record is fetched: a 401
    /// invalidates the stored token; any other failure keeps the token so a
    /// transient network problem does not log the user out.
    pub async fn initialize(&mut self) {
        if !self.client.has_token() {
            self.state = SessionState::Unauthenticated { error: None };
            return;
        }

        match self.api.get_self().await {
            Ok(user) => {
                self.state = SessionState::Authenticated(user);
            }
            Err(err) => {
                if err.is_unauthorized() {
                    log::debug!("stored token rejected, clearing");
                    self.client.clear_token();
                }
                self.state = SessionState::Unauthenticated {
                    error: Some(err.to_string()),
                };
            }
        }
    }

    /// Log in and fetch the user record.
    ///
    /// Returns `true` on success so callers can drive navigation; on
    /// failure the session stays unauthenticated with the error retained.
    pub async fn login(&mut self, username: &str, password: &str) -> bool {
        self.state = SessionState::Loading;

        let result = async {
            self.api.login(username, password).await?;
            self.api.get_self().await
        }
        .await;

        match result {
            Ok(user) => {
                self.state = SessionState::Authenticated(user);
                true
            }
            Err(err) => {
                self.state = SessionState::Unauthenticated {
                    error: Some(err.to_string()),
                };
                false
            }
        }
    }

    /// Register an account, then log in with the same credentials.
    ///
    /// Whichever step fails first aborts the flow and its error is the one
    /// surfaced; a successful register followed by a failed login leaves
    /// the session unauthenticated with the login step's error.
    pub async fn register(&mut self, email: &str, password: &str, name: &str) -> bool {
        self.state = SessionState::Loading;

        if let Err(err) = self.api.register(email, password, name).await {
            self.state = SessionState::Unauthenticated {
                error: Some(err.to_string()),
            };
            return false;
        }

        self.login(email, password).await
    }

    /// End the session. The server call is best-effort; local state is
    /// cleared regardless.
    pub async fn logout(&mut self) {
        self.api.logout().await;
        self.state = SessionState::Unauthenticated { error: None };
    }

    /// Current state of the session machine
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The authenticated user, when there is one
    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Authenticated exactly when a user record is held
    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// True until `initialize` (or a login in progress) resolves
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    /// The last surfaced error, if the session is unauthenticated
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Unauthenticated { error } => error.as_deref(),
            _ => None,
        }
    }
}
