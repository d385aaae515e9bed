//! Google OAuth workflow, currently backed by locally issued stand-in
//! credentials.
//!
//! The consent URL is real; the code exchange is not performed. Both the
//! callback path and the development login endpoint mint a short-lived
//! opaque token that gates the scheduling workflow.

use std::sync::Arc;

use chrono::{Duration, Utc};
use hireflow_domain::{
    AccessToken, AuthStatus, GoogleConfig, HireflowError, NewAccessToken, Result,
};
use tracing::{info, warn};

use crate::auth::ports::TokenRepository;
use crate::calendar_ports::CalendarProvider;
use crate::utils::random_hex;

const OAUTH_SCOPE: &str = "openid profile email https://www.googleapis.com/auth/calendar";
const TOKEN_TTL_HOURS: i64 = 1;

/// Authentication service
pub struct AuthService {
    tokens: Arc<dyn TokenRepository>,
    calendar: Arc<dyn CalendarProvider>,
    google: GoogleConfig,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(
        tokens: Arc<dyn TokenRepository>,
        calendar: Arc<dyn CalendarProvider>,
        google: GoogleConfig,
    ) -> Self {
        Self { tokens, calendar, google }
    }

    /// Build the Google consent URL for the configured client.
    #[must_use]
    pub fn login_url(&self) -> String {
        format!(
            "https://accounts.google.com/o/oauth2/v2/auth\
             ?client_id={}\
             &redirect_uri={}\
             &response_type=code\
             &scope={}\
             &access_type=offline",
            urlencoding::encode(&self.google.client_id),
            urlencoding::encode(&self.google.redirect_uri),
            urlencoding::encode(OAUTH_SCOPE),
        )
    }

    /// Complete the OAuth callback for the given authorization code.
    ///
    /// The code is not exchanged with Google; any non-empty value yields a
    /// locally issued token.
    pub async fn handle_callback(&self, code: &str, user_id: &str) -> Result<AccessToken> {
        if code.trim().is_empty() {
            return Err(HireflowError::Auth("Authorization code is missing".into()));
        }
        info!(user_id, "completing oauth callback");
        self.issue_token(user_id).await
    }

    /// Issue a token directly, bypassing the consent redirect. Development
    /// convenience with the same effect as a completed callback.
    pub async fn fake_login(&self, user_id: &str) -> Result<AccessToken> {
        info!(user_id, "issuing development login token");
        self.issue_token(user_id).await
    }

    /// Report authentication state without mutating any stored token.
    ///
    /// An expired-but-active row reports `has_token` true and
    /// `is_authenticated` false; only the scheduling workflow retires it.
    pub async fn status(&self, user_id: &str) -> Result<AuthStatus> {
        match self.tokens.find_active(user_id).await? {
            Some(token) => Ok(AuthStatus {
                is_authenticated: !token.is_expired(Utc::now()),
                expires_at: Some(token.expires_at),
                has_token: true,
            }),
            None => Ok(AuthStatus { is_authenticated: false, expires_at: None, has_token: false }),
        }
    }

    /// Attempt to refresh the user's active token through the calendar
    /// provider. The current row is deactivated when the exchange fails.
    pub async fn refresh(&self, user_id: &str) -> Result<AccessToken> {
        let token = self
            .tokens
            .find_active(user_id)
            .await?
            .ok_or_else(|| HireflowError::Auth("No token available to refresh".into()))?;

        match self.calendar.refresh_token(&token.refresh_token).await {
            Ok(access_token) => {
                let replacement = NewAccessToken {
                    user_id: user_id.to_string(),
                    access_token,
                    refresh_token: token.refresh_token,
                    expires_at: Utc::now() + Duration::hours(TOKEN_TTL_HOURS),
                    is_active: true,
                };
                self.tokens.replace(replacement).await
            }
            Err(e) => {
                warn!(user_id, error = %e, "token refresh failed, deactivating current token");
                self.tokens.deactivate(token.id).await?;
                Err(e)
            }
        }
    }

    async fn issue_token(&self, user_id: &str) -> Result<AccessToken> {
        let token = NewAccessToken {
            user_id: user_id.to_string(),
            access_token: format!("fake-access-token-{}", random_hex(16)),
            refresh_token: format!("fake-refresh-token-{}", random_hex(16)),
            expires_at: Utc::now() + Duration::hours(TOKEN_TTL_HOURS),
            is_active: true,
        };
        self.tokens.replace(token).await
    }
}
