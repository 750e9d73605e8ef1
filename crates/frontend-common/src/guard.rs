//! Navigation guard
//!
//! Evaluated before every route transition with the target route, the stored
//! token pair and the current time:
//!
//! 1. guest-only target with both tokens present: redirect home
//! 2. a token missing, protected target: redirect to login
//! 3. a token missing, guest-only target: allow
//! 4. both present, protected target: if the access token has expired,
//!    either log out (refresh token expired too) or refresh and persist the
//!    new access token, then allow

use crate::jwt::decode_payload;
use crate::routes::Route;
use crate::session::AuthSession;
use std::rc::Rc;

/// Result of evaluating a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(Route),
}

/// What to do when refreshing an expired access token fails
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshFailurePolicy {
    /// Continue to the target with the stale access token
    #[default]
    Proceed,
    /// Log out and redirect to the login page
    Logout,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuardConfig {
    pub on_refresh_failure: RefreshFailurePolicy,
}

/// Current wall-clock time in whole seconds since the Unix epoch
pub fn now_seconds() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Token-aware route guard
#[derive(Clone)]
pub struct NavigationGuard {
    session: Rc<AuthSession>,
    config: GuardConfig,
}

impl NavigationGuard {
    pub fn new(session: Rc<AuthSession>) -> Self {
        Self::with_config(session, GuardConfig::default())
    }

    pub const fn with_config(session: Rc<AuthSession>, config: GuardConfig) -> Self {
        Self { session, config }
    }

    /// Evaluate a transition to `to` at the current time
    pub async fn before_each(&self, to: Route) -> GuardOutcome {
        self.evaluate(to, now_seconds()).await
    }

    /// Evaluate a transition to `to` at `now` (seconds since the epoch)
    pub async fn evaluate(&self, to: Route, now: i64) -> GuardOutcome {
        let outcome = self.decide(to, now).await;
        tracing::debug!(route = to.name(), ?outcome, "navigation guard evaluated");
        outcome
    }

    async fn decide(&self, to: Route, now: i64) -> GuardOutcome {
        let tokens = self.session.tokens().pair();

        let (access, refresh) = match (tokens.access, tokens.refresh) {
            (Some(access), Some(refresh)) => (access, refresh),
            _ if to.is_guest_only() => return GuardOutcome::Allow,
            _ => return GuardOutcome::Redirect(Route::Login),
        };

        if to.is_guest_only() {
            return GuardOutcome::Redirect(Route::Home);
        }

        if !token_expired(&access, now) {
            return GuardOutcome::Allow;
        }

        if token_expired(&refresh, now) {
            tracing::info!("access and refresh tokens expired, ending session");
            // Failure already notified; logout clears the session either way
            let _ = self.session.logout(&refresh).await;
            return GuardOutcome::Redirect(Route::Login);
        }

        match self.session.refresh_access_token(&refresh).await {
            Ok(refreshed) => {
                self.session.set_access_token(Some(refreshed.access_token));
                GuardOutcome::Allow
            }
            Err(e) => match self.config.on_refresh_failure {
                RefreshFailurePolicy::Proceed => {
                    tracing::warn!(error = %e, "access token refresh failed, continuing with stale token");
                    GuardOutcome::Allow
                }
                RefreshFailurePolicy::Logout => {
                    tracing::warn!(error = %e, "access token refresh failed, ending session");
                    let _ = self.session.logout(&refresh).await;
                    GuardOutcome::Redirect(Route::Login)
                }
            },
        }
    }
}

/// Undecodable tokens count as expired
fn token_expired(token: &str, now: i64) -> bool {
    match decode_payload(token) {
        Ok(payload) => payload.is_expired_at(now),
        Err(e) => {
            tracing::warn!(error = %e, "stored token could not be decoded, treating as expired");
            true
        }
    }
}
