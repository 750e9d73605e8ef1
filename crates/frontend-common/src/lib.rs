//! Session core and shared components for the portal frontend.
//!
//! The modules below the UI layer (`storage`, `observable`, `token_store`,
//! `jwt`, `notifications`, `api`, `session`, `routes`, `guard`) hold no
//! browser-only state and are exercised natively by the integration tests.

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod guard;
pub mod jwt;
pub mod notifications;
pub mod observable;
pub mod routes;
pub mod session;
pub mod storage;
pub mod token_store;

pub use api::ApiService;
pub use auth::{SessionContext, SessionProvider, use_is_authenticated, use_session, use_tokens};
pub use components::{Spinner, Toaster};
pub use config::{ApiConfig, AuthConfig};
pub use guard::{GuardConfig, GuardOutcome, NavigationGuard, RefreshFailurePolicy};
pub use notifications::{Notifications, Toast, ToastVariant};
pub use observable::{Observable, SubscriptionId};
pub use routes::Route;
pub use session::{AuthSession, Navigate};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use token_store::{TokenKind, TokenPair, TokenStore};
