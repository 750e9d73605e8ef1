//! Persistent bearer token pair

use crate::config::AuthConfig;
use crate::observable::{Observable, SubscriptionId};
use crate::storage::{ExternalWatch, KeyValueStorage};
use std::rc::Rc;

/// Which of the two bearer tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Fixed storage key for this token
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Access => AuthConfig::ACCESS_TOKEN_KEY,
            Self::Refresh => AuthConfig::REFRESH_TOKEN_KEY,
        }
    }
}

/// Snapshot of both tokens
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenPair {
    pub access: Option<String>,
    pub refresh: Option<String>,
}

impl TokenPair {
    /// Both tokens present
    pub const fn is_complete(&self) -> bool {
        self.access.is_some() && self.refresh.is_some()
    }

    /// Neither token present
    pub const fn is_empty(&self) -> bool {
        self.access.is_none() && self.refresh.is_none()
    }
}

/// A single storage-backed observable value
///
/// Writes made to the same key by another tab are published to subscribers
/// without being written back.
#[derive(Clone)]
pub struct StoredValue {
    key: &'static str,
    storage: Rc<dyn KeyValueStorage>,
    value: Observable<Option<String>>,
    _external: Option<Rc<ExternalWatch>>,
}

impl StoredValue {
    /// Load the current value of `key` from `storage`
    pub fn load(key: &'static str, storage: Rc<dyn KeyValueStorage>) -> Self {
        let value = Observable::new(storage.get(key));

        let external = {
            let value = value.clone();
            storage.watch_external(
                key,
                Rc::new(move |latest: Option<String>| {
                    if value.get() != latest {
                        value.set(latest);
                    }
                }),
            )
        };

        Self {
            key,
            storage,
            value,
            _external: external.map(Rc::new),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.value.get()
    }

    /// Persist and publish; `None` deletes the key
    pub fn set(&self, value: Option<String>) {
        match &value {
            Some(v) => self.storage.set(self.key, v),
            None => self.storage.remove(self.key),
        }
        self.value.set(value);
    }

    pub fn observable(&self) -> &Observable<Option<String>> {
        &self.value
    }
}

/// Subscription to both token values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSubscription {
    access: SubscriptionId,
    refresh: SubscriptionId,
}

/// Access/refresh token pair kept in durable storage
///
/// Clones share the same values and subscribers.
#[derive(Clone)]
pub struct TokenStore {
    access: StoredValue,
    refresh: StoredValue,
}

impl TokenStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            access: StoredValue::load(TokenKind::Access.storage_key(), Rc::clone(&storage)),
            refresh: StoredValue::load(TokenKind::Refresh.storage_key(), storage),
        }
    }

    const fn value(&self, kind: TokenKind) -> &StoredValue {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    pub fn get(&self, kind: TokenKind) -> Option<String> {
        self.value(kind).get()
    }

    pub fn set(&self, kind: TokenKind, token: Option<String>) {
        tracing::debug!(key = kind.storage_key(), present = token.is_some(), "token updated");
        self.value(kind).set(token);
    }

    pub fn access_token(&self) -> Option<String> {
        self.get(TokenKind::Access)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.get(TokenKind::Refresh)
    }

    pub fn set_access_token(&self, token: Option<String>) {
        self.set(TokenKind::Access, token);
    }

    pub fn set_refresh_token(&self, token: Option<String>) {
        self.set(TokenKind::Refresh, token);
    }

    pub fn pair(&self) -> TokenPair {
        TokenPair {
            access: self.access_token(),
            refresh: self.refresh_token(),
        }
    }

    /// Remove both tokens
    pub fn clear(&self) {
        self.set_access_token(None);
        self.set_refresh_token(None);
    }

    /// Call `callback` with the full pair whenever either token changes
    pub fn subscribe(&self, callback: impl Fn(&TokenPair) + 'static) -> TokenSubscription {
        let callback: Rc<dyn Fn(&TokenPair)> = Rc::new(callback);

        let on_access = {
            let store = self.clone();
            let callback = Rc::clone(&callback);
            move |_: &Option<String>| callback(&store.pair())
        };
        let on_refresh = {
            let store = self.clone();
            move |_: &Option<String>| callback(&store.pair())
        };

        TokenSubscription {
            access: self.access.observable().subscribe(on_access),
            refresh: self.refresh.observable().subscribe(on_refresh),
        }
    }

    pub fn unsubscribe(&self, subscription: TokenSubscription) {
        self.access.observable().unsubscribe(subscription.access);
        self.refresh.observable().unsubscribe(subscription.refresh);
    }
}

impl PartialEq for TokenStore {
    fn eq(&self, other: &Self) -> bool {
        self.access.observable().ptr_eq(other.access.observable())
            && self.refresh.observable().ptr_eq(other.refresh.observable())
    }
}
