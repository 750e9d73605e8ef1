//! Application routes

use yew_router::prelude::*;

/// In-app destinations
#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/register")]
    Register,
    #[at("/login")]
    Login,
    #[at("/home")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Register => "register",
            Self::Login => "login",
            Self::Home => "home",
            Self::NotFound => "not-found",
        }
    }

    /// Destination that needs an authenticated session to render
    pub const fn requires_auth(self) -> bool {
        matches!(self, Self::Home)
    }

    /// Destination only meant for visitors without a session
    pub const fn is_guest_only(self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// Static redirect applied before the navigation guard runs
    pub const fn redirect(self) -> Option<Self> {
        match self {
            Self::Root | Self::NotFound => Some(Self::Login),
            Self::Register | Self::Login | Self::Home => None,
        }
    }
}
