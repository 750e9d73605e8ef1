//! Session context and provider

use crate::config::ApiConfig;
use crate::routes::Route;
use crate::session::{AuthSession, Navigate};
use crate::storage::default_storage;
use crate::token_store::TokenPair;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// [`Navigate`] backed by the Yew router
pub struct RouterNavigate(pub Option<Navigator>);

impl Navigate for RouterNavigate {
    fn replace(&self, route: Route) {
        match &self.0 {
            Some(navigator) => navigator.replace(&route),
            None => tracing::warn!(route = route.name(), "no router available, navigation dropped"),
        }
    }
}

/// Mirror of the token store, kept in sync through a subscription
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenState {
    pub tokens: TokenPair,
}

pub enum TokenAction {
    Sync(TokenPair),
}

impl Reducible for TokenState {
    type Action = TokenAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TokenAction::Sync(tokens) if tokens == self.tokens => self,
            TokenAction::Sync(tokens) => Rc::new(Self { tokens }),
        }
    }
}

/// Session context handed to components
#[derive(Clone)]
pub struct SessionContext {
    pub session: Rc<AuthSession>,
    pub tokens: TokenPair,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session) && self.tokens == other.tokens
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component, must be rendered inside a router
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let navigator = use_navigator();
    let session = use_memo((), move |_| {
        let base_url = ApiConfig::base_url();
        tracing::info!(%base_url, "starting session");
        AuthSession::connect(
            base_url,
            default_storage(),
            Rc::new(RouterNavigate(navigator)),
        )
        .map(Rc::new)
        .map_err(|e| e.to_string())
    });
    let token_state = use_reducer(TokenState::default);

    // Keep the reducer in sync with the token store
    {
        let token_state = token_state.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            let subscription = (*session).as_ref().ok().map(|session| {
                let store = session.tokens().clone();
                token_state.dispatch(TokenAction::Sync(store.pair()));
                let subscription = {
                    let token_state = token_state.clone();
                    store.subscribe(move |pair| token_state.dispatch(TokenAction::Sync(pair.clone())))
                };
                (store, subscription)
            });

            move || {
                if let Some((store, subscription)) = subscription {
                    store.unsubscribe(subscription);
                }
            }
        });
    }

    match &*session {
        Ok(session) => {
            let context = SessionContext {
                session: Rc::clone(session),
                tokens: token_state.tokens.clone(),
            };
            html! {
                <ContextProvider<SessionContext> context={context}>
                    {props.children.clone()}
                </ContextProvider<SessionContext>>
            }
        }
        Err(error) => {
            tracing::error!(%error, "failed to start session");
            html! {
                <div class="min-h-screen flex items-center justify-center text-red-600">
                    {format!("Unable to reach the portal API: {error}")}
                </div>
            }
        }
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session_context() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to get the session
#[hook]
pub fn use_session() -> Rc<AuthSession> {
    use_session_context().session
}

/// Hook to get the current token pair
#[hook]
pub fn use_tokens() -> TokenPair {
    use_session_context().tokens
}

/// Hook to check if both tokens are present
#[hook]
pub fn use_is_authenticated() -> bool {
    use_tokens().is_complete()
}
