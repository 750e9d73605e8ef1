//! Route outlet that runs the navigation guard before rendering

use portal_frontend_common::{GuardOutcome, NavigationGuard, Route, Spinner, use_session};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuardedSwitchProps {
    pub render: Callback<Route, Html>,
}

/// Renders the current route once the guard allows it
///
/// Each route change starts a new evaluation. A result that arrives after a
/// newer navigation has begun is discarded.
#[function_component(GuardedSwitch)]
pub fn guarded_switch(props: &GuardedSwitchProps) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let navigator = use_navigator();
    let session = use_session();
    let allowed = use_state(|| None::<Route>);
    let generation = use_mut_ref(|| 0_u64);

    {
        let allowed = allowed.clone();
        use_effect_with(route, move |route| {
            let route = *route;
            *generation.borrow_mut() += 1;
            let ticket = *generation.borrow();

            if let Some(target) = route.redirect() {
                if let Some(navigator) = &navigator {
                    navigator.replace(&target);
                }
                return;
            }

            let guard = NavigationGuard::new(session);
            spawn_local(async move {
                let outcome = guard.before_each(route).await;
                if *generation.borrow() != ticket {
                    tracing::debug!(route = route.name(), "guard result superseded");
                    return;
                }

                match outcome {
                    GuardOutcome::Allow => allowed.set(Some(route)),
                    GuardOutcome::Redirect(target) => {
                        if let Some(navigator) = &navigator {
                            navigator.replace(&target);
                        }
                    }
                }
            });
        });
    }

    if *allowed == Some(route) {
        props.render.emit(route)
    } else {
        let text = if route.requires_auth() {
            "Checking your session..."
        } else {
            "Loading..."
        };
        html! { <Spinner text={Some(text.to_string())} /> }
    }
}
