use super::{INPUT_CLASS, SUBMIT_CLASS, bind_input};
use portal_frontend_common::{Route, use_session};
use portal_http::types::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);

    let on_email = bind_input(&email);
    let on_password = bind_input(&password);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let session = session.clone();
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                // Failures are already surfaced as a toast
                if let Ok(resource) = session.login(&request).await {
                    session.set_access_token(Some(resource.access_token));
                    session.set_refresh_token(Some(resource.refresh_token));
                    tracing::info!("signed in");
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Home);
                    }
                }
                submitting.set(false);
            });
        })
    };

    let incomplete = email.is_empty() || password.is_empty();

    html! {
        <form class="space-y-4" onsubmit={on_submit}>
            <input
                type="email"
                class={INPUT_CLASS}
                placeholder="Email"
                value={(*email).clone()}
                oninput={on_email}
                required=true
            />
            <input
                type="password"
                class={INPUT_CLASS}
                placeholder="Password"
                value={(*password).clone()}
                oninput={on_password}
                required=true
            />
            <button type="submit" class={SUBMIT_CLASS} disabled={incomplete || *submitting}>
                { if *submitting { "Signing in..." } else { "Sign in" } }
            </button>
            <p class="text-sm text-center text-gray-600">
                {"No account yet? "}
                <Link<Route> to={Route::Register} classes="text-blue-600 hover:underline">
                    {"Create one"}
                </Link<Route>>
            </p>
        </form>
    }
}
