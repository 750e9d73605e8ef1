use super::{INPUT_CLASS, SUBMIT_CLASS, bind_input};
use portal_frontend_common::{Route, ToastVariant, use_session};
use portal_http::types::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);

    let on_name = bind_input(&name);
    let on_email = bind_input(&email);
    let on_password = bind_input(&password);

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let request = RegisterRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let session = session.clone();
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                if let Ok(resource) = session.register(&request).await {
                    session.notifications().push(
                        "Account created",
                        resource.message,
                        ToastVariant::Default,
                    );
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Login);
                    }
                }
                submitting.set(false);
            });
        })
    };

    let incomplete = name.is_empty() || email.is_empty() || password.is_empty();

    html! {
        <form class="space-y-4" onsubmit={on_submit}>
            <input
                type="text"
                class={INPUT_CLASS}
                placeholder="Full name"
                value={(*name).clone()}
                oninput={on_name}
                required=true
            />
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
                { if *submitting { "Creating account..." } else { "Create account" } }
            </button>
            <p class="text-sm text-center text-gray-600">
                {"Already registered? "}
                <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">
                    {"Sign in"}
                </Link<Route>>
            </p>
        </form>
    }
}
