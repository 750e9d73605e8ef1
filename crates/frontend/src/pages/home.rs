use portal_frontend_common::{Route, Spinner, use_is_authenticated, use_session};
use portal_http::types::UserResource;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let signed_in = use_is_authenticated();
    let profile = use_state(|| None::<UserResource>);
    let failed = use_state(|| false);

    {
        let session = session.clone();
        let profile = profile.clone();
        let failed = failed.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match session.me().await {
                    Ok(user) => profile.set(Some(user)),
                    Err(_) => failed.set(true),
                }
            });
        });
    }

    // Tokens can disappear underneath us, e.g. a sign-out in another tab
    {
        let navigator = navigator.clone();
        use_effect_with(signed_in, move |signed_in| {
            if !*signed_in
                && let Some(navigator) = &navigator
            {
                tracing::info!("session ended elsewhere, returning to sign-in");
                navigator.replace(&Route::Login);
            }
        });
    }

    let on_logout = Callback::from(move |_: MouseEvent| {
        let session = session.clone();
        let navigator = navigator.clone();
        spawn_local(async move {
            if let Some(refresh) = session.tokens().refresh_token() {
                // Tokens are cleared and the user is sent to sign-in either way
                let _ = session.logout(&refresh).await;
            } else {
                session.tokens().clear();
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Login);
                }
            }
        });
    });

    let body = match (&*profile, *failed) {
        (Some(user), _) => html! {
            <dl class="grid grid-cols-3 gap-y-2 text-sm">
                <dt class="text-gray-500">{"Name"}</dt>
                <dd class="col-span-2 text-gray-900">{&user.name}</dd>
                <dt class="text-gray-500">{"Email"}</dt>
                <dd class="col-span-2 text-gray-900">{&user.email}</dd>
                <dt class="text-gray-500">{"Birth date"}</dt>
                <dd class="col-span-2 text-gray-900">{&user.birth_date}</dd>
                <dt class="text-gray-500">{"Role"}</dt>
                <dd class="col-span-2 text-gray-900">{user.role}</dd>
            </dl>
        },
        (None, true) => html! {
            <p class="text-sm text-red-600">{"Your profile could not be loaded."}</p>
        },
        (None, false) => html! { <Spinner text={Some("Loading profile...".to_string())} /> },
    };

    html! {
        <div class="min-h-screen">
            <header class="flex items-center justify-between px-6 py-4 bg-white shadow-sm">
                <h1 class="text-lg font-semibold text-gray-900">{"Student Portal"}</h1>
                <button
                    class="px-4 py-2 text-sm bg-gray-100 hover:bg-gray-200 text-gray-800 rounded-lg transition-all"
                    onclick={on_logout}
                >
                    {"Sign out"}
                </button>
            </header>
            <main class="max-w-2xl mx-auto p-6">
                <div class="bg-white shadow rounded-xl p-6">{body}</div>
            </main>
        </div>
    }
}
