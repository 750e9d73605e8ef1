use crate::auth_guard::GuardedSwitch;
use crate::pages::{AuthLayout, HomePage, LoginPage, RegisterPage};
use portal_frontend_common::{Route, SessionProvider, Toaster};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <Toaster />
                <GuardedSwitch render={Callback::from(switch)} />
            </SessionProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! {
            <AuthLayout>
                <LoginPage />
            </AuthLayout>
        },
        Route::Register => html! {
            <AuthLayout>
                <RegisterPage />
            </AuthLayout>
        },
        Route::Home => html! { <HomePage /> },
        Route::Root | Route::NotFound => html! { <Redirect<Route> to={Route::Login} /> },
    }
}
