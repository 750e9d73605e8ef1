use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthLayoutProps {
    pub children: Children,
}

/// Centered card shared by the sign-in and sign-up pages
#[function_component(AuthLayout)]
pub fn auth_layout(props: &AuthLayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-white shadow-lg rounded-xl p-8 space-y-6">
                <h1 class="text-2xl font-semibold text-center text-gray-900">{"Student Portal"}</h1>
                { props.children.clone() }
            </div>
        </div>
    }
}
