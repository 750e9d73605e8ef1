mod auth_layout;
mod home;
mod login;
mod register;

pub use auth_layout::AuthLayout;
pub use home::HomePage;
pub use login::LoginPage;
pub use register::RegisterPage;

use yew::prelude::*;

pub(crate) const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white border border-gray-300 rounded-lg text-gray-900 placeholder-gray-400 focus:outline-none focus:border-blue-500 transition-all";
pub(crate) const SUBMIT_CLASS: &str = "w-full px-4 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-all disabled:opacity-50 disabled:cursor-not-allowed";

/// Keeps a text state in sync with an input element
pub(crate) fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}
