//! Notification toasts

use crate::auth::use_session;
use crate::config::AuthConfig;
use crate::notifications::{Toast, ToastVariant};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
    pub on_dismiss: Callback<u64>,
}

/// A single toast, dismissed automatically after a delay
#[function_component(ToastItem)]
pub fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.toast.id, move |id| {
            let id = *id;
            let timeout = Timeout::new(AuthConfig::TOAST_DURATION_MS, move || on_dismiss.emit(id));
            // Dropping the handle cancels the timer
            move || drop(timeout)
        });
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let classes = match props.toast.variant {
        ToastVariant::Destructive => "bg-red-600 text-white border-red-700",
        ToastVariant::Default => "bg-white text-gray-900 border-gray-200",
    };

    html! {
        <div role="status" class={classes!("pointer-events-auto", "w-full", "max-w-sm", "rounded-lg", "border", "shadow-lg", "p-4", classes)}>
            <div class="flex items-start justify-between gap-4">
                <div>
                    <p class="font-semibold text-sm">{&props.toast.title}</p>
                    <p class="text-sm opacity-90 mt-1">{&props.toast.description}</p>
                </div>
                <button {onclick} class="text-sm opacity-70 hover:opacity-100" aria-label="Dismiss">{"×"}</button>
            </div>
        </div>
    }
}

/// Renders the session's notification queue
#[function_component(Toaster)]
pub fn toaster() -> Html {
    let session = use_session();
    let notifications = session.notifications().clone();
    let toasts = use_state(|| notifications.toasts());

    {
        let toasts = toasts.clone();
        let notifications = notifications.clone();
        use_effect_with((), move |_| {
            toasts.set(notifications.toasts());
            let subscription = {
                let toasts = toasts.clone();
                notifications.subscribe(move |queue| toasts.set(queue.clone()))
            };
            move || {
                notifications.unsubscribe(subscription);
            }
        });
    }

    let on_dismiss = Callback::from(move |id: u64| notifications.dismiss(id));

    html! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 pointer-events-none">
            { for toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
            }) }
        </div>
    }
}
