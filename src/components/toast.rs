use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::TOAST_DISMISS_MS;

#[derive(Clone, PartialEq, Debug)]
pub struct ToastMessage {
    /// Keys the rendered toast so a replacement remounts with a fresh dismiss timer.
    pub id: u32,
    pub title: String,
    pub description: String,
}

impl ToastMessage {
    /// Builds the message that replaces `previous`, or the first one.
    pub fn following(
        previous: Option<&ToastMessage>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: previous.map_or(0, |prev| prev.id.wrapping_add(1)),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: ToastMessage,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_timeout(move || on_dismiss.emit(()), TOAST_DISMISS_MS);
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast" role="status">
            <div class="toast-body">
                <strong>{&props.message.title}</strong>
                <p>{&props.message.description}</p>
            </div>
            <button class="toast-close" onclick={close}>{"×"}</button>
            <style>
                {r#"
                .toast {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 100;
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                    background: #fff;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
                    padding: 1rem 1.25rem;
                    animation: fadeIn 0.3s ease-out;
                }
                .toast-body p { color: #4b5563; margin-top: 0.25rem; }
                .toast-close { background: none; border: none; font-size: 1.25rem; cursor: pointer; color: #9ca3af; }
                "#}
            </style>
        </div>
    }
}
