//! Alert banners for inline messages. Messages must already be sanitized
//! (see `AppError::user_message`); never pass raw response bodies.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Info,
}

/// Banner with an optional action rendered under the message.
#[component]
pub fn Alert(
    kind: AlertKind,
    #[prop(into)] message: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-xl border border-red-500/30 bg-red-900/30 px-4 py-3 text-sm text-red-200"
        }
        AlertKind::Info => {
            "rounded-xl border border-blue-500/30 bg-blue-900/30 px-4 py-3 text-sm text-blue-200"
        }
    };

    view! {
        <div class=class role="alert">
            <p>{message}</p>
            {children.map(|children| view! { <div class="mt-3">{children()}</div> })}
        </div>
    }
}
