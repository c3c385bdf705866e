//! Pieces shared by the login and register forms.

use leptos::prelude::*;

pub const INPUT_CLASS: &str = "w-full rounded-xl border border-slate-700 bg-slate-800/60 px-4 py-3 text-sm text-white placeholder-slate-500 focus:border-blue-500 focus:outline-none focus:ring-2 focus:ring-blue-500/30";

/// Validation message under a field; renders nothing while valid.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|message| view! { <p class="mt-1 text-xs text-red-400">{message}</p> })
    }
}

/// Eye button that flips a password input between hidden and visible.
#[component]
pub fn PasswordToggle(visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="absolute inset-y-0 right-3 flex items-center text-slate-400 hover:text-white"
            aria-label=move || if visible.get() { "Ocultar senha" } else { "Mostrar senha" }
            on:click=move |_| visible.update(|shown| *shown = !*shown)
        >
            <span class="material-symbols-outlined text-base">
                {move || if visible.get() { "visibility_off" } else { "visibility" }}
            </span>
        </button>
    }
}
