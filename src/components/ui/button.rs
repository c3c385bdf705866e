use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let class = match variant {
        ButtonVariant::Primary => {
            "w-full inline-flex justify-center items-center gap-2 rounded-xl px-5 py-3 text-sm font-semibold text-white bg-gradient-to-r from-blue-600 to-blue-500 hover:from-blue-500 hover:to-blue-400 focus:ring-4 focus:outline-none focus:ring-blue-500/40 transition-all"
        }
        ButtonVariant::Outline => {
            "inline-flex justify-center items-center gap-2 rounded-xl px-5 py-3 text-sm font-semibold text-blue-300 border border-blue-500/40 hover:bg-blue-500/10 focus:ring-4 focus:outline-none focus:ring-blue-500/30 transition-all"
        }
    };

    view! {
        <button
            type=button_type
            class=class
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-60=move || disabled.get()
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
