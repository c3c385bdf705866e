use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    let label = label.unwrap_or("Carregando");

    view! {
        <div
            class="inline-block h-10 w-10 animate-spin rounded-full border-4 border-blue-500/20 border-t-blue-500"
            role="status"
            aria-live="polite"
            aria-label=label
        ></div>
    }
}
