use super::paths;
use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-9xl font-black text-slate-800 select-none">"404"</h1>
                <p class="mt-2 text-2xl font-bold text-white">"Página não encontrada"</p>
                <p class="mt-4 text-slate-400 max-w-sm">
                    "O endereço que você acessou não existe ou foi movido."
                </p>
                <div class="mt-6 flex flex-col sm:flex-row items-center gap-4">
                    <A
                        href=paths::HOME
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-semibold text-white bg-blue-600 rounded-xl hover:bg-blue-500 transition-all"
                    >
                        "Ir para o início"
                    </A>
                    <button
                        on:click=move |_| {
                            if let Some(history) = web_sys::window()
                                .and_then(|window| window.history().ok())
                            {
                                let _ = history.back();
                            }
                        }
                        class="inline-flex items-center px-5 py-2.5 text-sm font-semibold text-blue-300 border border-blue-500/40 rounded-xl hover:bg-blue-500/10 transition-all"
                    >
                        "Voltar"
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
