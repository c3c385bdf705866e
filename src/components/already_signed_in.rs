use crate::{
    components::{Button, ButtonVariant},
    features::{backend::HttpPortalApi, session::context::use_session, session::logout::sign_out},
    routes::paths,
};
use leptos::{ev::MouseEvent, prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};

/// Shown on the login and register routes when a session already exists.
#[component]
pub fn AlreadySignedInPanel() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let display_name = Signal::derive(move || {
        session
            .identity()
            .map(|identity| identity.name)
            .unwrap_or_default()
    });

    let on_sign_out = move |_: MouseEvent| {
        let navigate = navigate.clone();
        spawn_local(async move {
            let target = sign_out(&HttpPortalApi, &session).await;
            navigate(target, Default::default());
        });
    };

    view! {
        <div class="max-w-sm mx-auto text-center space-y-6 py-10">
            <div class="space-y-2">
                <h2 class="text-xl font-bold text-white">"Você já está conectado"</h2>
                <p class="text-slate-400">
                    "Sessão ativa como "
                    <span class="font-medium text-slate-200">{move || display_name.get()}</span>
                    "."
                </p>
            </div>
            <div class="flex flex-col gap-3">
                <A
                    href=paths::HOME
                    {..}
                    class="w-full inline-flex justify-center items-center rounded-xl px-5 py-3 text-sm font-semibold text-white bg-blue-600 hover:bg-blue-500 transition-all"
                >
                    "Ir para o painel"
                </A>
                <Button variant=ButtonVariant::Outline on:click=on_sign_out>
                    "Sair"
                </Button>
            </div>
        </div>
    }
}
