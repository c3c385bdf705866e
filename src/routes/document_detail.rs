//! Landing page for a document kind opened from the dashboard. The document
//! viewer itself lives in another service; this page confirms the selection
//! and offers the way back.

use super::paths;
use crate::{
    components::{Alert, AlertKind, AppShell},
    features::session::RequireSession,
};
use leptos::prelude::*;
use leptos_router::{
    components::A,
    hooks::{use_params_map, use_query_map},
};

#[component]
pub fn DocumentDetailPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <DocumentDetail />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn DocumentDetail() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let template_id = move || {
        params
            .with(|params| params.get("template_id"))
            .filter(|id| id != "null")
    };
    let name = move || query.with(|query| query.get("valor")).unwrap_or_default();

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <A href=paths::HOME {..} class="text-sm text-blue-400 hover:underline">
                "← Voltar ao painel"
            </A>
            <h1 class="text-2xl font-bold text-white">{name}</h1>
            {move || match template_id() {
                Some(id) => view! {
                    <p class="text-slate-400">
                        "Modelo de pesquisa: "
                        <span class="font-mono text-slate-200">{id}</span>
                    </p>
                }
                .into_any(),
                None => view! {
                    <Alert
                        kind=AlertKind::Info
                        message="Nenhum modelo de pesquisa está disponível para este documento."
                    />
                }
                .into_any(),
            }}
        </div>
    }
}
