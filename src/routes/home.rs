//! Worker dashboard. The page follows the session: guests get a call to
//! action, signed-in workers get their document grid once both the document
//! and template lists have loaded.

use crate::{
    components::{Alert, AlertKind, AppShell, Button, ButtonVariant, Spinner},
    features::{
        backend::HttpPortalApi,
        documents::{
            dashboard::{DashboardContent, DashboardState, fetch_content},
            types::DocumentCard,
        },
        session::{context::use_session, scope::MountScope, types::Identity},
    },
    routes::paths,
};
use leptos::{ev::MouseEvent, prelude::*, task::spawn_local};
use leptos_router::components::A;

const PAGE_TITLE: &str = "Painel do Trabalhador";

const QUICK_ACTIONS: [(&str, &str, &str); 4] = [
    ("receipt_long", "Recibos", "from-green-500 to-green-600"),
    ("manage_search", "Consultas", "from-purple-500 to-purple-600"),
    ("help", "Ajuda", "from-blue-500 to-blue-600"),
    ("settings", "Configurações", "from-yellow-500 to-yellow-600"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let state = RwSignal::new(DashboardState::default());
    let scope = MountScope::new();

    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(PAGE_TITLE);
    }

    let load = {
        let scope = scope.clone();
        move || {
            let mount = scope.id();
            let task = scope.bind(async {
                let mut rng = rand::thread_rng();
                fetch_content(&HttpPortalApi, &mut rng).await
            });
            spawn_local(async move {
                match task.await {
                    Ok(result) => state.update(|current| {
                        *current = std::mem::take(current).finish(result);
                    }),
                    Err(_) => tracing::debug!(mount, "dashboard load cancelled by unmount"),
                }
            });
        }
    };

    Effect::new({
        let load = load.clone();
        move |_| {
            let phase = session.phase();
            let Some(next) = state.with_untracked(|current| current.on_session(&phase)) else {
                return;
            };
            let loading = next.is_loading_content();
            state.set(next);
            if loading {
                load();
            }
        }
    });

    let on_retry = move |_: MouseEvent| {
        if state.try_update(DashboardState::restart_load).unwrap_or(false) {
            load();
        }
    };

    {
        let scope = scope.clone();
        on_cleanup(move || scope.cancel());
    }

    let body = move || match state.get() {
        DashboardState::Resolving => view! {
            <p class="text-center text-slate-400 py-20">"Carregando dados..."</p>
        }
        .into_any(),
        DashboardState::Guest => view! { <GuestCallToAction /> }.into_any(),
        DashboardState::LoadingContent { .. } => view! {
            <div class="flex justify-center items-center min-h-[40vh]">
                <Spinner label="Carregando documentos" />
            </div>
        }
        .into_any(),
        DashboardState::Ready { identity, content } => {
            view! { <Dashboard identity=identity content=content /> }.into_any()
        }
        DashboardState::Failed { error, .. } => {
            let on_retry = on_retry.clone();
            view! {
                <div class="max-w-lg mx-auto py-10">
                    <Alert kind=AlertKind::Error message=error.user_message()>
                        <Button variant=ButtonVariant::Outline on:click=on_retry>
                            "Tentar novamente"
                        </Button>
                    </Alert>
                </div>
            }
            .into_any()
        }
    };

    view! { <AppShell>{body}</AppShell> }
}

#[component]
fn GuestCallToAction() -> impl IntoView {
    view! {
        <div class="flex justify-center py-16">
            <div class="w-full max-w-md rounded-2xl border border-blue-500/20 bg-slate-900/85 p-8 text-center shadow-2xl">
                <div class="mx-auto mb-6 flex h-20 w-20 items-center justify-center rounded-full bg-blue-500/10">
                    <span class="material-symbols-outlined text-5xl text-blue-400">"account_circle"</span>
                </div>
                <h2 class="text-xl font-bold text-white mb-2">"Bem-vindo ao ZionDocs"</h2>
                <p class="text-slate-400 mb-8">"Acesse seus documentos de forma rápida e segura."</p>
                <A
                    href=paths::LOGIN
                    {..}
                    class="inline-flex justify-center items-center rounded-xl px-5 py-3 text-sm font-semibold text-blue-300 border border-blue-500/40 hover:bg-blue-500/10 transition-all"
                >
                    "Faça login para acessar seu painel"
                </A>
            </div>
        </div>
    }
}

#[component]
fn Dashboard(identity: Identity, content: DashboardContent) -> impl IntoView {
    let DashboardContent {
        documents,
        template_id,
    } = content;
    let has_documents = !documents.is_empty();

    view! {
        <div class="max-w-6xl mx-auto space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-white">{format!("Olá, {}!", identity.name)}</h1>
                <p class="text-slate-400">{identity.email}</p>
            </div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {QUICK_ACTIONS
                    .iter()
                    .map(|&(icon, label, color)| {
                        view! {
                            <div class=format!(
                                "flex flex-col items-center gap-2 rounded-xl bg-gradient-to-br {color} p-4 text-white shadow-lg",
                            )>
                                <span class="material-symbols-outlined">{icon}</span>
                                <span class="text-sm font-medium">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <Show
                when=move || has_documents
                fallback=|| {
                    view! {
                        <Alert
                            kind=AlertKind::Info
                            message="Nenhum documento disponível no momento."
                        />
                    }
                }
            >
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {documents
                        .iter()
                        .map(|card| view! { <DocumentTile card=card.clone() template_id=template_id.clone() /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn DocumentTile(card: DocumentCard, template_id: Option<String>) -> impl IntoView {
    let href = paths::document_detail(template_id.as_deref(), &card.name);

    view! {
        <A
            href=href
            {..}
            class="block rounded-2xl border border-blue-500/20 bg-slate-900/85 p-6 transition-all hover:-translate-y-1 hover:shadow-[0_10px_25px_rgba(59,130,246,0.3)]"
        >
            <div class="text-4xl mb-4">{card.icon}</div>
            <h3 class="text-lg font-semibold text-white mb-1">{card.name}</h3>
            <p class="text-sm text-slate-400">{card.description}</p>
        </A>
    }
}
