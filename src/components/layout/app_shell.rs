//! Page frame with the ZionDocs header, the main container and a build stamp.
//! Navigation is client-side only; the backend authorizes every request.

use crate::{
    app_lib::GIT_COMMIT_HASH,
    features::{backend::HttpPortalApi, session::context::use_session, session::logout::sign_out},
    routes::paths,
};
use leptos::{ev::MouseEvent, prelude::*, task::spawn_local};
use leptos_router::{
    components::A,
    hooks::{use_location, use_navigate},
};

const NAV_ITEMS: [(&str, &str); 4] = [
    (paths::HOME, "Início"),
    (paths::DOCUMENTS, "Documentos"),
    (paths::CONTACT, "Contato"),
    (paths::HELP, "Ajuda"),
];

const NAV_LINK: &str = "block py-2 px-3 rounded-lg transition-colors md:py-1";
const NAV_ACTIVE: &str = "text-blue-400 bg-blue-500/10";
const NAV_IDLE: &str = "text-slate-300 hover:text-white hover:bg-slate-800";

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let session = use_session();
    let location = use_location();
    let current_path = location.pathname;
    let navigate = use_navigate();

    let on_sign_out = move |_: MouseEvent| {
        set_menu_open.set(false);
        let navigate = navigate.clone();
        spawn_local(async move {
            let target = sign_out(&HttpPortalApi, &session).await;
            navigate(target, Default::default());
        });
    };

    let nav_links = NAV_ITEMS
        .iter()
        .map(|&(href, label)| {
            let pathname = location.pathname;
            let class = move || {
                let state = if pathname.get() == href { NAV_ACTIVE } else { NAV_IDLE };
                format!("{NAV_LINK} {state}")
            };
            view! {
                <li>
                    <A href=href {..} class=class on:click=move |_| set_menu_open.set(false)>
                        {label}
                    </A>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-[#0a0e17] to-[#1a1f2e] text-slate-100">
            <header class="sticky top-0 z-20 border-b border-blue-500/10 bg-slate-900/80 backdrop-blur-xl">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href=paths::HOME
                        {..}
                        class="flex items-center gap-2"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="text-xl font-bold bg-gradient-to-r from-blue-400 to-blue-600 bg-clip-text text-transparent">
                            "ZionDocs"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center rounded-lg text-slate-400 md:hidden hover:bg-slate-800 focus:outline-none focus:ring-2 focus:ring-slate-700"
                        aria-controls="navbar-main"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">"Abrir menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <nav
                        id="navbar-main"
                        class="w-full md:flex md:w-auto md:items-center md:gap-6"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="flex flex-col gap-1 mt-4 md:mt-0 md:flex-row md:gap-2 font-medium">
                            {nav_links}
                        </ul>
                        <Show
                            when=move || session.is_authenticated()
                            fallback=move || {
                                view! {
                                    <Show when=move || {
                                        paths::header_sign_in_visible(&current_path.get())
                                    }>
                                        <A
                                            href=paths::LOGIN
                                            {..}
                                            class="mt-3 md:mt-0 inline-flex items-center rounded-xl px-4 py-2 text-sm font-semibold text-white bg-blue-600 hover:bg-blue-500"
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            "Entrar"
                                        </A>
                                    </Show>
                                }
                            }
                        >
                            <button
                                type="button"
                                class="mt-3 md:mt-0 inline-flex items-center rounded-xl px-4 py-2 text-sm font-semibold text-blue-300 border border-blue-500/40 hover:bg-blue-500/10"
                                on:click=on_sign_out.clone()
                            >
                                "Sair"
                            </button>
                        </Show>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="py-4 text-center text-xs text-slate-500">
                "ZionDocs · build " {GIT_COMMIT_HASH}
            </footer>
        </div>
    }
}
