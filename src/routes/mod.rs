//! Application routes. Path constants live in `paths` so guards and links
//! agree; the pages only exist in the browser build.

#[cfg(target_arch = "wasm32")]
mod document_detail;
#[cfg(target_arch = "wasm32")]
mod home;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod not_found;
pub(crate) mod paths;
#[cfg(target_arch = "wasm32")]
mod register;

#[cfg(target_arch = "wasm32")]
pub(crate) use view::AppRoutes;

#[cfg(target_arch = "wasm32")]
mod view {
    use super::{
        document_detail::DocumentDetailPage, home::HomePage, login::LoginPage,
        not_found::NotFoundPage, register::RegisterPage,
    };
    use leptos::prelude::*;
    use leptos_router::{
        components::{Route, Routes},
        path,
    };

    #[component]
    pub fn AppRoutes() -> impl IntoView {
        view! {
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route path=path!("/documentos/:template_id") view=DocumentDetailPage />
                <Route path=path!("/*any") view=NotFoundPage />
            </Routes>
        }
    }
}

/// Blocking browser alert used for submission outcomes.
#[cfg(target_arch = "wasm32")]
fn blocking_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(message) {
            tracing::warn!(error = ?err, "window.alert failed");
        }
    }
}
