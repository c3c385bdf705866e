//! ZionDocs worker portal front-end. The browser build mounts the Leptos app;
//! native builds only exist to run the unit tests of the shared logic.

#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
mod features;
mod routes;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    use crate::{
        app::App,
        app_lib::{GIT_COMMIT_HASH, config::AppConfig, logging},
    };
    use leptos::prelude::mount_to_body;

    console_error_panic_hook::set_once();
    let config = AppConfig::load();
    logging::init(&config.log_level);
    tracing::info!(
        commit = GIT_COMMIT_HASH,
        api = %config.api_base_url,
        "starting ziondocs web"
    );

    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
