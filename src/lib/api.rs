//! HTTP helpers for the portal's JSON API with consistent timeouts and error
//! handling. Every request includes cookies, since the backend keeps the
//! session in an `HttpOnly` cookie. The helpers never log request bodies.
//!
//! The abort timeout covers the whole exchange: sending, waiting for headers
//! and reading the body. A stalled body therefore ends in `AppError::Timeout`
//! like a stalled connection does.

use super::errors::AppError;
use std::future::Future;

#[cfg(target_arch = "wasm32")]
pub(crate) use browser::{
    get_json_with_credentials, post_empty_with_credentials, post_json_with_credentials,
};

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Runs `exchange` while `guard` is alive. The guard is released only once the
/// exchange has finished, body included.
async fn guarded<G, T>(guard: G, exchange: impl Future<Output = T>) -> T {
    let output = exchange.await;
    drop(guard);
    output
}

/// Browsers report a fired `AbortController` as an `AbortError`.
fn is_abort(message: &str) -> bool {
    let lowered = message.to_lowercase();
    lowered.contains("abort") || lowered.contains("timeout")
}

fn timeout_error() -> AppError {
    AppError::Timeout("Request timed out. Please try again.".to_string())
}

/// Maps a failure while sending or waiting for headers.
fn request_failure(message: &str) -> AppError {
    if is_abort(message) {
        timeout_error()
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Maps a failure while reading or decoding the body.
fn body_failure(message: &str) -> AppError {
    if is_abort(message) {
        timeout_error()
    } else {
        AppError::Parse(format!("Failed to decode response: {message}"))
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{body_failure, guarded, request_failure, sanitize_body};
    use crate::app_lib::{config::AppConfig, errors::AppError};
    use gloo_net::http::{Request, Response};
    use gloo_timers::callback::Timeout;
    use serde::{Serialize, de::DeserializeOwned};
    use serde_json::to_string;
    use std::future::Future;
    use web_sys::{AbortController, AbortSignal, RequestCredentials};

    /// Fetches JSON with cookies for session-authenticated APIs.
    pub async fn get_json_with_credentials<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
        let url = build_url(path);
        send_with_timeout(
            |signal| {
                Request::get(&url)
                    .credentials(RequestCredentials::Include)
                    .abort_signal(Some(signal))
                    .build()
                    .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
            },
            handle_json_response,
        )
        .await
    }

    /// Posts JSON with cookies; the response body is read but not interpreted.
    pub async fn post_json_with_credentials<B: Serialize>(
        path: &str,
        body: &B,
    ) -> Result<(), AppError> {
        let url = build_url(path);
        let payload = to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        send_with_timeout(
            move |signal| {
                Request::post(&url)
                    .header("Content-Type", "application/json")
                    .credentials(RequestCredentials::Include)
                    .abort_signal(Some(signal))
                    .body(payload)
                    .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
            },
            handle_empty_response,
        )
        .await
    }

    /// Posts an empty body with cookies, used to clear a session.
    pub async fn post_empty_with_credentials(path: &str) -> Result<(), AppError> {
        let url = build_url(path);
        send_with_timeout(
            move |signal| {
                Request::post(&url)
                    .credentials(RequestCredentials::Include)
                    .abort_signal(Some(signal))
                    .body("")
                    .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
            },
            handle_empty_response,
        )
        .await
    }

    fn build_url(path: &str) -> String {
        AppConfig::load().endpoint(path)
    }

    /// Sends a request and reads its response under one abort timeout, so
    /// neither a silent server nor a stalled body can hang the UI.
    async fn send_with_timeout<T, Fut>(
        build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
        read_response: impl FnOnce(Response) -> Fut,
    ) -> Result<T, AppError>
    where
        Fut: Future<Output = Result<T, AppError>>,
    {
        let timeout_ms = AppConfig::load().request_timeout_ms;
        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout = Timeout::new(timeout_ms, move || controller.abort());

        let request = build_request(&signal)?;
        guarded(timeout, async move {
            let response = request
                .send()
                .await
                .map_err(|err| request_failure(&err.to_string()))?;
            read_response(response).await
        })
        .await
    }

    /// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
    async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|err| body_failure(&err.to_string()))
        } else {
            Err(http_error(response).await)
        }
    }

    /// Handles responses whose body is irrelevant to the caller.
    async fn handle_empty_response(response: Response) -> Result<(), AppError> {
        if response.ok() {
            Ok(())
        } else {
            Err(http_error(response).await)
        }
    }

    async fn http_error(response: Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        AppError::Http {
            status,
            message: sanitize_body(&body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{body_failure, guarded, request_failure, sanitize_body};
    use crate::app_lib::AppError;
    use futures::channel::oneshot;
    use std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    };

    struct ReleaseFlag(Arc<AtomicBool>);

    impl Drop for ReleaseFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn guard_outlives_the_body_read() {
        let released = Arc::new(AtomicBool::new(false));
        let (body_tx, body_rx) = oneshot::channel::<&str>();
        let guard = ReleaseFlag(Arc::clone(&released));

        let exchange = {
            let released = Arc::clone(&released);
            async move {
                let headers_seen = !released.load(Ordering::SeqCst);
                let body = body_rx.await.unwrap_or_default();
                (headers_seen, !released.load(Ordering::SeqCst), body)
            }
        };
        body_tx.send("[]").expect("receiver alive");

        let (armed_at_headers, armed_at_body, body) = guarded(guard, exchange).await;

        assert!(armed_at_headers);
        assert!(armed_at_body);
        assert_eq!(body, "[]");
        assert!(released.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn guard_is_released_when_the_exchange_fails() {
        let released = Arc::new(AtomicBool::new(false));
        let guard = ReleaseFlag(Arc::clone(&released));

        let result: Result<(), AppError> =
            guarded(guard, async { Err(body_failure("AbortError: aborted")) }).await;

        assert!(matches!(result, Err(AppError::Timeout(_))));
        assert!(released.load(Ordering::SeqCst));
    }

    #[test]
    fn aborts_become_timeouts_at_every_stage() {
        let abort = "AbortError: The user aborted a request.";
        assert!(matches!(request_failure(abort), AppError::Timeout(_)));
        assert!(matches!(body_failure(abort), AppError::Timeout(_)));
    }

    #[test]
    fn other_failures_keep_their_kind() {
        assert!(matches!(
            request_failure("TypeError: Failed to fetch"),
            AppError::Network(_)
        ));
        assert!(matches!(
            body_failure("expected value at line 1 column 1"),
            AppError::Parse(_)
        ));
    }

    #[test]
    fn error_bodies_are_trimmed_and_truncated() {
        assert_eq!(sanitize_body("   "), "Request failed.");
        assert_eq!(sanitize_body("  not found \n"), "not found");
        assert_eq!(sanitize_body(&"x".repeat(500)).chars().count(), 200);
    }
}
