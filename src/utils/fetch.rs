//! Network fetching utilities with timeout support.
//!
//! Provides an async text fetch with timeout racing on top of the browser
//! Fetch API.

use js_sys::{Array, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use hublens_core::RequestError;

use crate::config::FETCH_TIMEOUT_MS;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// Implements timeout behavior on any JavaScript Promise using
/// `Promise.race` against a `setTimeout` promise that resolves to
/// undefined.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Create timeout promise that resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    // Race the promises
    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch the body of `url` as text using the Fetch API with timeout.
///
/// Uses [`race_with_timeout`]; a request that outlives `FETCH_TIMEOUT_MS`
/// returns [`RequestError::Timeout`]. Non-2xx responses map to
/// [`RequestError::Http`].
pub async fn fetch_text(url: &str) -> Result<String, RequestError> {
    let window = web_sys::window().ok_or(RequestError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| RequestError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(RequestError::Timeout),
        RaceResult::Error(msg) => Err(RequestError::Network(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| RequestError::ResponseRead)?;

            if !resp.ok() {
                return Err(RequestError::Http(resp.status()));
            }

            let text = JsFuture::from(resp.text().map_err(|_| RequestError::ResponseRead)?)
                .await
                .map_err(|_| RequestError::ResponseRead)?;

            text.as_string().ok_or(RequestError::ResponseRead)
        }
    }
}
