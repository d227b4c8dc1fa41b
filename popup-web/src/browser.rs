//! WebExtension API interop
//!
//! Calls go through the promise-based `browser` namespace when present and
//! fall back to `chrome` (MV3 Chromium also returns promises). Values cross
//! the boundary as JSON so the serde types in `popup-common` define the
//! wire format on both sides.

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use popup_common::PopupNotification;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected value for {0}")]
    UnexpectedShape(&'static str),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        let message = js_sys_x::Reflect::get(&value, &"message".into())
            .ok()
            .and_then(|message| message.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{value:?}"));
        BrowserError::Js(message)
    }
}

pub type BrowserResult<T> = Result<T, BrowserError>;

fn namespace() -> BrowserResult<JsValue> {
    let global = js_sys_x::global();
    for name in ["browser", "chrome"] {
        let candidate = js_sys_x::Reflect::get(&global, &name.into())?;
        if candidate.is_object() {
            return Ok(candidate);
        }
    }
    Err(BrowserError::Unavailable("extension namespace"))
}

/// Walk a property path from the extension namespace, e.g. `["runtime", "onMessage"]`
fn api(path: &[&'static str]) -> BrowserResult<JsValue> {
    let mut current = namespace()?;
    for &segment in path {
        current = js_sys_x::Reflect::get(&current, &segment.into())?;
        if current.is_undefined() || current.is_null() {
            return Err(BrowserError::Unavailable(segment));
        }
    }
    Ok(current)
}

fn method(target: &JsValue, name: &'static str) -> BrowserResult<js_sys_x::Function> {
    js_sys_x::Reflect::get(target, &name.into())?
        .dyn_into::<js_sys_x::Function>()
        .map_err(|_| BrowserError::Unavailable(name))
}

async fn resolve(value: JsValue) -> BrowserResult<JsValue> {
    let promise = value
        .dyn_into::<js_sys_x::Promise>()
        .map_err(|_| BrowserError::UnexpectedShape("promise"))?;
    Ok(wasm_bindgen_futures_x::JsFuture::from(promise).await?)
}

fn to_js<T: Serialize>(value: &T) -> BrowserResult<JsValue> {
    let json = serde_json::to_string(value)?;
    Ok(js_sys_x::JSON::parse(&json)?)
}

fn from_js<T: DeserializeOwned>(value: &JsValue) -> BrowserResult<T> {
    // JSON.stringify(undefined) is not a string
    if value.is_undefined() {
        return Ok(serde_json::from_str("null")?);
    }
    let json: String = js_sys_x::JSON::stringify(value)?.into();
    Ok(serde_json::from_str(&json)?)
}

/// `runtime.sendMessage(message)`, decoding the reply
pub async fn send_message<M, R>(message: &M) -> BrowserResult<R>
where
    M: Serialize,
    R: DeserializeOwned,
{
    let runtime = api(&["runtime"])?;
    let payload = to_js(message)?;
    let pending = method(&runtime, "sendMessage")?.call1(&runtime, &payload)?;
    let reply = resolve(pending).await?;
    from_js(&reply)
}

/// `runtime.sendMessage(message)` where the reply carries no information
pub async fn send_command<M: Serialize>(message: &M) -> BrowserResult<()> {
    let runtime = api(&["runtime"])?;
    let payload = to_js(message)?;
    let pending = method(&runtime, "sendMessage")?.call1(&runtime, &payload)?;
    resolve(pending).await?;
    Ok(())
}

/// Absolute URL of a file bundled with the extension
pub fn get_url(path: &str) -> BrowserResult<String> {
    let runtime = api(&["runtime"])?;
    method(&runtime, "getURL")?
        .call1(&runtime, &path.into())?
        .as_string()
        .ok_or(BrowserError::UnexpectedShape("runtime.getURL"))
}

/// `i18n.getMessage`, or the message name itself when the lookup is empty
/// or the API is missing.
pub fn get_message(key: &str, substitutions: &[String]) -> String {
    let lookup = || -> BrowserResult<Option<String>> {
        let i18n = api(&["i18n"])?;
        let subs = js_sys_x::Array::new();
        for substitution in substitutions {
            subs.push(&substitution.into());
        }
        let message = method(&i18n, "getMessage")?.call2(&i18n, &key.into(), &subs)?;
        Ok(message.as_string().filter(|message| !message.is_empty()))
    };

    match lookup() {
        Ok(Some(message)) => message,
        Ok(None) => key.to_string(),
        Err(err) => {
            debug!("No translation for {key}: {err}");
            key.to_string()
        }
    }
}

/// `storage.local.get(key)[key]`, or `None` if unset
pub async fn storage_local_get<T: DeserializeOwned>(key: &str) -> BrowserResult<Option<T>> {
    let local = api(&["storage", "local"])?;
    let pending = method(&local, "get")?.call1(&local, &key.into())?;
    let items = resolve(pending).await?;
    let value = js_sys_x::Reflect::get(&items, &key.into())?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    from_js(&value).map(Some)
}

/// `navigator.userAgent` and `navigator.maxTouchPoints`
pub fn navigator_traits() -> BrowserResult<(String, i32)> {
    let window = web_sys_x::window().ok_or(BrowserError::Unavailable("window"))?;
    let navigator = window.navigator();
    let user_agent = navigator.user_agent()?;
    Ok((user_agent, navigator.max_touch_points()))
}

/// A `runtime.onMessage` listener that removes itself when dropped.
///
/// Messages that do not decode as a [`PopupNotification`] are ignored. The
/// handler runs inside the Dioxus runtime that was current at construction.
pub struct RuntimeMessageListener {
    on_message: JsValue,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl RuntimeMessageListener {
    pub fn new(mut handler: impl FnMut(PopupNotification) + 'static) -> BrowserResult<Self> {
        let on_message = api(&["runtime", "onMessage"])?;

        // The listener fires from wasm-bindgen outside the Dioxus runtime
        let runtime = Runtime::current();
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(move |message: JsValue| {
            let _guard = RuntimeGuard::new(runtime.clone());
            match from_js::<PopupNotification>(&message) {
                Ok(notification) => handler(notification),
                Err(err) => debug!("Ignoring runtime message: {err}"),
            }
        }));

        method(&on_message, "addListener")?.call1(&on_message, callback.as_ref())?;

        Ok(Self {
            on_message,
            callback,
        })
    }
}

impl Drop for RuntimeMessageListener {
    fn drop(&mut self) {
        if let Ok(remove) = method(&self.on_message, "removeListener") {
            let _ = remove.call1(&self.on_message, self.callback.as_ref());
        }
    }
}
