use js_sys::Promise;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::*;

#[wasm_bindgen(inline_js = r#"
export function hostInvoke(cmd, args) {
  const tauri = window.__TAURI__;
  if (!tauri || !tauri.core || typeof tauri.core.invoke !== 'function') {
    return Promise.reject(new Error('Tauri invoke bridge is unavailable'));
  }
  return tauri.core.invoke(cmd, args);
}

export function openWindowUrl(url) {
  const opened = window.open(url, '_blank', 'noopener,noreferrer');
  if (!opened) {
    window.location.href = url;
  }
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = hostInvoke)]
    fn host_invoke(cmd: &str, args: JsValue) -> Promise;

    #[wasm_bindgen(js_name = openWindowUrl, catch)]
    fn open_window_url_js(url: &str) -> Result<(), JsValue>;
}

fn js_error_to_string(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|error| String::from(error.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

#[derive(Serialize)]
struct OpenExternalBrowserArgs<'a> {
    url: &'a str,
}

pub async fn invoke_open_external_browser(url: &str) -> Result<OpenedResponse, String> {
    let args = serde_wasm_bindgen::to_value(&OpenExternalBrowserArgs { url })
        .map_err(|err| err.to_string())?;
    let value = JsFuture::from(host_invoke("open_external_browser", args))
        .await
        .map_err(js_error_to_string)?;
    serde_wasm_bindgen::from_value(value).map_err(|err| err.to_string())
}

pub async fn open_window_url(url: &str) -> Result<(), String> {
    open_window_url_js(url).map_err(js_error_to_string)
}

pub fn subscribe_resume(listener: ResumeListener) -> ResumeSubscription {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return ResumeSubscription::inert();
    };

    let closure = Closure::<dyn FnMut()>::new(move || {
        let visible = web_sys::window()
            .and_then(|window| window.document())
            .map(|document| document.visibility_state() == web_sys::VisibilityState::Visible)
            .unwrap_or(false);
        if visible {
            listener();
        }
    });

    if document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())
        .is_err()
    {
        return ResumeSubscription::inert();
    }

    ResumeSubscription::new(move || {
        let _ = document
            .remove_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    })
}
