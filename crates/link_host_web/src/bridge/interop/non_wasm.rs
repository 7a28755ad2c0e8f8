use super::*;

fn unsupported() -> String {
    "Webview navigation APIs are only available when compiled for wasm32".to_string()
}

pub async fn invoke_open_external_browser(_url: &str) -> Result<OpenedResponse, String> {
    Err(unsupported())
}

pub async fn open_window_url(_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn subscribe_resume(_listener: ResumeListener) -> ResumeSubscription {
    ResumeSubscription::inert()
}
