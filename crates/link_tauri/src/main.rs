//! Desktop host entrypoint.

use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,link_tauri=debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    link_tauri::run();
}
