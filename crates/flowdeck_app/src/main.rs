// SPDX-License-Identifier: MIT OR Apache-2.0
//! flowdeck authoring front end.
//!
//! Terminal rendition of the editor surface: a new-component form, canvas
//! editing commands, and snapshot export. The flow-graph semantics live in
//! `flowdeck_graph`; this binary is only the operator-facing shell.

mod app;
mod form;

use app::EditorApp;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("flowdeck_graph=info".parse().unwrap())
        .add_directive("flowdeck_app=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting flowdeck v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = EditorApp::new().run() {
        tracing::error!("Editor session failed: {e}");
        std::process::exit(1);
    }
}
