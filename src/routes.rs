//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered page at `/`, the hydration
//! bundle under `/pkg`, and a liveness check. The resolved site links are
//! provided to each SSR render as context and embedded in the shell.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use site::config::SiteLinks;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router.
pub fn app(leptos_options: LeptosOptions, links: SiteLinks) -> Router {
    let routes = generate_route_list(site::app::App);
    let site_root = leptos_options.site_root.to_string();
    let pkg_dir = leptos_options.site_pkg_dir.to_string();

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let links = links.clone();
                move || provide_context(links.clone())
            },
            {
                let opts = leptos_options.clone();
                move || site::app::shell(opts.clone(), links.clone())
            },
        )
        .with_state(leptos_options);

    static_routes(&Path::new(&site_root).join(pkg_dir))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Bundle, health check and the not-found fallback. Everything here is
/// independent of the Leptos render.
pub fn static_routes(pkg_path: &Path) -> Router {
    Router::new()
        .nest_service("/pkg", ServeDir::new(pkg_path))
        .route("/healthz", get(healthz))
        .fallback(not_found)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page not found.")
}
