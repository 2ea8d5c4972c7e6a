//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds operational endpoints and the Leptos SSR pages under a single Axum
//! router. The compiled client bundle is served from `<site_root>/pkg`.

pub mod health;


use std::path::PathBuf;

use axum::Router;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use portal_client::app::{App, shell};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Non-page routes: health and the `/api` namespace.
fn api_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/api", any(health::api_not_found))
        .route("/api/{*rest}", any(health::api_not_found))
        .layer(cors)
}

/// Full application: API routes, Leptos SSR pages and static assets.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = site_root_path.join(leptos_options.site_pkg_dir.as_ref());

    api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(TraceLayer::new_for_http())
}
