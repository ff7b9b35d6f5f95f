//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with one route per page-table entry
//! - Mount the static asset directory under its URL prefix
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::SiteConfig;
use crate::http::request::RequestUuid;
use crate::http::response;
use crate::pages::{self, Page};
use crate::render::Templates;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub templates: Arc<Templates>,
}

/// HTTP server for the site.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SiteConfig) -> Self {
        let state = AppState {
            templates: Arc::new(Templates::new(&config.content.template_dir)),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router: page routes, static assets, middleware.
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let mut router = Router::new();
        for page in pages::pages() {
            // Only GET is registered; other methods get the framework's 405.
            router = router.route(
                page.path,
                get(move |state: State<AppState>| serve_page(state, page)),
            );
        }

        let static_prefix = config.content.static_url_prefix.trim_end_matches('/');

        router
            .fallback(response::not_found)
            .nest_service(static_prefix, ServeDir::new(&config.content.static_dir))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(RequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(SetResponseHeaderLayer::if_not_present(
                        header::SERVER,
                        HeaderValue::from_static(concat!(
                            "site-server/",
                            env!("CARGO_PKG_VERSION")
                        )),
                    )),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Render one page-table entry.
async fn serve_page(State(state): State<AppState>, page: &'static Page) -> Response {
    match state.templates.render(page.template, &page.vars()).await {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            tracing::error!(
                template = page.template,
                error = %err,
                "Template render failed"
            );
            response::render_failure()
        }
    }
}
