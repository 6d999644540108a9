//! JSON HTTP API over the catalog, the monthly advisor and layouts.
//!
//! ## Endpoints
//!
//! - `GET /api/health`
//! - `GET /api/plants?category=&search=` - catalog, ordered by name
//! - `GET /api/plants/{id}`
//! - `GET /api/calendar` - frost dates and every plant's date windows
//! - `GET /api/now?month=` - monthly advisory (defaults to this month)
//! - `GET /api/layouts`, `POST /api/layouts`
//! - `GET|PUT|DELETE /api/layouts/{id}`
//! - `POST /api/layouts/{id}/plants` - place a plant on a layout
//!
//! There is no authentication.

mod http_error;
pub mod layouts;
pub mod plants;

pub use http_error::HttpError;

use crate::advisor::MonthlyAdvisor;
use crate::calendar::{Clock, FrostDates};
use crate::catalog::Catalog;
use crate::config::GardenConfig;
use crate::error::Result;
use crate::storage::LayoutRepository;
use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// State shared by all handlers.
///
/// The catalog is immutable once loaded. Layout writes are serialized by
/// `write_lock`; reads go straight to disk.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GardenConfig>,
    pub project_root: Arc<PathBuf>,
    pub catalog: Arc<Catalog>,
    pub frost: FrostDates,
    pub clock: Arc<dyn Clock>,
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(
        config: GardenConfig,
        project_root: PathBuf,
        catalog: Catalog,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let frost = config.climate.frost_dates()?;
        Ok(Self {
            config: Arc::new(config),
            project_root: Arc::new(project_root),
            catalog: Arc::new(catalog),
            frost,
            clock,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn layouts(&self) -> LayoutRepository {
        LayoutRepository::new(&self.config, &self.project_root)
    }

    pub fn advisor(&self) -> MonthlyAdvisor<'_> {
        MonthlyAdvisor::new(
            self.catalog.entries(),
            self.catalog.as_ref(),
            self.clock.as_ref(),
            self.frost,
        )
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(plants::health))
        .route("/api/plants", get(plants::list_plants))
        .route("/api/plants/{id}", get(plants::get_plant))
        .route("/api/calendar", get(plants::calendar))
        .route("/api/now", get(plants::now))
        .route(
            "/api/layouts",
            get(layouts::list_layouts).post(layouts::create_layout),
        )
        .route(
            "/api/layouts/{id}",
            get(layouts::get_layout)
                .put(layouts::update_layout)
                .delete(layouts::delete_layout),
        )
        .route("/api/layouts/{id}/plants", post(layouts::place_plant))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );
    response
}

/// Serve the API until Ctrl-C.
pub async fn run_server(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, plants = state.catalog.len(), "Server listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
