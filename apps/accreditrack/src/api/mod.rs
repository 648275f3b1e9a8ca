//! # AccrediTrack HTTP API Module
//!
//! HTTP REST API over the document registry, using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/auth/login` - Issue a display session
//! - `GET /api/criteria` - The checklist catalog
//! - `GET /api/documents?search=` - List (or search) document records
//! - `POST /api/documents` - Create a document record
//! - `DELETE /api/documents/{id}` - Delete a document record
//! - `GET /api/readiness` - Per-criterion readiness and summary
//!
//! ## Security Configuration (Environment Variables)
//!
//! - `ACCREDITRACK_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)
//! - `ACCREDITRACK_RATE_LIMIT`: Requests per second (default: 100, 0 to disable)
//! - `ACCREDITRACK_API_KEY`: If set, requires Bearer token authentication

mod auth;
mod error;
mod handlers;
mod middleware;
mod types;

pub use auth::get_api_key_from_env;
pub use error::ApiError;
pub use middleware::{create_rate_limiter, get_rate_limit_from_env};
// Handlers and types are public for integration tests (via `accreditrack::api::*`)
pub use handlers::{
    criteria_handler, delete_document_handler, health_handler, list_documents_handler,
    login_handler, readiness_handler, upload_document_handler,
};
pub use types::{
    CriterionReadiness, ErrorResponse, HealthResponse, LoginRequest, LoginResponse,
    MessageResponse, ReadinessResponse, SearchQuery, UploadResponse,
};

use accreditrack_core::{AccreditError, Checklist, DocumentRegistry};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Request body limit (1 MiB).
const MAX_BODY_SIZE: usize = 1024 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state: the registry behind one lock, the catalog read-only.
#[derive(Clone)]
pub struct AppState {
    /// Creates and deletes take the write lock; everything else reads.
    pub registry: Arc<RwLock<DocumentRegistry>>,
    pub checklist: Arc<Checklist>,
}

impl AppState {
    /// Create new app state.
    #[must_use]
    pub fn new(registry: DocumentRegistry, checklist: Checklist) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            checklist: Arc::new(checklist),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

const CORS_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];

/// Build CORS layer from `ACCREDITRACK_CORS_ORIGINS`.
///
/// - `*`: allow all origins
/// - unset: localhost only
/// - otherwise: comma-separated list of allowed origins
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var("ACCREDITRACK_CORS_ORIGINS").ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!(
                "CORS: Allowing ALL origins (ACCREDITRACK_CORS_ORIGINS=*). Not for production use"
            );
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(hv) => {
                        tracing::info!("CORS: Allowing origin: {}", origin);
                        Some(hv)
                    }
                    Err(e) => {
                        tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                        None
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in ACCREDITRACK_CORS_ORIGINS, defaulting to localhost only"
                );
                build_localhost_cors()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods(CORS_METHODS)
                    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            }
        }
        None => {
            tracing::info!("CORS: No ACCREDITRACK_CORS_ORIGINS set, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

/// CORS layer that only allows the usual local dev origins.
fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:5173",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:5173",
    ]
    .iter()
    .filter_map(|o| o.parse::<HeaderValue>().ok())
    .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(CORS_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing
/// 2. CORS
/// 3. Body limit
/// 4. Rate limiting (if enabled)
/// 5. Authentication (if configured)
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer();

    let rate_limit = get_rate_limit_from_env();
    let rate_limiter = if rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", rate_limit);
        Some(create_rate_limiter(rate_limit))
    } else {
        tracing::info!("Rate limiting disabled");
        None
    };

    let has_auth = get_api_key_from_env().is_some();
    if has_auth {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!(
            "API key authentication DISABLED - all endpoints are publicly accessible. \
             Set ACCREDITRACK_API_KEY to enable authentication."
        );
    }

    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/auth/login", post(handlers::login_handler))
        .route("/api/criteria", get(handlers::criteria_handler))
        .route(
            "/api/documents",
            get(handlers::list_documents_handler).post(handlers::upload_document_handler),
        )
        .route("/api/documents/{id}", delete(handlers::delete_document_handler))
        .route("/api/readiness", get(handlers::readiness_handler));

    if has_auth {
        router = router.layer(axum_middleware::from_fn(auth::api_key_auth_middleware));
    }

    if let Some(limiter) = rate_limiter {
        router = router.layer(axum_middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Bind `addr` and serve until Ctrl+C.
pub async fn run_server(
    addr: &str,
    registry: DocumentRegistry,
    checklist: Checklist,
) -> Result<(), AccreditError> {
    let state = AppState::new(registry, checklist);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AccreditError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("AccrediTrack HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AccreditError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

// =============================================================================
// TESTS
// =============================================================================
