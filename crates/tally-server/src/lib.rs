//! Tally Web Server
//!
//! Axum-based JSON API for the Tally personal finance tracker.
//!
//! The server is a thin presentation layer: every computation (summary
//! aggregation, budget alert evaluation) happens in tally-core against the
//! store handle held in [`AppState`]. Requests are handled synchronously;
//! there are no background workers.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use tally_core::ai::{AiBackend, AiClient};
use tally_core::db::Database;

mod handlers;

/// Maximum pagination limit
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    pub db: Database,
    pub config: ServerConfig,
    /// Chat assistant backend; None when OLLAMA_HOST is not configured
    pub ai: Option<AiClient>,
}

/// Create the application router
pub fn create_router(db: Database, config: ServerConfig) -> Router {
    let ai = AiClient::from_env();
    if let Some(ref client) = ai {
        info!(
            "AI backend configured: {} (model: {})",
            client.host(),
            client.model()
        );
    } else {
        info!("AI backend not configured (set OLLAMA_HOST to enable the chat assistant)");
    }
    create_router_with_ai(db, config, ai)
}

/// Create the application router with an explicit AI client (for testing)
pub fn create_router_with_ai(db: Database, config: ServerConfig, ai: Option<AiClient>) -> Router {
    let state = Arc::new(AppState {
        db,
        config: config.clone(),
        ai,
    });

    let api_routes = Router::new()
        // Health
        .route("/health", get(handlers::get_health))
        // Summary and reports
        .route("/financial_summary", get(handlers::get_financial_summary))
        .route("/spending_chart", get(handlers::get_spending_chart))
        .route("/spending_report", get(handlers::get_spending_report))
        // Transactions
        .route("/transactions", get(handlers::list_transactions))
        .route("/add_transaction", post(handlers::add_transaction))
        // Budgets and alerts
        .route(
            "/budgets",
            get(handlers::list_budgets).post(handlers::update_budget),
        )
        .route("/budget_alerts", get(handlers::list_budget_alerts))
        // Categories
        .route("/categories", get(handlers::list_categories))
        // Goals
        .route(
            "/goals",
            get(handlers::list_goals).post(handlers::create_goal),
        )
        .route("/goals/:id/progress", post(handlers::update_goal_progress))
        // Chat assistant
        .route("/chat", post(handlers::chat));

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

/// Start the server
pub async fn serve(db: Database, host: &str, port: u16, config: ServerConfig) -> anyhow::Result<()> {
    // Check AI backend connection
    check_ai_connection().await;

    let app = create_router(db, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Check and log AI backend connection status
async fn check_ai_connection() {
    match AiClient::from_env() {
        Some(client) => {
            if client.health_check().await {
                info!(
                    "AI backend connected: {} (model: {})",
                    client.host(),
                    client.model()
                );
            } else {
                warn!(
                    "AI backend configured but not responding: {} (model: {})",
                    client.host(),
                    client.model()
                );
            }
        }
        None => {
            info!("AI backend not configured (set OLLAMA_HOST to enable the chat assistant)");
        }
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn service_unavailable(msg: &str) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(err: anyhow::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

/// Map core errors onto HTTP statuses: validation failures are the caller's
/// fault (400), missing resources are 404, anything else is a sanitized 500.
impl From<tally_core::Error> for AppError {
    fn from(err: tally_core::Error) -> Self {
        match err {
            tally_core::Error::InvalidData(msg) => AppError::bad_request(&msg),
            tally_core::Error::NotFound(msg) => AppError::not_found(&msg),
            other => AppError::internal(other.into()),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::internal(err)
    }
}
