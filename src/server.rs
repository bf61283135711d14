//! HTTP front end: `POST /discount` and `GET /health`.
//!
//! Rules are loaded once at startup. Handlers only ever read the store.

use std::sync::Arc;

use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, instrument, warn};

use crate::config::ServerConfig;
use crate::{DiscountOutcome, RebateError, RuleStore};

/// Inbound order to price.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiscountRequest {
    pub order_amount: f64,
    #[serde(default)]
    pub customer_type: String,
}

/// Priced order returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountResponse {
    pub discount_applied: f64,
    pub final_amount: f64,
    pub applied_rules: Vec<String>,
}

impl From<DiscountOutcome> for DiscountResponse {
    fn from(outcome: DiscountOutcome) -> Self {
        let (discount_applied, final_amount, applied_rules) = outcome.into_parts();
        Self {
            discount_applied,
            final_amount,
            applied_rules,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub rules: usize,
}

/// Caller-side failures. Rule loading problems never reach a handler;
/// they abort startup instead.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": message })),
            )
                .into_response(),
        }
    }
}

/// Build the router over a shared rule store.
pub fn router(store: Arc<RuleStore>) -> Router {
    Router::new()
        .route("/discount", post(discount))
        .route("/health", get(health))
        .with_state(store)
}

#[instrument(skip_all)]
async fn discount(
    State(store): State<Arc<RuleStore>>,
    payload: Result<Json<DiscountRequest>, JsonRejection>,
) -> Result<Json<DiscountResponse>, ApiError> {
    let Json(request) = payload.inspect_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected discount request");
    })?;

    let outcome = store.select_best_discount(request.order_amount, &request.customer_type);
    info!(
        order_amount = request.order_amount,
        customer_type = %request.customer_type,
        discount = outcome.discount(),
        "priced order"
    );
    Ok(Json(outcome.into()))
}

async fn health(State(store): State<Arc<RuleStore>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        rules: store.len(),
    })
}

/// Load the configured rules, bind, and serve until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns [`RebateError::Load`] if the rules cannot be loaded and
/// [`RebateError::Io`] if the listener cannot be bound or fails.
pub async fn serve(config: &ServerConfig) -> Result<(), RebateError> {
    let store = Arc::new(RuleStore::new());
    store.load(&config.rules.rules)?;

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, rules = store.len(), "discount service listening");

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("discount service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("ctrl_c signal received"),
        () = terminate => info!("terminate signal received"),
    }
}
