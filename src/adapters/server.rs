use crate::core::classifier::NumberClassifier;
use crate::core::{ClassificationError, FactProvider};
use crate::utils::error::{AppError, Result};
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub const CLASSIFY_PATH: &str = "/api/classify-number";

/// Body returned for rejected input: `{"number": "<tag>", "error": true}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub number: &'static str,
    pub error: bool,
}

impl IntoResponse for ClassificationError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            number: self.tag(),
            error: true,
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

pub fn router<F: FactProvider + 'static>(classifier: NumberClassifier<F>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(CLASSIFY_PATH, get(classify_handler::<F>))
        .layer(cors)
        .with_state(Arc::new(classifier))
}

pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::ServerError {
            message: format!("Failed to bind to {}: {}", addr, e),
        })
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::ServerError {
            message: e.to_string(),
        })
}

async fn classify_handler<F: FactProvider + 'static>(
    State(classifier): State<Arc<NumberClassifier<F>>>,
    RawQuery(query): RawQuery,
) -> Response {
    let input = number_param(query.as_deref());

    match classifier.classify(&input).await {
        Ok(classification) => {
            tracing::info!(
                number = classification.number,
                is_prime = classification.is_prime,
                is_perfect = classification.is_perfect,
                "Classified number"
            );
            Json(classification).into_response()
        }
        Err(e) => {
            tracing::info!(input = %input, reason = e.tag(), "Rejected input: {}", e);
            e.into_response()
        }
    }
}

/// First `number` value of the query string; absent means empty.
fn number_param(query: Option<&str>) -> String {
    query
        .and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "number")
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_default()
}
