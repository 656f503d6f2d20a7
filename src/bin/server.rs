//! REST API server for credit card checks.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! cardcheck-server
//!
//! # Custom address (or CARDCHECK_HOST / CARDCHECK_PORT)
//! cardcheck-server --host 127.0.0.1 --port 8080
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use axum::{
    extract::{Query, Request, State},
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{IntoParams, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use cardcheck::batch::{validate_batch, BatchSummary};
use cardcheck::{format, generate, network, normalize, validate_card, CardNetwork, ValidationError};

// ============================================================================
// Configuration
// ============================================================================

#[derive(Parser, Debug, Clone)]
#[command(name = "cardcheck-server", version, about = "Credit card checker REST API")]
struct Config {
    /// Address to bind
    #[arg(long, env = "CARDCHECK_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "CARDCHECK_PORT", default_value_t = 3000)]
    port: u16,

    /// Largest accepted batch
    #[arg(long, env = "CARDCHECK_MAX_BATCH", default_value_t = 1000)]
    max_batch: usize,
}

#[derive(Clone)]
struct AppState {
    max_batch: usize,
}

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Checker API",
        version = "0.1.0",
        description = "Luhn validation, network detection and display grouping for card numbers.",
        license(name = "MIT")
    ),
    tags(
        (name = "Validation", description = "Card number validation endpoints"),
        (name = "Detection", description = "Network detection from partial numbers"),
        (name = "Formatting", description = "Card number grouping"),
        (name = "Generation", description = "Test card number generation"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(
        validate_handler,
        validate_batch_handler,
        detect_handler,
        format_handler,
        generate_handler,
        health,
    ),
    components(schemas(
        ValidateRequest,
        ValidateResponse,
        ErrorResponse,
        BatchValidateRequest,
        BatchEntry,
        BatchValidateResponse,
        DetectQuery,
        DetectResponse,
        FormatRequest,
        FormatResponse,
        GenerateRequest,
        GenerateResponse,
        HealthResponse,
    ))
)]
struct ApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"card_number": "4111 1111 1111 1111"}))]
struct ValidateRequest {
    /// Card number to validate. Every non-digit character is ignored.
    card_number: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "isValid": true,
    "cardType": "Visa",
    "formatted": "4111 1111 1111 1111"
}))]
struct ValidateResponse {
    /// Whether the Luhn checksum passed
    is_valid: bool,
    /// Visa, Mastercard, AmericanExpress, Discover, JCB, DinersClub or Unknown
    card_type: String,
    /// Digits grouped for display
    formatted: String,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "error": "OutOfRangeLength",
    "message": "card number must have 13 to 19 digits, got 3"
}))]
struct ErrorResponse {
    /// EmptyInput or OutOfRangeLength
    error: String,
    /// Human-readable explanation
    message: String,
}

impl From<&ValidationError> for ErrorResponse {
    fn from(e: &ValidationError) -> Self {
        Self {
            error: e.kind().to_string(),
            message: e.to_string(),
        }
    }
}

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"card_numbers": ["4111111111111111", "371449635398431", "123"]}))]
struct BatchValidateRequest {
    /// Card numbers to validate
    card_numbers: Vec<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct BatchEntry {
    /// Whether the checksum passed (absent when the input was rejected)
    #[serde(skip_serializing_if = "Option::is_none")]
    is_valid: Option<bool>,
    /// Detected network (absent when the input was rejected)
    #[serde(skip_serializing_if = "Option::is_none")]
    card_type: Option<String>,
    /// Masked number, last 4 digits only
    #[serde(skip_serializing_if = "Option::is_none")]
    masked: Option<String>,
    /// Rejection kind
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize, ToSchema)]
struct BatchValidateResponse {
    /// One entry per input, same order
    results: Vec<BatchEntry>,
    /// Entries processed
    total: usize,
    /// Entries passing the checksum
    valid: usize,
    /// Entries failing the checksum
    invalid: usize,
    /// Entries rejected before the checksum
    errors: usize,
}

#[derive(Deserialize, ToSchema, IntoParams)]
struct DetectQuery {
    /// Card number or prefix
    card: String,
}

#[derive(Serialize, ToSchema)]
struct DetectResponse {
    /// Detected network identifier
    network: String,
    /// Display name
    name: String,
}

#[derive(Deserialize, ToSchema)]
struct FormatRequest {
    /// Card number to format
    card_number: String,
    /// Separator (default: space)
    #[serde(default = "default_separator")]
    separator: String,
}

fn default_separator() -> String {
    " ".to_string()
}

#[derive(Serialize, ToSchema)]
struct FormatResponse {
    /// Grouped digits
    formatted: String,
    /// Digits only
    stripped: String,
}

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"network": "amex", "count": 3, "formatted": true}))]
struct GenerateRequest {
    /// Network: visa, mastercard, amex, discover, jcb, diners, unknown
    network: String,
    /// Number of cards to generate (1-100, default: 1)
    #[serde(default = "default_count")]
    count: usize,
    /// Group output with spaces
    #[serde(default)]
    formatted: bool,
}

fn default_count() -> usize {
    1
}

#[derive(Serialize, ToSchema)]
struct GenerateResponse {
    /// Generated card numbers
    cards: Vec<String>,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    /// Service status
    status: String,
    /// API version
    version: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Validate a credit card number
#[utoipa::path(
    post,
    path = "/validate",
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Validation result", body = ValidateResponse),
        (status = 422, description = "Input cannot be a card number", body = ErrorResponse)
    ),
    tag = "Validation"
)]
async fn validate_handler(Json(req): Json<ValidateRequest>) -> Response {
    match validate_card(&req.card_number) {
        Ok(result) => Json(ValidateResponse {
            is_valid: result.is_valid(),
            card_type: result.card_type().id().to_string(),
            formatted: result.formatted().to_string(),
        })
        .into_response(),
        Err(e) => {
            tracing::debug!(error = e.kind(), "rejected card number");
            (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorResponse::from(&e))).into_response()
        }
    }
}

/// Validate multiple card numbers
#[utoipa::path(
    post,
    path = "/validate/batch",
    request_body = BatchValidateRequest,
    responses(
        (status = 200, description = "Batch validation results", body = BatchValidateResponse),
        (status = 400, description = "Batch too large")
    ),
    tag = "Validation"
)]
async fn validate_batch_handler(
    State(state): State<AppState>,
    Json(req): Json<BatchValidateRequest>,
) -> Result<Json<BatchValidateResponse>, (StatusCode, String)> {
    if req.card_numbers.len() > state.max_batch {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("batch of {} exceeds the limit of {}", req.card_numbers.len(), state.max_batch),
        ));
    }

    let results = validate_batch(&req.card_numbers);
    let summary = BatchSummary::from_results(&results);
    tracing::info!(total = summary.total, valid = summary.valid, "validated batch");

    let entries = results
        .iter()
        .map(|r| match r {
            Ok(r) => BatchEntry {
                is_valid: Some(r.is_valid()),
                card_type: Some(r.card_type().id().to_string()),
                masked: Some(r.masked()),
                error: None,
            },
            Err(e) => BatchEntry {
                is_valid: None,
                card_type: None,
                masked: None,
                error: Some(e.kind().to_string()),
            },
        })
        .collect();

    Ok(Json(BatchValidateResponse {
        results: entries,
        total: summary.total,
        valid: summary.valid,
        invalid: summary.invalid,
        errors: summary.errors,
    }))
}

/// Detect the network of a (partial) card number
#[utoipa::path(
    get,
    path = "/detect",
    params(DetectQuery),
    responses(
        (status = 200, description = "Detected network", body = DetectResponse)
    ),
    tag = "Detection"
)]
async fn detect_handler(Query(query): Query<DetectQuery>) -> Json<DetectResponse> {
    let detected = network::classify(&normalize(&query.card));
    Json(DetectResponse {
        network: detected.id().to_string(),
        name: detected.name().to_string(),
    })
}

/// Group a card number for display
#[utoipa::path(
    post,
    path = "/format",
    request_body = FormatRequest,
    responses(
        (status = 200, description = "Formatted card", body = FormatResponse)
    ),
    tag = "Formatting"
)]
async fn format_handler(Json(req): Json<FormatRequest>) -> Json<FormatResponse> {
    let digits = normalize(&req.card_number);
    Json(FormatResponse {
        formatted: format::format_with_separator(&digits, &req.separator),
        stripped: digits.as_str().to_string(),
    })
}

/// Generate test card numbers
#[utoipa::path(
    post,
    path = "/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated cards", body = GenerateResponse),
        (status = 400, description = "Unknown network")
    ),
    tag = "Generation"
)]
async fn generate_handler(
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, String)> {
    let network: CardNetwork = req
        .network
        .parse()
        .map_err(|e: network::ParseNetworkError| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let count = req.count.clamp(1, 100);

    let cards = generate::generate_cards(network, count)
        .into_iter()
        .map(|card| {
            if req.formatted {
                format::format_card_number(&card)
            } else {
                card
            }
        })
        .collect();

    Ok(Json(GenerateResponse { cards }))
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Main
// ============================================================================

/// Path of a request as it may be logged. Query strings such as
/// `/detect?card=...` carry card numbers and are left out.
fn loggable_path(uri: &Uri) -> &str {
    uri.path()
}

fn request_span(request: &Request) -> tracing::Span {
    tracing::debug_span!(
        "request",
        method = %request.method(),
        path = loggable_path(request.uri()),
        version = ?request.version(),
    )
}

fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/validate", post(validate_handler))
        .route("/validate/batch", post(validate_batch_handler))
        .route("/detect", get(detect_handler))
        .route("/format", post(format_handler))
        .route("/generate", post(generate_handler))
        .route("/health", get(health))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    tracing::debug!(?config, "loaded configuration");

    let app = router(AppState {
        max_batch: config.max_batch,
    });

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://localhost:{}/swagger-ui/", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
