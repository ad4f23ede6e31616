//! # API REST
//!
//! REST API implementation for the EMR address utilities.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (status codes, CORS, API key header)
//!
//! Uses `api-shared` for wire types and `emr-core` for the lookups themselves.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::auth::{is_authenticated, API_KEY_HEADER};
use api_shared::{
    AddressHierarchyQuery, AddressHierarchyRes, AuthRes, BirthdateQuery, BirthdateRes,
    HealthRes, HealthService, ReloadRes,
};
use emr_core::{birthdate_from_age, lists_states, HierarchyStore, PersonAddressSource};

/// Application state shared across REST API handlers
///
/// Holds the process-wide hierarchy store, the person address collaborator and the API key
/// resolved at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<HierarchyStore>,
    pub persons: Arc<dyn PersonAddressSource>,
    pub api_key: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        authenticated,
        address_hierarchy,
        reload_address_hierarchy,
        birthdate,
    ),
    components(schemas(HealthRes, AuthRes, AddressHierarchyRes, ReloadRes, BirthdateRes))
)]
pub struct ApiDoc;

/// Build the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/authenticated", get(authenticated))
        .route("/address-hierarchy", get(address_hierarchy))
        .route("/address-hierarchy/reload", post(reload_address_hierarchy))
        .route("/birthdate", get(birthdate))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn caller_is_authenticated(state: &AppState, headers: &HeaderMap) -> bool {
    let provided = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    is_authenticated(state.api_key.as_deref(), provided)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/authenticated",
    responses(
        (status = 200, description = "Whether the x-api-key header is valid", body = AuthRes)
    )
)]
/// Reports whether the caller presented the configured API key.
#[axum::debug_handler]
async fn authenticated(State(state): State<AppState>, headers: HeaderMap) -> Json<AuthRes> {
    Json(AuthRes {
        authenticated: caller_is_authenticated(&state, &headers),
    })
}

#[utoipa::path(
    get,
    path = "/address-hierarchy",
    params(AddressHierarchyQuery),
    responses(
        (status = 200, description = "States, townships or villages", body = AddressHierarchyRes),
        (status = 404, description = "Unknown patient"),
        (status = 500, description = "Person address lookup failed")
    )
)]
/// Address hierarchy drill-down
///
/// With no `state`, lists all states (pre-filled with the patient's stored address when
/// `patientId` is given). With a `state` only, lists its townships. With both, lists the
/// township's villages. Unknown names give empty lists.
///
/// `patientId` is only looked up for the state listing; township and village lists never
/// depend on it.
///
/// # Errors
/// For the state listing only:
/// - `404 Not Found` if `patientId` names no known person,
/// - `500 Internal Server Error` if the person address source fails.
#[axum::debug_handler]
async fn address_hierarchy(
    State(state): State<AppState>,
    Query(query): Query<AddressHierarchyQuery>,
) -> Result<Json<AddressHierarchyRes>, (StatusCode, &'static str)> {
    let patient_id = query
        .patient_id
        .as_deref()
        .filter(|id| !id.is_empty() && lists_states(query.state.as_deref()));

    let selection = match patient_id {
        None => None,
        Some(patient_id) => match state.persons.address_for(patient_id) {
            Ok(Some(address)) => Some(address.selection()),
            Ok(None) => {
                tracing::warn!("address hierarchy requested for unknown patient {}", patient_id);
                return Err((StatusCode::NOT_FOUND, "Patient not found"));
            }
            Err(e) => {
                tracing::error!("Person address lookup error: {:?}", e);
                return Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"));
            }
        },
    };

    Ok(Json(state.store.handle(
        query.state.as_deref(),
        query.township.as_deref(),
        selection.as_ref(),
    )))
}

#[utoipa::path(
    post,
    path = "/address-hierarchy/reload",
    responses(
        (status = 200, description = "Hierarchy reloaded", body = ReloadRes),
        (status = 401, description = "Missing or invalid x-api-key")
    )
)]
/// Reload the address hierarchy file and swap it in.
///
/// Requires the configured API key.
#[axum::debug_handler]
async fn reload_address_hierarchy(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ReloadRes>, (StatusCode, &'static str)> {
    if !caller_is_authenticated(&state, &headers) {
        return Err((StatusCode::UNAUTHORIZED, "Unauthorized"));
    }

    let hierarchy = state.store.reload();
    tracing::info!(
        "address hierarchy reloaded from {}",
        state.store.source().display()
    );
    Ok(Json(ReloadRes {
        regions: hierarchy.regions().len(),
    }))
}

#[utoipa::path(
    get,
    path = "/birthdate",
    params(BirthdateQuery),
    responses(
        (status = 200, description = "Estimated birthdate", body = BirthdateRes),
        (status = 400, description = "Invalid age or reference date")
    )
)]
/// Estimate a birthdate from an age such as `30y`, `6m`, `4w` or `10d`.
#[axum::debug_handler]
async fn birthdate(
    State(_state): State<AppState>,
    Query(query): Query<BirthdateQuery>,
) -> Result<Json<BirthdateRes>, (StatusCode, String)> {
    let today = match query.now.as_deref().filter(|now| !now.is_empty()) {
        Some(now) => now.parse::<NaiveDate>().map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                format!("invalid reference date: {e}"),
            )
        })?,
        None => chrono::Local::now().date_naive(),
    };

    let date = birthdate_from_age(&query.age, today)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Json(BirthdateRes {
        birthdate: date.format("%Y-%m-%d").to_string(),
    }))
}
