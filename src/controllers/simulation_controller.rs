use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::models::simulation::{HealthStatus, MonthlySummaryResponse, SimulationParameters};
use crate::services::consumption::allocate_annual;
use crate::services::monthly_model::{assemble, with_month_keys};
use crate::services::pvgis::SiteSpec;
use crate::shared_state::AppState;

const PLACEHOLDER_NOTE: &str =
    "Simulated savings & charts will appear here once dispatch functions are integrated.";

/// GET /api/defaults
/// Default simulation parameters
///
/// Returns the stock parameter set the dashboard controls are seeded with.
#[utoipa::path(
    get,
    path = "/api/defaults",
    responses(
        (status = 200, description = "Default simulation parameters", body = SimulationParameters)
    )
)]
pub async fn get_defaults() -> impl IntoResponse {
    Json(SimulationParameters::default()).into_response()
}

/// GET /api/simulation/monthly
/// Monthly consumption/generation summary
///
/// Allocates the annual consumption across twelve months with the seasonal
/// curve, fetches the PVGIS generation estimate for the site (memoized per
/// parameter tuple), and joins both series into the monthly summary table.
/// A PVGIS failure aborts the computation — no partial or zeroed table is
/// ever returned.
#[utoipa::path(
    get,
    path = "/api/simulation/monthly",
    params(SimulationParameters),
    responses(
        (status = 200, description = "Twelve-row monthly summary", body = MonthlySummaryResponse),
        (status = 502, description = "Generation-estimate service failure")
    )
)]
pub async fn get_monthly_summary(
    Query(params): Query<SimulationParameters>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let site = SiteSpec::from(&params);

    let generation = match state.estimator.monthly_generation(&site).await {
        Ok(series) => series,
        Err(e) => {
            eprintln!("[PVGIS] estimate failed for ({}, {}): {}", site.latitude, site.longitude, e);
            return (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    let consumption = allocate_annual(params.annual_usage_kwh);
    let records = assemble(&with_month_keys(&consumption), &with_month_keys(&generation));

    let response = MonthlySummaryResponse {
        timestamp: chrono::Utc::now(),
        peak_power_kwp: params.peak_power_kwp(),
        annual_consumption_kwh: records.iter().map(|r| r.consumption_kwh).sum(),
        annual_generation_kwh: records.iter().map(|r| r.generation_kwh).sum(),
        records,
        parameters: params,
        note: PLACEHOLDER_NOTE.to_string(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/health
/// Service health
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service health", body = HealthStatus)
    )
)]
pub async fn get_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cached_sites: state.estimator.cached_sites(),
    })
    .into_response()
}
