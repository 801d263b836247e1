use axum::{routing::get, Router};

use crate::controllers::simulation_controller::{get_defaults, get_health, get_monthly_summary};
use crate::shared_state::SharedState;

/// Build the `/api/*` sub-router.
pub fn api_routes(shared: SharedState) -> Router {
    Router::new()
        .route("/defaults", get(get_defaults))
        .route("/simulation/monthly", get(get_monthly_summary))
        .route("/health", get(get_health))
        .with_state(shared)
}
