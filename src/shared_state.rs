use axum::extract::FromRef;

use crate::config::Config;
use crate::services::pvgis::{GenerationEstimator, PvgisClient};

/// Process-wide mutable state: the memoizing generation estimator. Clones
/// share the underlying cache.
#[derive(Clone)]
pub struct AppState {
    pub estimator: GenerationEstimator<PvgisClient>,
}

impl AppState {
    pub fn new(estimator: GenerationEstimator<PvgisClient>) -> Self {
        Self { estimator }
    }
}

/// Router state bundling the static configuration with the runtime state.
/// Handlers extract `State<AppState>` and/or `State<Config>` via `FromRef`,
/// so a single `.with_state(shared)` covers both.
#[derive(Clone)]
pub struct SharedState {
    pub config: Config,
    pub app: AppState,
}

impl FromRef<SharedState> for Config {
    fn from_ref(shared: &SharedState) -> Config {
        shared.config.clone()
    }
}

impl FromRef<SharedState> for AppState {
    fn from_ref(shared: &SharedState) -> AppState {
        shared.app.clone()
    }
}
