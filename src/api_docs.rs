use utoipa::OpenApi;

use crate::controllers::simulation_controller;
use crate::models::simulation;

#[derive(OpenApi)]
#[openapi(
    paths(
        simulation_controller::get_defaults,
        simulation_controller::get_monthly_summary,
        simulation_controller::get_health
    ),
    components(
        schemas(
            simulation::SimulationParameters,
            simulation::MonthlyRecord,
            simulation::MonthlySummaryResponse,
            simulation::HealthStatus
        )
    ),
    tags(
        (name = "pv-ess-roi-sim", description = "PV + ESS ROI Simulator API")
    )
)]
pub struct ApiDoc;
