use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ─── Simulation parameters ───────────────────────────────────────────────────

fn default_annual_usage_kwh() -> f64 { 12000.0 }
fn default_panel_count() -> u32 { 12 }
fn default_panel_watt() -> f64 { 395.0 }
fn default_batt_capacity_kwh() -> f64 { 14.33 }
fn default_batt_rt_eff() -> f64 { 0.92 }
fn default_dod() -> f64 { 0.8 }
fn default_transfer_cost() -> f64 { 0.307 }
fn default_energy_tax() -> f64 { 0.5488 }
fn default_vat_rate() -> f64 { 0.25 }
fn default_latitude() -> f64 { 55.6 }
fn default_longitude() -> f64 { 13.0 }
fn default_tilt_deg() -> f64 { 45.0 }
fn default_azimuth_deg() -> f64 { 180.0 }
fn default_losses_pct() -> f64 { 14.0 }

/// User-adjustable simulation inputs. Fractional fields are in [0,1],
/// azimuth in [0,360), tilt in [0,90], losses in [0,100]; the dashboard
/// controls enforce the ranges, the backend does not re-validate.
///
/// Built fresh per request from query parameters; any omitted field takes
/// its default, so an empty query yields the stock configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SimulationParameters {
    /// Annual household consumption (kWh)
    #[serde(default = "default_annual_usage_kwh")]
    pub annual_usage_kwh: f64,
    /// Number of PV panels
    #[serde(default = "default_panel_count")]
    pub panel_count: u32,
    /// Nameplate wattage per panel (W)
    #[serde(default = "default_panel_watt")]
    pub panel_watt: f64,
    /// Battery capacity (kWh)
    #[serde(default = "default_batt_capacity_kwh")]
    pub batt_capacity_kwh: f64,
    /// Battery round-trip efficiency (0–1)
    #[serde(default = "default_batt_rt_eff")]
    pub batt_rt_eff: f64,
    /// Depth of discharge (0–1)
    #[serde(default = "default_dod")]
    pub dod: f64,
    /// Grid transfer cost (per kWh)
    #[serde(default = "default_transfer_cost")]
    pub transfer_cost: f64,
    /// Energy tax (per kWh)
    #[serde(default = "default_energy_tax")]
    pub energy_tax: f64,
    /// VAT rate (0–1)
    #[serde(default = "default_vat_rate")]
    pub vat_rate: f64,
    /// Site latitude (decimal degrees)
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    /// Site longitude (decimal degrees)
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// Panel tilt from horizontal (degrees, 0–90)
    #[serde(default = "default_tilt_deg")]
    pub tilt_deg: f64,
    /// Panel compass azimuth (degrees, 0–360)
    #[serde(default = "default_azimuth_deg")]
    pub azimuth_deg: f64,
    /// System losses (%)
    #[serde(default = "default_losses_pct")]
    pub losses_pct: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            annual_usage_kwh: default_annual_usage_kwh(),
            panel_count: default_panel_count(),
            panel_watt: default_panel_watt(),
            batt_capacity_kwh: default_batt_capacity_kwh(),
            batt_rt_eff: default_batt_rt_eff(),
            dod: default_dod(),
            transfer_cost: default_transfer_cost(),
            energy_tax: default_energy_tax(),
            vat_rate: default_vat_rate(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            tilt_deg: default_tilt_deg(),
            azimuth_deg: default_azimuth_deg(),
            losses_pct: default_losses_pct(),
        }
    }
}

impl SimulationParameters {
    /// Array peak power (kWp) = panel count × unit wattage / 1000.
    /// Derived on demand, never stored.
    pub fn peak_power_kwp(&self) -> f64 {
        self.panel_count as f64 * self.panel_watt / 1000.0
    }
}

// ─── Monthly model ───────────────────────────────────────────────────────────

/// One row of the monthly summary table.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MonthlyRecord {
    /// Calendar month, 1–12
    pub month: u32,
    /// Estimated consumption (kWh)
    pub consumption_kwh: f64,
    /// Estimated PV generation (kWh)
    pub generation_kwh: f64,
}

// ─── PVGIS wire types ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PvgisResponse {
    pub outputs: PvgisOutputs,
}

#[derive(Debug, Deserialize)]
pub struct PvgisOutputs {
    pub monthly: PvgisMonthlySection,
}

#[derive(Debug, Deserialize)]
pub struct PvgisMonthlySection {
    pub fixed: Vec<PvgisMonthlyFixed>,
}

/// One month of the `outputs.monthly.fixed` array. PVGIS reports more
/// figures per month (E_d, H(i)_m, SD_m, …); only the monthly energy E_m
/// is consumed here.
#[derive(Debug, Deserialize)]
pub struct PvgisMonthlyFixed {
    pub month: u32,
    #[serde(rename = "E_m")]
    pub e_m: f64,
}

// ─── REST API response types ─────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct MonthlySummaryResponse {
    pub timestamp: DateTime<Utc>,
    /// Effective parameter set the summary was computed from
    pub parameters: SimulationParameters,
    /// Derived array peak power (kWp)
    pub peak_power_kwp: f64,
    /// Twelve rows, months 1–12 ascending
    pub records: Vec<MonthlyRecord>,
    pub annual_consumption_kwh: f64,
    pub annual_generation_kwh: f64,
    /// Placeholder while the dispatch/savings simulation is not integrated
    pub note: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    /// Distinct site/array tuples held by the generation memo cache
    pub cached_sites: usize,
}
