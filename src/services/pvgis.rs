/// PVGIS generation-estimate adapter.
///
/// One synchronous round trip to the PVGIS `PVcalc` endpoint per distinct
/// site/array tuple; results are memoized for the lifetime of the process
/// so repeated renders with identical inputs skip the network. Failures
/// propagate — there is no retry and no fallback series.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::Client;

use crate::config::PvgisConfig;
use crate::errors::PvgisError;
use crate::models::simulation::{PvgisResponse, SimulationParameters};

/// Site and array tuple the estimate depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteSpec {
    pub latitude: f64,
    pub longitude: f64,
    pub peak_power_kwp: f64,
    pub tilt_deg: f64,
    pub azimuth_deg: f64,
    pub losses_pct: f64,
}

impl From<&SimulationParameters> for SiteSpec {
    fn from(p: &SimulationParameters) -> Self {
        Self {
            latitude: p.latitude,
            longitude: p.longitude,
            peak_power_kwp: p.peak_power_kwp(),
            tilt_deg: p.tilt_deg,
            azimuth_deg: p.azimuth_deg,
            losses_pct: p.losses_pct,
        }
    }
}

/// Memo-cache key: the exact bit patterns of the full input tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SiteKey([u64; 6]);

impl From<&SiteSpec> for SiteKey {
    fn from(s: &SiteSpec) -> Self {
        SiteKey([
            s.latitude.to_bits(),
            s.longitude.to_bits(),
            s.peak_power_kwp.to_bits(),
            s.tilt_deg.to_bits(),
            s.azimuth_deg.to_bits(),
            s.losses_pct.to_bits(),
        ])
    }
}

/// Anything that can produce a monthly generation series for a site.
/// The production implementation is [`PvgisClient`]; tests substitute a
/// counting fake to pin down cache behavior.
pub trait GenerationSource {
    /// Estimated generation (kWh) for months 1–12, index 0 = January.
    fn monthly_generation(
        &self,
        site: &SiteSpec,
    ) -> impl Future<Output = Result<[f64; 12], PvgisError>> + Send;
}

/// HTTP client for the PVGIS `PVcalc` endpoint.
#[derive(Clone)]
pub struct PvgisClient {
    client: Client,
    base_url: String,
}

impl PvgisClient {
    pub fn new(cfg: &PvgisConfig) -> Result<Self, PvgisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_s))
            .build()?;

        Ok(Self { client, base_url: cfg.base_url.clone() })
    }
}

impl GenerationSource for PvgisClient {
    async fn monthly_generation(&self, site: &SiteSpec) -> Result<[f64; 12], PvgisError> {
        let req = self.client.get(&self.base_url)
            .query(&[
                ("lat", site.latitude.to_string()),
                ("lon", site.longitude.to_string()),
                ("peakpower", site.peak_power_kwp.to_string()),
                ("mountingplace", "free".to_string()),
                ("angle", site.tilt_deg.to_string()),
                ("aspect", site.azimuth_deg.to_string()),
                ("loss", site.losses_pct.to_string()),
                ("outputformat", "json".to_string()),
                ("browser", "0".to_string()),
            ])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(PvgisError::Status(format!("{:?}", status)));
        }

        let json = req.text().await?;
        let response: PvgisResponse = serde_json::from_str(&json)?;

        series_from_response(response)
    }
}

/// Extract the twelve E_m figures, indexed by month. Anything short of full
/// 1–12 coverage is a malformed document.
fn series_from_response(response: PvgisResponse) -> Result<[f64; 12], PvgisError> {
    let mut series = [None; 12];
    for entry in response.outputs.monthly.fixed {
        if !(1..=12).contains(&entry.month) {
            return Err(PvgisError::Document(format!("month {} out of range", entry.month)));
        }
        let slot = &mut series[entry.month as usize - 1];
        if slot.is_some() {
            return Err(PvgisError::Document(format!("duplicate month {}", entry.month)));
        }
        *slot = Some(entry.e_m);
    }

    let mut out = [0.0f64; 12];
    for (i, slot) in series.iter().enumerate() {
        match slot {
            Some(v) => out[i] = *v,
            None => return Err(PvgisError::Document(format!("missing month {}", i + 1))),
        }
    }
    Ok(out)
}

/// Memoizing wrapper around a [`GenerationSource`].
///
/// The cache maps the full input tuple to its twelve-value series and lives
/// as long as the process; there is no TTL and no invalidation. Shared via
/// `Arc` so clones see the same entries.
#[derive(Clone)]
pub struct GenerationEstimator<S> {
    source: S,
    cache: Arc<RwLock<HashMap<SiteKey, [f64; 12]>>>,
}

impl<S: GenerationSource> GenerationEstimator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Monthly generation for the site, from cache when an identical tuple
    /// was already fetched.
    pub async fn monthly_generation(&self, site: &SiteSpec) -> Result<[f64; 12], PvgisError> {
        let key = SiteKey::from(site);

        if let Ok(map) = self.cache.read()
            && let Some(series) = map.get(&key)
        {
            return Ok(*series);
        }

        let series = self.source.monthly_generation(site).await?;

        if let Ok(mut map) = self.cache.write() {
            map.insert(key, series);
        }

        Ok(series)
    }

    /// Number of distinct site tuples currently memoized.
    pub fn cached_sites(&self) -> usize {
        self.cache.read().map(|m| m.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counting stand-in for the PVGIS endpoint.
    struct FakeSource {
        calls: Arc<AtomicUsize>,
        result: Result<[f64; 12], ()>,
    }

    impl FakeSource {
        fn ok(series: [f64; 12]) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (Self { calls: calls.clone(), result: Ok(series) }, calls)
        }

        fn failing() -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (Self { calls: calls.clone(), result: Err(()) }, calls)
        }
    }

    impl GenerationSource for FakeSource {
        async fn monthly_generation(&self, _site: &SiteSpec) -> Result<[f64; 12], PvgisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
                .map_err(|_| PvgisError::Status("502 Bad Gateway".to_string()))
        }
    }

    fn site() -> SiteSpec {
        SiteSpec::from(&SimulationParameters::default())
    }

    #[tokio::test]
    async fn test_identical_tuple_fetched_once() {
        let (source, calls) = FakeSource::ok([120.0; 12]);
        let estimator = GenerationEstimator::new(source);

        let first = estimator.monthly_generation(&site()).await.unwrap();
        let second = estimator.monthly_generation(&site()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(estimator.cached_sites(), 1);
    }

    #[tokio::test]
    async fn test_different_tuple_misses_cache() {
        let (source, calls) = FakeSource::ok([120.0; 12]);
        let estimator = GenerationEstimator::new(source);

        let mut other = site();
        other.tilt_deg = 30.0;

        estimator.monthly_generation(&site()).await.unwrap();
        estimator.monthly_generation(&other).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(estimator.cached_sites(), 2);
    }

    #[tokio::test]
    async fn test_failure_propagates_and_is_not_cached() {
        let (source, calls) = FakeSource::failing();
        let estimator = GenerationEstimator::new(source);

        assert!(estimator.monthly_generation(&site()).await.is_err());
        assert!(estimator.monthly_generation(&site()).await.is_err());

        // Failures are never memoized.
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(estimator.cached_sites(), 0);
    }

    fn response_json(months: &[(u32, f64)]) -> String {
        let fixed: Vec<String> = months
            .iter()
            .map(|(m, e)| format!(r#"{{"month":{},"E_d":0.0,"E_m":{},"SD_m":10.0}}"#, m, e))
            .collect();
        format!(
            r#"{{"outputs":{{"monthly":{{"fixed":[{}]}}}}}}"#,
            fixed.join(",")
        )
    }

    #[test]
    fn test_series_extraction_keyed_by_month() {
        // Entries arrive out of order; the series is still month-indexed.
        let mut months: Vec<(u32, f64)> = (1..=12).map(|m| (m, m as f64 * 10.0)).collect();
        months.reverse();

        let response: PvgisResponse = serde_json::from_str(&response_json(&months)).unwrap();
        let series = series_from_response(response).unwrap();

        for (i, v) in series.iter().enumerate() {
            assert_eq!(*v, (i as f64 + 1.0) * 10.0);
        }
    }

    #[test]
    fn test_series_extraction_rejects_missing_month() {
        let months: Vec<(u32, f64)> = (1..=11).map(|m| (m, 100.0)).collect();
        let response: PvgisResponse = serde_json::from_str(&response_json(&months)).unwrap();

        assert!(matches!(
            series_from_response(response),
            Err(PvgisError::Document(_))
        ));
    }

    #[test]
    fn test_series_extraction_rejects_duplicate_month() {
        let mut months: Vec<(u32, f64)> = (1..=12).map(|m| (m, 100.0)).collect();
        months[11] = (3, 100.0);
        let response: PvgisResponse = serde_json::from_str(&response_json(&months)).unwrap();

        assert!(matches!(
            series_from_response(response),
            Err(PvgisError::Document(_))
        ));
    }
}
