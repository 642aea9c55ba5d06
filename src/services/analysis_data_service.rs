use std::sync::Arc;
use reqwest::Url;
use crate::config::constants::FILTER_QUERY_PARAMETER;
use crate::enums::visibility_filter::VisibilityFilter;
use crate::errors::{GateError, GateResult};
use crate::services::http_service::HubClient;
use crate::services::xml_serialization_service::XmlSerializationService;
use crate::structs::analysis::analysis_data::AnalysisData;
use crate::structs::analysis::analysis_snapshot::AnalysisSnapshot;
use crate::structs::analysis::metrics_snapshot::MetricsSnapshot;
use crate::structs::analysis::procedures_snapshot::ProceduresSnapshot;
use crate::structs::hub::analysis_response::AnalysisResponse;
use crate::structs::hub::metrics_response::MetricsResponse;
use crate::structs::hub::procedures_response::ProceduresResponse;

/// Fetches warnings, metrics and procedures of one analysis. Each fetch is an
/// independent read and is never retried here.
pub struct AnalysisDataService {
    hub: Arc<HubClient>,
    base_url: Url,
    active_filter: String,
    new_filter: String,
}

impl AnalysisDataService {
    pub fn new(hub: Arc<HubClient>, base_url: Url, active_filter: &str, new_filter: &str) -> Self {
        Self {
            hub,
            base_url,
            active_filter: active_filter.to_string(),
            new_filter: new_filter.to_string(),
        }
    }

    fn filter_value(&self, filter: VisibilityFilter) -> &str {
        match filter {
            VisibilityFilter::Active => &self.active_filter,
            VisibilityFilter::New => &self.new_filter,
        }
    }

    pub fn analysis_url_with_filter(&self, analysis_url: &str, filter: VisibilityFilter) -> GateResult<Url> {
        let mut url = Url::parse(analysis_url)
            .map_err(|e| GateError::data_unavailable("Analysis URL", &format!("'{}' is not a valid URL: {}", analysis_url, e)))?;
        url.query_pairs_mut().append_pair(FILTER_QUERY_PARAMETER, self.filter_value(filter));
        Ok(url)
    }

    pub fn metrics_url(&self, analysis_id: &str) -> GateResult<Url> {
        self.resource_url(&format!("/metrics/{}.xml", analysis_id))
    }

    pub fn procedures_url(&self, analysis_id: &str) -> GateResult<Url> {
        self.resource_url(&format!("/analysis/{}-procedures.xml", analysis_id))
    }

    fn resource_url(&self, path: &str) -> GateResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| GateError::config_error("hub.address", &e.to_string()))
    }

    pub async fn fetch_analysis(&self, analysis_url: &str, filter: VisibilityFilter) -> GateResult<AnalysisSnapshot> {
        let url = self.analysis_url_with_filter(analysis_url, filter)?;
        let content = self.hub.fetch_text(url.as_str()).await?;
        let what = format!("Analysis ({} warnings)", filter);
        let response: AnalysisResponse = XmlSerializationService::deserialize(&content, &what)?;
        let analysis = response.into_snapshot();

        if analysis.analysis_id.trim().is_empty() {
            return Err(GateError::data_unavailable(&what, "response carries no analysis_id"));
        }

        log::debug!("Analysis {} ({}): {} warnings", analysis.analysis_id, filter, analysis.warning_count());
        Ok(analysis)
    }

    pub async fn fetch_metrics(&self, analysis_id: &str) -> GateResult<MetricsSnapshot> {
        let url = self.metrics_url(analysis_id)?;
        let content = self.hub.fetch_text(url.as_str()).await?;
        let response: MetricsResponse = XmlSerializationService::deserialize(&content, "Metrics")?;
        Ok(response.into_snapshot(analysis_id))
    }

    pub async fn fetch_procedures(&self, analysis_id: &str) -> GateResult<ProceduresSnapshot> {
        let url = self.procedures_url(analysis_id)?;
        let content = self.hub.fetch_text(url.as_str()).await?;
        let response: ProceduresResponse = XmlSerializationService::deserialize(&content, "Procedures")?;
        Ok(response.into_snapshot(analysis_id))
    }

    /// Active warnings first (they carry the analysis id), then the other
    /// three reads concurrently. The first failure aborts the whole fetch.
    pub async fn fetch_all(&self, analysis_url: &str) -> GateResult<AnalysisData> {
        let active = self.fetch_analysis(analysis_url, VisibilityFilter::Active).await?;
        let analysis_id = active.analysis_id.clone();

        let (new, metrics, procedures) = futures::try_join!(
            self.fetch_analysis(analysis_url, VisibilityFilter::New),
            self.fetch_metrics(&analysis_id),
            self.fetch_procedures(&analysis_id),
        )?;

        Ok(AnalysisData {
            analysis_active_warnings: active,
            analysis_new_warnings: new,
            metrics,
            procedures,
        })
    }
}
