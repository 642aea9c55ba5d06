use std::sync::Arc;
use crate::enums::condition::Condition;
use crate::enums::pipeline_stage::PipelineStage;
use crate::errors::GateResult;
use crate::services::analysis_data_service::AnalysisDataService;
use crate::services::analysis_locator::AnalysisLocator;
use crate::services::condition_evaluator::ConditionEvaluator;
use crate::services::http_service::HubClient;
use crate::structs::build_outcome::BuildOutcome;
use crate::structs::hub_settings::HubSettings;

/// One build evaluation: resolve the analysis, fetch its data, run the
/// conditions and aggregate. Resolve and fetch failures abort; condition
/// failures only turn into verdicts.
pub struct EvaluationPipeline {
    settings: HubSettings,
    conditions: Vec<Condition>,
    hub: Arc<HubClient>,
}

impl EvaluationPipeline {
    pub fn new(settings: HubSettings, conditions: Vec<Condition>, hub: Arc<HubClient>) -> Self {
        Self {
            settings,
            conditions,
            hub,
        }
    }

    /// Uses a fresh reqwest-backed client, so the hub session belongs to this
    /// evaluation alone.
    pub fn from_settings(settings: HubSettings, conditions: Vec<Condition>) -> GateResult<Self> {
        let hub = Arc::new(HubClient::with_timeout(settings.request_timeout)?);
        Ok(Self::new(settings, conditions, hub))
    }

    pub async fn run(&self, log_lines: &[String], previous: Option<&BuildOutcome>) -> GateResult<BuildOutcome> {
        let mut stage = PipelineStage::Init;
        let result = self.run_stages(log_lines, previous, &mut stage).await;

        if let Err(e) = &result {
            log::error!("❌ Evaluation aborted during {}: {}", stage, e);
        }

        result
    }

    async fn run_stages(&self, log_lines: &[String], previous: Option<&BuildOutcome>, stage: &mut PipelineStage) -> GateResult<BuildOutcome> {
        Self::enter(stage, PipelineStage::Init);
        if let Some(credentials) = &self.settings.credentials {
            self.hub
                .authenticate(&self.settings.base_url, &credentials.username, &credentials.password)
                .await?;
        }

        Self::enter(stage, PipelineStage::Resolve);
        let locator = AnalysisLocator::new(Arc::clone(&self.hub));
        let analysis_url = locator
            .locate(log_lines, &self.settings.base_url, &self.settings.project_name)
            .await?;

        Self::enter(stage, PipelineStage::Fetch);
        let data_service = AnalysisDataService::new(
            Arc::clone(&self.hub),
            self.settings.base_url.clone(),
            &self.settings.active_filter,
            &self.settings.new_filter,
        );
        let data = data_service.fetch_all(&analysis_url).await?;
        log::info!(
            "📊 Analysis {}: {} active warnings, {} new warnings, {} procedures",
            data.analysis_id(),
            data.analysis_active_warnings.warning_count(),
            data.analysis_new_warnings.warning_count(),
            data.procedures.procedures.len()
        );

        Self::enter(stage, PipelineStage::EvaluateConditions);
        let mut outcome = BuildOutcome::new(self.settings.base_url.as_str(), &analysis_url, data);
        ConditionEvaluator::new(&self.conditions).apply(&mut outcome, previous);

        Self::enter(stage, PipelineStage::Aggregate);
        outcome.result = ConditionEvaluator::aggregate(&outcome.verdicts);

        Self::enter(stage, PipelineStage::Done);
        Ok(outcome)
    }

    fn enter(stage: &mut PipelineStage, next: PipelineStage) {
        *stage = next;
        log::debug!("{} Stage: {}", next.emoji(), next);
    }
}
