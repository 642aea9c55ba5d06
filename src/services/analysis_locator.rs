use std::sync::Arc;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Url;
use crate::config::constants::PROJECT_SEARCH_PATH;
use crate::errors::{GateError, GateResult};
use crate::services::http_service::HubClient;
use crate::services::xml_serialization_service::XmlSerializationService;
use crate::structs::hub::projects::Projects;

static ANALYSIS_URL_IN_LOG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)codesonar:\s+(https?://\S+?/analysis/\d+)(?:\.html|\.xml)?")
        .expect("analysis url pattern is valid")
});

/// Works out which hub analysis belongs to the current build.
pub struct AnalysisLocator {
    hub: Arc<HubClient>,
}

impl AnalysisLocator {
    pub fn new(hub: Arc<HubClient>) -> Self {
        Self { hub }
    }

    /// The analysis URL announced in the build log, if any. First match wins.
    pub fn locate_from_log<I, S>(log_lines: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        log_lines.into_iter().find_map(|line| {
            ANALYSIS_URL_IN_LOG
                .captures(line.as_ref())
                .and_then(|caps| caps.get(1))
                .map(|m| format!("{}.xml", m.as_str()))
        })
    }

    /// Asks the hub for the most recent analysis of `project_name`.
    pub async fn locate_latest_for_project(&self, base_url: &Url, project_name: &str) -> GateResult<String> {
        let mut search_url = base_url
            .join(PROJECT_SEARCH_PATH)
            .map_err(|e| GateError::config_error("hub.address", &e.to_string()))?;
        search_url
            .query_pairs_mut()
            .append_pair("query", &format!("\"{}\"", project_name))
            .append_pair("scope", "all");

        let content = self.hub.fetch_text(search_url.as_str()).await?;
        let projects: Projects = XmlSerializationService::deserialize(&content, "Project search result")
            .map_err(|e| GateError::analysis_not_found(project_name, &e.to_string()))?;

        let project = projects
            .project_by_name(project_name)
            .ok_or_else(|| GateError::analysis_not_found(project_name, "project is not known to the hub"))?;

        if project.url.trim().is_empty() {
            return Err(GateError::analysis_not_found(project_name, "project has no analyses"));
        }

        let analysis_url = base_url
            .join(&xml_resource(project.url.trim()))
            .map_err(|e| GateError::analysis_not_found(project_name, &e.to_string()))?;

        Ok(analysis_url.to_string())
    }

    /// Log-embedded URL first, so a build can pin an older analysis;
    /// otherwise the latest analysis of the project.
    pub async fn locate(&self, log_lines: &[String], base_url: &Url, project_name: &str) -> GateResult<String> {
        if let Some(url) = Self::locate_from_log(log_lines) {
            log::info!("📄 Analysis URL found in build log: {}", url);
            return Ok(url);
        }

        log::info!("🔎 No analysis URL in build log, looking up latest analysis of '{}'", project_name);
        let url = self.locate_latest_for_project(base_url, project_name).await?;
        log::info!("📄 Latest analysis for '{}': {}", project_name, url);
        Ok(url)
    }
}

fn xml_resource(path: &str) -> String {
    if path.ends_with(".xml") {
        path.to_string()
    } else if let Some(stem) = path.strip_suffix(".html") {
        format!("{}.xml", stem)
    } else {
        format!("{}.xml", path)
    }
}
