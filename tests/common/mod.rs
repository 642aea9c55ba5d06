use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use async_trait::async_trait;
use codesonar_gate::errors::{GateError, GateResult};
use codesonar_gate::services::http_service::HubClient;
use codesonar_gate::structs::hub_settings::{Credentials, HubSettings};
use codesonar_gate::traits::http_transport::HttpTransport;
use reqwest::Url;

pub const BASE: &str = "http://hub.local:7340";

/// In-memory hub keyed by full request URL.
pub struct FakeHub {
    responses: HashMap<String, Result<String, u16>>,
    sign_in_status: u16,
    require_auth: bool,
    authenticated: Mutex<bool>,
    requests: Mutex<Vec<String>>,
}

impl FakeHub {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            sign_in_status: 200,
            require_auth: false,
            authenticated: Mutex::new(false),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(mut self, path: &str, body: &str) -> Self {
        self.responses.insert(format!("{}{}", BASE, path), Ok(body.to_string()));
        self
    }

    pub fn fail(mut self, path: &str, status: u16) -> Self {
        self.responses.insert(format!("{}{}", BASE, path), Err(status));
        self
    }

    pub fn requiring_sign_in(mut self, sign_in_status: u16) -> Self {
        self.require_auth = true;
        self.sign_in_status = sign_in_status;
        self
    }

    /// Serves one analysis with the given warning scores (active) and the
    /// number of new warnings, plus metrics and procedures.
    pub fn with_analysis(self, id: u32, active_scores: &[u32], new_count: usize, complexities: &[u32]) -> Self {
        self.with_analysis_and_alerts(id, active_scores, new_count, complexities, 0)
    }

    pub fn with_analysis_and_alerts(
        self,
        id: u32,
        active_scores: &[u32],
        new_count: usize,
        complexities: &[u32],
        red_alerts: usize,
    ) -> Self {
        let analysis_path = format!("/analysis/{}.xml", id);
        let new_scores: Vec<u32> = active_scores.iter().copied().take(new_count).collect();
        self.respond(&format!("{}?filter=active", analysis_path), &analysis_xml(id, active_scores, red_alerts))
            .respond(&format!("{}?filter=new", analysis_path), &analysis_xml(id, &new_scores, red_alerts))
            .respond(&format!("/metrics/{}.xml", id), "<metrics><metric name=\"LCode\">1200</metric></metrics>")
            .respond(&format!("/analysis/{}-procedures.xml", id), &procedures_xml(complexities))
    }

    pub fn with_project(self, project: &str, analysis_path: &str) -> Self {
        self.respond(
            &format!("/project_search.xml?query=%22{}%22&scope=all", project),
            &format!("<projects><project><name>{}</name><url>{}</url></project></projects>", project, analysis_path),
        )
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for FakeHub {
    async fn get_text(&self, url: &str) -> GateResult<String> {
        self.requests.lock().unwrap().push(format!("GET {}", url));

        if self.require_auth && !*self.authenticated.lock().unwrap() {
            return Err(GateError::auth_error("session is not signed in"));
        }

        match self.responses.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(GateError::network_error("GET", Some(url), Some(*status), "hub error")),
            None => Err(GateError::network_error("GET", Some(url), Some(404), "Not Found")),
        }
    }

    async fn post_form(&self, url: &str, _form: Vec<(String, String)>) -> GateResult<u16> {
        self.requests.lock().unwrap().push(format!("POST {}", url));
        if (200..300).contains(&self.sign_in_status) {
            *self.authenticated.lock().unwrap() = true;
        }
        Ok(self.sign_in_status)
    }
}

pub fn analysis_xml(id: u32, scores: &[u32], red_alerts: usize) -> String {
    let mut xml = format!("<analysis><analysis_id>{}</analysis_id><name>build {}</name>", id, id);
    for _ in 0..red_alerts {
        xml.push_str("<alert><color>red</color><message>license</message></alert>");
    }
    for (i, score) in scores.iter().enumerate() {
        xml.push_str(&format!("<warning><id>{}</id><score>{}</score><class>Buffer Overrun</class></warning>", i, score));
    }
    xml.push_str("</analysis>");
    xml
}

pub fn procedures_xml(complexities: &[u32]) -> String {
    let mut xml = String::from("<procedures>");
    for (i, c) in complexities.iter().enumerate() {
        xml.push_str(&format!(
            "<procedure_row><procedure>proc_{}</procedure><metric name=\"Cyclomatic Complexity\">{}</metric></procedure_row>",
            i, c
        ));
    }
    xml.push_str("</procedures>");
    xml
}

pub fn settings(credentials: Option<Credentials>) -> HubSettings {
    HubSettings {
        base_url: Url::parse(BASE).unwrap(),
        project_name: "firmware".to_string(),
        credentials,
        request_timeout: Duration::from_secs(5),
        active_filter: "active".to_string(),
        new_filter: "new".to_string(),
    }
}

pub fn hub(fake: &Arc<FakeHub>) -> Arc<HubClient> {
    Arc::new(HubClient::new(Arc::clone(fake) as Arc<dyn HttpTransport>))
}
