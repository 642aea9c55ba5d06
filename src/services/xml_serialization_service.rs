use serde::de::DeserializeOwned;
use crate::errors::{GateError, GateResult};

pub struct XmlSerializationService;

impl XmlSerializationService {
    /// Decodes a hub XML payload; `what` names the payload in error messages.
    pub fn deserialize<T: DeserializeOwned>(content: &str, what: &str) -> GateResult<T> {
        if content.trim().is_empty() {
            return Err(GateError::data_unavailable(what, "the hub returned an empty response"));
        }

        quick_xml::de::from_str(content).map_err(|e| GateError::data_unavailable(what, &e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::hub::projects::Projects;

    #[test]
    fn empty_payload_is_data_unavailable() {
        let result: GateResult<Projects> = XmlSerializationService::deserialize("  \n", "Project search result");
        assert!(matches!(result, Err(GateError::DataUnavailable { .. })));
    }

    #[test]
    fn decodes_project_list() {
        let xml = r#"<projects>
            <project><name>firmware</name><url>/analysis/41.xml</url></project>
            <project><name>web</name><url>/analysis/7.xml</url></project>
        </projects>"#;
        let projects: Projects = XmlSerializationService::deserialize(xml, "Project search result").unwrap();
        assert_eq!(projects.project_by_name("web").unwrap().url, "/analysis/7.xml");
    }
}
