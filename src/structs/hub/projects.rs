use serde::Deserialize;

/// `project_search.xml` response.
#[derive(Debug, Deserialize, Default)]
pub struct Projects {
    #[serde(rename = "project", default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Project {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub url: String,
}

impl Projects {
    pub fn project_by_name(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }
}
