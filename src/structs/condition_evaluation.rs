use crate::enums::build_result::BuildResult;

/// What a single condition concluded about the current build.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionEvaluation {
    pub result: BuildResult,
    pub description: String,
}

impl ConditionEvaluation {
    pub fn new(result: BuildResult, description: String) -> Self {
        Self { result, description }
    }

    pub fn success(description: &str) -> Self {
        Self::new(BuildResult::Success, description.to_string())
    }
}
