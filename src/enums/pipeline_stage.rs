use std::fmt;

/// Init → Resolve → Fetch → EvaluateConditions → Aggregate → Done.
/// Only Init, Resolve and Fetch can abort the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Init,
    Resolve,
    Fetch,
    EvaluateConditions,
    Aggregate,
    Done,
}

impl PipelineStage {
    pub fn emoji(&self) -> &'static str {
        match self {
            PipelineStage::Init => "🚀",
            PipelineStage::Resolve => "🔍",
            PipelineStage::Fetch => "📥",
            PipelineStage::EvaluateConditions => "⚖️",
            PipelineStage::Aggregate => "🧮",
            PipelineStage::Done => "🏁",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Init => "init",
            PipelineStage::Resolve => "resolve",
            PipelineStage::Fetch => "fetch",
            PipelineStage::EvaluateConditions => "evaluate conditions",
            PipelineStage::Aggregate => "aggregate",
            PipelineStage::Done => "done",
        };
        write!(f, "{}", name)
    }
}
