use serde::{Deserialize, Serialize};
use crate::enums::alert_color::AlertColor;
use crate::structs::analysis::alert::Alert;
use crate::structs::analysis::warning::Warning;

/// One analysis as returned by the hub under a single visibility filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    pub analysis_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub alerts: Vec<Alert>,

    #[serde(default)]
    pub warnings: Vec<Warning>,
}

impl AnalysisSnapshot {
    pub fn new(analysis_id: &str, warnings: Vec<Warning>) -> Self {
        Self {
            analysis_id: analysis_id.to_string(),
            name: String::new(),
            alerts: Vec::new(),
            warnings,
        }
    }

    pub fn with_alerts(mut self, alerts: Vec<Alert>) -> Self {
        self.alerts = alerts;
        self
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn number_of_alerts(&self, color: AlertColor) -> usize {
        self.alerts.iter().filter(|alert| alert.level() == color).count()
    }

    pub fn count_warnings_with_score_above(&self, score: i64) -> usize {
        self.warnings.iter().filter(|w| i64::from(w.score) > score).count()
    }

    pub fn count_warnings_with_score_at_least(&self, score: i64) -> usize {
        self.warnings.iter().filter(|w| i64::from(w.score) >= score).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_alerts_by_color() {
        let snapshot = AnalysisSnapshot::new("7", Vec::new()).with_alerts(vec![
            Alert::new(AlertColor::Red, "license expires"),
            Alert::new(AlertColor::Yellow, "disk space"),
            Alert::new(AlertColor::Red, "parse failure"),
        ]);
        assert_eq!(snapshot.number_of_alerts(AlertColor::Red), 2);
        assert_eq!(snapshot.number_of_alerts(AlertColor::Yellow), 1);
        assert_eq!(snapshot.number_of_alerts(AlertColor::Blue), 0);
    }

    #[test]
    fn score_counts_distinguish_strict_and_inclusive() {
        let snapshot = AnalysisSnapshot::new("7", vec![
            Warning::new("1", 30),
            Warning::new("2", 31),
            Warning::new("3", 10),
        ]);
        assert_eq!(snapshot.count_warnings_with_score_above(30), 1);
        assert_eq!(snapshot.count_warnings_with_score_at_least(30), 2);
    }
}
