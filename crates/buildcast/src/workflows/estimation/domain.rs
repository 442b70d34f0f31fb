use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Residential,
    Commercial,
    Road,
    Bridge,
    #[serde(other)]
    Other,
}

impl ProjectType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Residential,
            Self::Commercial,
            Self::Road,
            Self::Bridge,
            Self::Other,
        ]
    }

    /// Maps free-form input onto a project type; anything unknown becomes `Other`.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "residential" => Self::Residential,
            "commercial" => Self::Commercial,
            "road" => Self::Road,
            "bridge" => Self::Bridge,
            _ => Self::Other,
        }
    }

    /// Cost per square unit of built area.
    pub const fn unit_cost(self) -> f64 {
        match self {
            Self::Residential => 1500.0,
            Self::Commercial => 2200.0,
            Self::Road => 900.0,
            Self::Bridge => 3000.0,
            Self::Other => 1500.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Road => "Road",
            Self::Bridge => "Bridge",
            Self::Other => "Other",
        }
    }
}

/// Already-validated parameters for a single estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub area: f64,
    pub total_workers: u32,
    pub budget: f64,
    pub project_type: ProjectType,
    pub start_date: NaiveDate,
}

/// Head counts per role. `labor_workers` absorbs the remainder and goes
/// negative when the role minimums exceed the team size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkforceDistribution {
    pub engineers: u32,
    pub planners: u32,
    pub inspectors: u32,
    pub skilled_workers: u32,
    pub labor_workers: i64,
}

impl WorkforceDistribution {
    pub fn total(&self) -> i64 {
        i64::from(self.engineers)
            + i64::from(self.planners)
            + i64::from(self.inspectors)
            + i64::from(self.skilled_workers)
            + self.labor_workers
    }

    pub fn is_overcommitted(&self) -> bool {
        self.labor_workers < 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub material: f64,
    pub labor: f64,
    pub equipment: f64,
    pub misc: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.material + self.labor + self.equipment + self.misc
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBreakdown {
    pub planning: f64,
    pub engineering: f64,
    pub execution: f64,
    pub inspection: f64,
}

impl TimeBreakdown {
    pub fn total(&self) -> f64 {
        self.planning + self.engineering + self.execution + self.inspection
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    IncreaseWorkforce,
    OptimizeLaborCost,
    Balanced,
}

impl Recommendation {
    pub const fn message(self) -> &'static str {
        match self {
            Self::IncreaseWorkforce => "Increase workforce to avoid major delays.",
            Self::OptimizeLaborCost => "Workforce is high. You may optimize labor cost.",
            Self::Balanced => "Workforce allocation looks balanced.",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Which path produced the cost and delay figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorKind {
    #[default]
    Formula,
    Model,
}

impl EstimatorKind {
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "formula" => Some(Self::Formula),
            "model" => Some(Self::Model),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Formula => "Formula",
            Self::Model => "Statistical model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub estimator: EstimatorKind,
    pub workforce: WorkforceDistribution,
    pub base_cost: f64,
    pub efficiency_score: f64,
    pub predicted_cost: f64,
    pub predicted_delay_days: f64,
    pub risk_score: u8,
    pub completion_date: NaiveDate,
    pub cost_breakdown: CostBreakdown,
    pub time_breakdown: TimeBreakdown,
    pub recommendation: Recommendation,
    pub required_workers_estimate: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_labels_fall_back_to_other() {
        assert_eq!(ProjectType::from_label("unknown_type"), ProjectType::Other);
        assert_eq!(ProjectType::from_label(" Bridge "), ProjectType::Bridge);
        assert_eq!(
            ProjectType::Other.unit_cost(),
            ProjectType::Residential.unit_cost()
        );
    }

    #[test]
    fn project_type_deserializes_unknown_values_as_other() {
        let parsed: ProjectType = serde_json::from_str("\"skyscraper\"").expect("parses");
        assert_eq!(parsed, ProjectType::Other);
        let parsed: ProjectType = serde_json::from_str("\"road\"").expect("parses");
        assert_eq!(parsed, ProjectType::Road);
    }

    #[test]
    fn estimator_kind_parses_known_labels_only() {
        assert_eq!(EstimatorKind::from_label("MODEL"), Some(EstimatorKind::Model));
        assert_eq!(EstimatorKind::from_label("formula"), Some(EstimatorKind::Formula));
        assert_eq!(EstimatorKind::from_label("forest"), None);
    }
}
