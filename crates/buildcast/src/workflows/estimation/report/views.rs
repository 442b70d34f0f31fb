use super::super::domain::{
    CostBreakdown, EstimateResult, EstimatorKind, Recommendation, TimeBreakdown,
    WorkforceDistribution,
};
use chrono::NaiveDate;
use serde::Serialize;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkforceEntry {
    pub role_label: &'static str,
    pub count: i64,
}

/// Dashboard projection of an estimate, with money and days rounded to cents.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateView {
    pub estimator: EstimatorKind,
    pub estimator_label: &'static str,
    pub cost: f64,
    pub delay_days: f64,
    pub completion_date: NaiveDate,
    pub risk_score: u8,
    pub cost_breakdown: CostBreakdown,
    pub time_breakdown: TimeBreakdown,
    pub workforce: Vec<WorkforceEntry>,
    pub recommendation: Recommendation,
    pub recommendation_text: &'static str,
    pub required_workers: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staffing_warning: Option<String>,
}

impl EstimateView {
    pub fn from_result(result: &EstimateResult) -> Self {
        let cost = &result.cost_breakdown;
        let time = &result.time_breakdown;

        Self {
            estimator: result.estimator,
            estimator_label: result.estimator.label(),
            cost: round2(result.predicted_cost),
            delay_days: round2(result.predicted_delay_days),
            completion_date: result.completion_date,
            risk_score: result.risk_score,
            cost_breakdown: CostBreakdown {
                material: round2(cost.material),
                labor: round2(cost.labor),
                equipment: round2(cost.equipment),
                misc: round2(cost.misc),
            },
            time_breakdown: TimeBreakdown {
                planning: round2(time.planning),
                engineering: round2(time.engineering),
                execution: round2(time.execution),
                inspection: round2(time.inspection),
            },
            workforce: workforce_entries(&result.workforce),
            recommendation: result.recommendation,
            recommendation_text: result.recommendation.message(),
            required_workers: result.required_workers_estimate,
            staffing_warning: staffing_warning(&result.workforce),
        }
    }
}

fn workforce_entries(workforce: &WorkforceDistribution) -> Vec<WorkforceEntry> {
    vec![
        WorkforceEntry {
            role_label: "Engineers",
            count: i64::from(workforce.engineers),
        },
        WorkforceEntry {
            role_label: "Planners",
            count: i64::from(workforce.planners),
        },
        WorkforceEntry {
            role_label: "Skilled Workers",
            count: i64::from(workforce.skilled_workers),
        },
        WorkforceEntry {
            role_label: "Labor Workers",
            count: workforce.labor_workers,
        },
        WorkforceEntry {
            role_label: "Inspectors",
            count: i64::from(workforce.inspectors),
        },
    ]
}

fn staffing_warning(workforce: &WorkforceDistribution) -> Option<String> {
    if !workforce.is_overcommitted() {
        return None;
    }
    Some(format!(
        "Role minimums exceed team size by {}; labor headcount is negative",
        -workforce.labor_workers
    ))
}
