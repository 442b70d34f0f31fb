use super::domain::{ProjectType, WorkforceDistribution};

const MAX_INEFFICIENCY_MARKUP: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostEstimate {
    pub base_cost: f64,
    pub efficiency_score: f64,
    pub predicted_cost: f64,
}

/// Weighted labor capacity normalized by project size. Inspectors carry no weight.
pub fn efficiency_score(area: f64, workforce: &WorkforceDistribution) -> f64 {
    let capacity = f64::from(workforce.engineers) * 2.0
        + f64::from(workforce.planners) * 1.5
        + f64::from(workforce.skilled_workers) * 1.2
        + workforce.labor_workers as f64;

    capacity / (area / 100.0 + 1.0)
}

/// Base cost from the unit rate, marked up by up to 25% when efficiency is below 1.0.
pub fn estimate_cost(
    area: f64,
    project_type: ProjectType,
    workforce: &WorkforceDistribution,
) -> CostEstimate {
    let base_cost = area * project_type.unit_cost();
    let efficiency_score = efficiency_score(area, workforce);
    let shortfall = 1.0 - efficiency_score.min(1.0);
    let predicted_cost = base_cost * (1.0 + shortfall * MAX_INEFFICIENCY_MARKUP);

    CostEstimate {
        base_cost,
        efficiency_score,
        predicted_cost,
    }
}
