use super::super::domain::{CostBreakdown, Recommendation, TimeBreakdown};

const SCHEDULE_REFERENCE_DAYS: f64 = 150.0;
const SCHEDULE_RISK_WEIGHT: f64 = 60.0;
const BUDGET_RISK_WEIGHT: f64 = 40.0;

const UNDERSTAFFED_AREA_PER_WORKER: f64 = 150.0;
const OVERSTAFFED_AREA_PER_WORKER: f64 = 80.0;
const AREA_PER_REQUIRED_WORKER: f64 = 100.0;

/// Values the composer needs from the earlier stages.
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs {
    pub area: f64,
    pub total_workers: u32,
    pub budget: f64,
    pub predicted_cost: f64,
    pub delay_days: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposedReport {
    pub risk_score: u8,
    pub cost_breakdown: CostBreakdown,
    pub time_breakdown: TimeBreakdown,
    pub recommendation: Recommendation,
    pub required_workers_estimate: u64,
}

/// Blend of schedule risk against a 150-day reference and cost overrun risk, capped at 100.
pub fn risk_score(delay_days: f64, predicted_cost: f64, budget: f64) -> u8 {
    let schedule_risk = (delay_days / SCHEDULE_REFERENCE_DAYS) * SCHEDULE_RISK_WEIGHT;
    let overrun = ((predicted_cost - budget) / predicted_cost).max(0.0);
    let budget_risk = overrun * BUDGET_RISK_WEIGHT;

    (schedule_risk + budget_risk).clamp(0.0, 100.0).round() as u8
}

pub fn breakdown_cost(predicted_cost: f64) -> CostBreakdown {
    CostBreakdown {
        material: predicted_cost * 0.50,
        labor: predicted_cost * 0.30,
        equipment: predicted_cost * 0.15,
        misc: predicted_cost * 0.05,
    }
}

pub fn breakdown_time(delay_days: f64) -> TimeBreakdown {
    TimeBreakdown {
        planning: delay_days * 0.20,
        engineering: delay_days * 0.25,
        execution: delay_days * 0.40,
        inspection: delay_days * 0.15,
    }
}

pub fn recommend(total_workers: u32, area: f64) -> Recommendation {
    let workers = f64::from(total_workers);
    if workers < area / UNDERSTAFFED_AREA_PER_WORKER {
        Recommendation::IncreaseWorkforce
    } else if workers > area / OVERSTAFFED_AREA_PER_WORKER {
        Recommendation::OptimizeLaborCost
    } else {
        Recommendation::Balanced
    }
}

pub fn required_workers(area: f64) -> u64 {
    (area / AREA_PER_REQUIRED_WORKER).floor().max(0.0) as u64
}

pub fn compose_report(inputs: &ReportInputs) -> ComposedReport {
    ComposedReport {
        risk_score: risk_score(inputs.delay_days, inputs.predicted_cost, inputs.budget),
        cost_breakdown: breakdown_cost(inputs.predicted_cost),
        time_breakdown: breakdown_time(inputs.delay_days),
        recommendation: recommend(inputs.total_workers, inputs.area),
        required_workers_estimate: required_workers(inputs.area),
    }
}
