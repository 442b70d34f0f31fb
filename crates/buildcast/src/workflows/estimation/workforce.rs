use super::domain::WorkforceDistribution;

const ENGINEER_SHARE: f64 = 0.15;
const PLANNER_SHARE: f64 = 0.10;
const INSPECTOR_SHARE: f64 = 0.05;
const SKILLED_SHARE: f64 = 0.30;

fn share_of(total_workers: u32, share: f64) -> u32 {
    (f64::from(total_workers) * share).floor() as u32
}

/// Splits the team into roles. Engineers, planners and inspectors always get
/// at least one head; labor takes whatever is left, even when that is negative.
pub fn allocate_workforce(total_workers: u32) -> WorkforceDistribution {
    let engineers = share_of(total_workers, ENGINEER_SHARE).max(1);
    let planners = share_of(total_workers, PLANNER_SHARE).max(1);
    let inspectors = share_of(total_workers, INSPECTOR_SHARE).max(1);
    let skilled_workers = share_of(total_workers, SKILLED_SHARE);

    let assigned = i64::from(engineers)
        + i64::from(planners)
        + i64::from(inspectors)
        + i64::from(skilled_workers);
    let labor_workers = i64::from(total_workers) - assigned;

    WorkforceDistribution {
        engineers,
        planners,
        inspectors,
        skilled_workers,
        labor_workers,
    }
}
