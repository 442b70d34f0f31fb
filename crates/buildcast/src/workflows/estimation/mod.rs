//! Construction estimation pipeline: workforce allocation, cost, schedule and
//! the composed report, plus the boundary pieces that feed it.

pub mod cost;
pub mod domain;
mod engine;
pub mod intake;
pub mod model;
pub mod report;
pub mod router;
pub mod schedule;
pub mod workforce;

#[cfg(test)]
mod tests;

pub use domain::{
    CostBreakdown, EstimateResult, EstimatorKind, ProjectRequest, ProjectType, Recommendation,
    TimeBreakdown, WorkforceDistribution,
};
pub use engine::{EstimationEngine, EstimationError};
pub use intake::{IntakeError, ProjectForm};
pub use model::{ModelError, StatisticalEstimator, TrainedModels};
pub use report::EstimateView;
pub use router::{estimation_router, EstimateRequest, EstimateResponse};

/// Formula-path estimate without constructing an engine.
pub fn estimate(request: &ProjectRequest) -> EstimateResult {
    EstimationEngine::formula().estimate(request)
}
