use super::cost::estimate_cost;
use super::domain::{EstimateResult, EstimatorKind, ProjectRequest, WorkforceDistribution};
use super::model::{ModelFeatures, StatisticalEstimator};
use super::report::{compose_report, ReportInputs};
use super::schedule::{clamp_delay, completion_date, estimate_schedule};
use super::workforce::allocate_workforce;
use std::sync::Arc;
use tracing::debug;

/// Runs the four estimation stages. A statistical estimator can be injected
/// as an alternative source for cost and delay; the formula path never needs it.
#[derive(Clone, Default)]
pub struct EstimationEngine {
    model: Option<Arc<dyn StatisticalEstimator>>,
}

impl EstimationEngine {
    pub fn formula() -> Self {
        Self { model: None }
    }

    pub fn with_model(model: Arc<dyn StatisticalEstimator>) -> Self {
        Self { model: Some(model) }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    pub fn estimate(&self, request: &ProjectRequest) -> EstimateResult {
        let workforce = allocate_workforce(request.total_workers);
        let cost = estimate_cost(request.area, request.project_type, &workforce);
        let schedule = estimate_schedule(
            cost.efficiency_score,
            cost.predicted_cost,
            request.budget,
            request.start_date,
        );

        let result = assemble(
            request,
            EstimatorKind::Formula,
            workforce,
            cost.base_cost,
            cost.efficiency_score,
            cost.predicted_cost,
            schedule.delay_days,
        );
        debug!(
            area = request.area,
            workers = request.total_workers,
            cost = result.predicted_cost,
            delay = result.predicted_delay_days,
            risk = result.risk_score,
            "formula estimate composed"
        );
        result
    }

    pub fn estimate_with(
        &self,
        request: &ProjectRequest,
        kind: EstimatorKind,
    ) -> Result<EstimateResult, EstimationError> {
        match kind {
            EstimatorKind::Formula => Ok(self.estimate(request)),
            EstimatorKind::Model => {
                let model = self
                    .model
                    .as_deref()
                    .ok_or(EstimationError::ModelUnavailable)?;
                Ok(estimate_from_model(model, request))
            }
        }
    }
}

impl std::fmt::Debug for EstimationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EstimationEngine")
            .field("has_model", &self.has_model())
            .finish()
    }
}

fn estimate_from_model(
    model: &dyn StatisticalEstimator,
    request: &ProjectRequest,
) -> EstimateResult {
    let workforce = allocate_workforce(request.total_workers);
    let formula = estimate_cost(request.area, request.project_type, &workforce);
    let features = ModelFeatures::from_request(request);

    let predicted_cost = match model.predict_cost(&features) {
        cost if cost.is_finite() && cost > 0.0 => cost,
        cost => {
            debug!(cost, "model cost unusable, keeping formula cost");
            formula.predicted_cost
        }
    };
    let raw_delay = model.predict_delay(&features);
    let delay_days = if raw_delay.is_finite() {
        clamp_delay(raw_delay)
    } else {
        estimate_schedule(
            formula.efficiency_score,
            predicted_cost,
            request.budget,
            request.start_date,
        )
        .delay_days
    };

    let result = assemble(
        request,
        EstimatorKind::Model,
        workforce,
        formula.base_cost,
        formula.efficiency_score,
        predicted_cost,
        delay_days,
    );
    debug!(
        cost = result.predicted_cost,
        delay = result.predicted_delay_days,
        risk = result.risk_score,
        "model estimate composed"
    );
    result
}

fn assemble(
    request: &ProjectRequest,
    estimator: EstimatorKind,
    workforce: WorkforceDistribution,
    base_cost: f64,
    efficiency_score: f64,
    predicted_cost: f64,
    delay_days: f64,
) -> EstimateResult {
    let report = compose_report(&ReportInputs {
        area: request.area,
        total_workers: request.total_workers,
        budget: request.budget,
        predicted_cost,
        delay_days,
    });

    EstimateResult {
        estimator,
        workforce,
        base_cost,
        efficiency_score,
        predicted_cost,
        predicted_delay_days: delay_days,
        risk_score: report.risk_score,
        completion_date: completion_date(request.start_date, delay_days),
        cost_breakdown: report.cost_breakdown,
        time_breakdown: report.time_breakdown,
        recommendation: report.recommendation,
        required_workers_estimate: report.required_workers_estimate,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EstimationError {
    #[error("no statistical model is loaded; use the formula estimator or train models first")]
    ModelUnavailable,
}
