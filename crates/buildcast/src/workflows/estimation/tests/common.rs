use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::estimation::domain::{ProjectRequest, ProjectType};
use crate::workflows::estimation::model::{ModelFeatures, StatisticalEstimator};
use crate::workflows::estimation::{estimation_router, EstimationEngine};

pub(super) fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid start date")
}

/// Area 1000, 20 workers, 2M budget, residential, starting 2024-01-01.
pub(super) fn baseline_request() -> ProjectRequest {
    ProjectRequest {
        area: 1_000.0,
        total_workers: 20,
        budget: 2_000_000.0,
        project_type: ProjectType::Residential,
        start_date: start_date(),
    }
}

/// Returns the same cost and delay for every input.
pub(super) struct FixedModel {
    pub(super) cost: f64,
    pub(super) delay: f64,
}

impl StatisticalEstimator for FixedModel {
    fn predict_cost(&self, _features: &ModelFeatures) -> f64 {
        self.cost
    }

    fn predict_delay(&self, _features: &ModelFeatures) -> f64 {
        self.delay
    }
}

pub(super) fn model_engine(cost: f64, delay: f64) -> EstimationEngine {
    EstimationEngine::with_model(Arc::new(FixedModel { cost, delay }))
}

pub(super) fn router_with_engine(engine: EstimationEngine) -> axum::Router {
    estimation_router(Arc::new(engine))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
