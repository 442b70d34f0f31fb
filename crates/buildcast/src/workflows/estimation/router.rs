use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Form, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::domain::{EstimateResult, EstimatorKind, ProjectRequest, ProjectType};
use super::engine::{EstimationEngine, EstimationError};
use super::intake::{validate_request, IntakeError, ProjectForm};
use super::report::EstimateView;

/// Typed JSON body for `POST /api/v1/estimates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub area: f64,
    pub total_workers: u32,
    pub budget: f64,
    pub project_type: ProjectType,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub estimator: EstimatorKind,
}

impl EstimateRequest {
    pub fn into_parts(self) -> (ProjectRequest, EstimatorKind) {
        let request = ProjectRequest {
            area: self.area,
            total_workers: self.total_workers,
            budget: self.budget,
            project_type: self.project_type,
            start_date: self.start_date,
        };
        (request, self.estimator)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EstimateResponse {
    pub request: ProjectRequest,
    pub estimate: EstimateResult,
    pub view: EstimateView,
}

/// Router builder exposing the estimation endpoints.
pub fn estimation_router(engine: Arc<EstimationEngine>) -> Router {
    Router::new()
        .route("/api/v1/estimates", post(estimate_handler))
        .route("/generate", post(generate_handler))
        .with_state(engine)
}

pub(crate) async fn estimate_handler(
    State(engine): State<Arc<EstimationEngine>>,
    payload: Result<axum::Json<EstimateRequest>, JsonRejection>,
) -> Response {
    let axum::Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return intake_failure(IntakeError::MalformedBody(rejection.body_text())),
    };
    let (request, estimator) = payload.into_parts();
    match validate_request(request) {
        Ok(request) => respond(&engine, request, estimator),
        Err(error) => intake_failure(error),
    }
}

pub(crate) async fn generate_handler(
    State(engine): State<Arc<EstimationEngine>>,
    form: Result<Form<ProjectForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return intake_failure(IntakeError::MalformedBody(rejection.body_text())),
    };
    let parsed = form
        .parse()
        .and_then(|request| form.estimator().map(|kind| (request, kind)));
    match parsed {
        Ok((request, estimator)) => respond(&engine, request, estimator),
        Err(error) => intake_failure(error),
    }
}

fn respond(
    engine: &EstimationEngine,
    request: ProjectRequest,
    estimator: EstimatorKind,
) -> Response {
    match engine.estimate_with(&request, estimator) {
        Ok(estimate) => {
            info!(
                project_type = request.project_type.label(),
                estimator = estimator.label(),
                risk = estimate.risk_score,
                "estimate generated"
            );
            let view = EstimateView::from_result(&estimate);
            let body = EstimateResponse {
                request,
                estimate,
                view,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error @ EstimationError::ModelUnavailable) => {
            warn!("model estimate requested without loaded models");
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

fn intake_failure(error: IntakeError) -> Response {
    warn!(%error, "rejected estimate request");
    let payload = json!({ "error": error.to_string() });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}
