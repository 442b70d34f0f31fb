use super::common::*;
use crate::workflows::estimation::domain::{
    EstimatorKind, ProjectType, Recommendation, WorkforceDistribution,
};
use crate::workflows::estimation::{EstimateView, EstimationEngine, EstimationError};
use chrono::NaiveDate;

#[test]
fn baseline_project_matches_golden_values() {
    let result = EstimationEngine::formula().estimate(&baseline_request());

    assert_eq!(result.estimator, EstimatorKind::Formula);
    assert_eq!(
        result.workforce,
        WorkforceDistribution {
            engineers: 3,
            planners: 2,
            inspectors: 1,
            skilled_workers: 6,
            labor_workers: 8,
        }
    );
    assert_eq!(result.workforce.total(), 20);
    assert_eq!(result.base_cost, 1_500_000.0);
    assert!((result.efficiency_score - 2.2).abs() < 1e-9);
    assert_eq!(result.predicted_cost, 1_500_000.0);
    assert!((result.predicted_delay_days - 60.0 / 2.2).abs() < 1e-9);
    assert_eq!(
        result.completion_date,
        NaiveDate::from_ymd_opt(2024, 1, 28).expect("valid date")
    );
    assert_eq!(result.risk_score, 11);
    assert_eq!(result.recommendation, Recommendation::OptimizeLaborCost);
    assert_eq!(result.required_workers_estimate, 10);

    assert_eq!(result.cost_breakdown.material, 750_000.0);
    assert!((result.cost_breakdown.total() - result.predicted_cost).abs() < 1e-6);
    assert!((result.time_breakdown.total() - result.predicted_delay_days).abs() < 1e-9);
}

#[test]
fn unknown_project_type_prices_like_residential() {
    let engine = EstimationEngine::formula();
    let mut other = baseline_request();
    other.project_type = ProjectType::from_label("unknown_type");

    let residential = engine.estimate(&baseline_request());
    let fallback = engine.estimate(&other);

    assert_eq!(fallback.base_cost, residential.base_cost);
    assert_eq!(fallback.predicted_cost, residential.predicted_cost);
    assert_eq!(fallback.predicted_delay_days, residential.predicted_delay_days);
    assert_eq!(fallback.risk_score, residential.risk_score);
}

#[test]
fn two_person_team_keeps_negative_labor_through_the_report() {
    let mut request = baseline_request();
    request.total_workers = 2;
    request.area = 100.0;
    request.budget = 100_000.0;

    let result = EstimationEngine::formula().estimate(&request);

    assert_eq!(result.workforce.labor_workers, -1);
    assert_eq!(result.workforce.total(), 2);
    // capacity 2 + 1.5 - 1 over size factor 2
    assert!((result.efficiency_score - 1.25).abs() < 1e-12);
    assert_eq!(result.predicted_cost, 150_000.0);
    // 48 days from efficiency plus a third of 60 for the shortage
    assert!((result.predicted_delay_days - 68.0).abs() < 1e-9);
    assert_eq!(result.risk_score, 41);

    let view = EstimateView::from_result(&result);
    let labor = view
        .workforce
        .iter()
        .find(|entry| entry.role_label == "Labor Workers")
        .expect("labor entry present");
    assert_eq!(labor.count, -1);
    assert!(view.staffing_warning.is_some());
}

#[test]
fn generous_budget_removes_budget_risk() {
    let mut request = baseline_request();
    request.budget = 1e12;

    let result = EstimationEngine::formula().estimate(&request);
    let schedule_only = (result.predicted_delay_days / 150.0 * 60.0).round() as u8;

    assert_eq!(result.risk_score, schedule_only);
}

#[test]
fn sprawling_understaffed_project_hits_the_efficiency_floor() {
    let mut request = baseline_request();
    request.area = 1_000_000.0;
    request.total_workers = 5;
    request.budget = 1.0;
    request.project_type = ProjectType::Bridge;

    let result = EstimationEngine::formula().estimate(&request);

    assert!(result.predicted_delay_days <= 200.0);
    assert!(result.predicted_delay_days > 159.0);
    assert_eq!(result.recommendation, Recommendation::IncreaseWorkforce);
    assert_eq!(result.required_workers_estimate, 10_000);
    assert_eq!(result.risk_score, 100);
}

#[test]
fn model_path_requires_an_injected_model() {
    let engine = EstimationEngine::formula();
    assert!(!engine.has_model());
    assert!(matches!(
        engine.estimate_with(&baseline_request(), EstimatorKind::Model),
        Err(EstimationError::ModelUnavailable)
    ));
    assert!(engine
        .estimate_with(&baseline_request(), EstimatorKind::Formula)
        .is_ok());
}

#[test]
fn model_path_clamps_delay_and_composes_report() {
    let engine = model_engine(2_000_000.0, 500.0);
    let mut request = baseline_request();
    request.budget = 1_000_000.0;

    let result = engine
        .estimate_with(&request, EstimatorKind::Model)
        .expect("model estimate");

    assert_eq!(result.estimator, EstimatorKind::Model);
    assert_eq!(result.predicted_cost, 2_000_000.0);
    assert_eq!(result.predicted_delay_days, 200.0);
    assert_eq!(
        result.completion_date,
        NaiveDate::from_ymd_opt(2024, 7, 19).expect("valid date")
    );
    assert_eq!(result.risk_score, 100);
    assert_eq!(result.base_cost, 1_500_000.0);
    assert!((result.cost_breakdown.total() - 2_000_000.0).abs() < 1e-6);
}

#[test]
fn model_path_falls_back_when_predictions_are_unusable() {
    let engine = model_engine(-50.0, f64::NAN);
    let formula = EstimationEngine::formula().estimate(&baseline_request());

    let result = engine
        .estimate_with(&baseline_request(), EstimatorKind::Model)
        .expect("model estimate");

    assert_eq!(result.predicted_cost, formula.predicted_cost);
    assert_eq!(result.predicted_delay_days, formula.predicted_delay_days);
    assert_eq!(result.estimator, EstimatorKind::Model);
}

#[test]
fn formula_estimate_ignores_injected_model() {
    let engine = model_engine(9_999_999.0, 180.0);
    let result = engine.estimate(&baseline_request());
    assert_eq!(result.predicted_cost, 1_500_000.0);
    assert_eq!(result.estimator, EstimatorKind::Formula);
}
