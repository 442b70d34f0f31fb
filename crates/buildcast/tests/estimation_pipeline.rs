use buildcast::workflows::estimation::model::{train_models, SyntheticDataset};
use buildcast::workflows::estimation::report::risk_score;
use buildcast::workflows::estimation::schedule::{clamp_delay, MAX_DELAY_DAYS};
use buildcast::workflows::estimation::{
    estimate, EstimateView, EstimationEngine, EstimatorKind, ProjectForm, ProjectRequest,
    ProjectType, Recommendation, TrainedModels,
};
use chrono::NaiveDate;
use std::sync::Arc;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid start date")
}

fn residential(area: f64, total_workers: u32, budget: f64) -> ProjectRequest {
    ProjectRequest {
        area,
        total_workers,
        budget,
        project_type: ProjectType::Residential,
        start_date: start_date(),
    }
}

#[test]
fn form_submission_flows_through_every_stage() {
    let form = ProjectForm {
        area: "1000".to_string(),
        workers: "20".to_string(),
        budget: "2000000".to_string(),
        project_type: "residential".to_string(),
        start_date: "2024-01-01".to_string(),
        estimator: None,
    };

    let request = form.parse().expect("form parses");
    let result = estimate(&request);
    let view = EstimateView::from_result(&result);

    assert_eq!(result.workforce.engineers, 3);
    assert_eq!(result.workforce.planners, 2);
    assert_eq!(result.workforce.inspectors, 1);
    assert_eq!(result.workforce.skilled_workers, 6);
    assert_eq!(result.workforce.labor_workers, 8);
    assert_eq!(result.predicted_cost, 1_500_000.0);
    assert_eq!(
        result.completion_date,
        NaiveDate::from_ymd_opt(2024, 1, 28).expect("valid date")
    );

    assert_eq!(view.cost, 1_500_000.0);
    assert_eq!(view.delay_days, 27.27);
    assert_eq!(view.time_breakdown.execution, 10.91);
    assert_eq!(view.required_workers, 10);
    assert!(view.staffing_warning.is_none());
}

#[test]
fn unknown_type_matches_residential_end_to_end() {
    let mut unknown = residential(2_500.0, 18, 3_000_000.0);
    unknown.project_type = ProjectType::from_label("unknown_type");

    assert_eq!(
        estimate(&unknown).predicted_cost,
        estimate(&residential(2_500.0, 18, 3_000_000.0)).predicted_cost
    );
}

#[test]
fn project_types_order_by_unit_cost() {
    let ordered = [
        ProjectType::Road,
        ProjectType::Residential,
        ProjectType::Commercial,
        ProjectType::Bridge,
    ];
    let costs: Vec<f64> = ordered
        .into_iter()
        .map(|project_type| {
            let mut request = residential(1_000.0, 20, 1e9);
            request.project_type = project_type;
            estimate(&request).predicted_cost
        })
        .collect();

    assert!(costs.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn understaffed_site_is_told_to_hire() {
    let result = estimate(&residential(6_000.0, 10, 20_000_000.0));
    assert_eq!(result.recommendation, Recommendation::IncreaseWorkforce);
    assert_eq!(
        result.recommendation.message(),
        "Increase workforce to avoid major delays."
    );
}

#[test]
fn balanced_team_gets_balanced_advice() {
    let result = estimate(&residential(1_500.0, 15, 5_000_000.0));
    assert_eq!(result.recommendation, Recommendation::Balanced);
}

#[test]
fn ceiling_applies_to_runaway_delays() {
    assert_eq!(clamp_delay(480.0), MAX_DELAY_DAYS);
    // the ceiling alone already saturates the schedule share of risk
    assert_eq!(risk_score(MAX_DELAY_DAYS, 1_000.0, 1_000.0), 80);
}

#[test]
fn trained_models_plug_into_the_engine() {
    let dataset = SyntheticDataset::generate(300, 11).expect("dataset generates");
    let models: TrainedModels = train_models(&dataset).expect("models fit");
    let engine = EstimationEngine::with_model(Arc::new(models));

    let request = residential(3_000.0, 30, 10_000_000.0);
    let result = engine
        .estimate_with(&request, EstimatorKind::Model)
        .expect("model estimate");

    assert_eq!(result.estimator, EstimatorKind::Model);
    assert!(result.predicted_cost > 4_000_000.0);
    assert!(result.predicted_cost < 7_000_000.0);
    assert!((15.0..=200.0).contains(&result.predicted_delay_days));
    assert!(result.risk_score <= 100);
}
