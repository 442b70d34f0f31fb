use crate::infra::load_engine;
use buildcast::error::AppError;
use buildcast::workflows::estimation::intake::validate_request;
use buildcast::workflows::estimation::{
    EstimateView, EstimatorKind, IntakeError, ProjectRequest, ProjectType,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Built area in square units
    #[arg(long)]
    pub(crate) area: f64,
    /// Total headcount available for the project
    #[arg(long)]
    pub(crate) workers: u32,
    /// Available budget in currency units
    #[arg(long)]
    pub(crate) budget: f64,
    /// residential, commercial, road or bridge; anything else uses the default rate
    #[arg(long, default_value = "residential")]
    pub(crate) project_type: String,
    /// Project start date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) start_date: Option<NaiveDate>,
    /// Which estimator produces cost and delay: formula or model
    #[arg(long, default_value = "formula")]
    pub(crate) estimator: String,
    /// Directory holding trained model artifacts (required for --estimator model)
    #[arg(long)]
    pub(crate) model_dir: Option<PathBuf>,
    /// Print the raw estimate as JSON instead of the dashboard
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let EstimateArgs {
        area,
        workers,
        budget,
        project_type,
        start_date,
        estimator,
        model_dir,
        json,
    } = args;

    let kind = EstimatorKind::from_label(&estimator)
        .ok_or_else(|| IntakeError::UnknownEstimator(estimator.clone()))?;
    let request = validate_request(ProjectRequest {
        area,
        total_workers: workers,
        budget,
        project_type: ProjectType::from_label(&project_type),
        start_date: start_date.unwrap_or_else(|| Local::now().date_naive()),
    })?;

    let engine = load_engine(model_dir.as_deref())?;
    let result = engine.estimate_with(&request, kind)?;
    let view = EstimateView::from_result(&result);

    if json {
        match serde_json::to_string_pretty(&view) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Estimate payload unavailable: {err}"),
        }
    } else {
        render_estimate(&request, &view);
    }

    Ok(())
}

pub(crate) fn render_estimate(request: &ProjectRequest, view: &EstimateView) {
    println!("Project estimate ({})", view.estimator_label);
    println!(
        "{} project, {} sq units, {} workers, budget {:.2}, starting {}",
        request.project_type.label(),
        request.area,
        request.total_workers,
        request.budget,
        request.start_date
    );

    println!("\nSummary");
    println!("- Predicted cost: {:.2}", view.cost);
    println!("- Predicted delay: {:.2} days", view.delay_days);
    println!("- Completion date: {}", view.completion_date);
    println!("- Risk score: {}/100", view.risk_score);

    println!("\nCost breakdown");
    println!("- Material: {:.2}", view.cost_breakdown.material);
    println!("- Labor: {:.2}", view.cost_breakdown.labor);
    println!("- Equipment: {:.2}", view.cost_breakdown.equipment);
    println!("- Misc: {:.2}", view.cost_breakdown.misc);

    println!("\nTime breakdown");
    println!("- Planning: {:.2} days", view.time_breakdown.planning);
    println!("- Engineering: {:.2} days", view.time_breakdown.engineering);
    println!("- Execution: {:.2} days", view.time_breakdown.execution);
    println!("- Inspection: {:.2} days", view.time_breakdown.inspection);

    println!("\nWorkforce distribution");
    for entry in &view.workforce {
        println!("- {}: {}", entry.role_label, entry.count);
    }
    if let Some(warning) = &view.staffing_warning {
        println!("  Note: {warning}");
    }

    println!("\nRecommendation");
    println!("- {}", view.recommendation_text);
    println!("- Suggested headcount for this area: {}", view.required_workers);
}
