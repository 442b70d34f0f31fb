mod composer;
pub mod views;

pub use composer::{
    breakdown_cost, breakdown_time, compose_report, recommend, required_workers, risk_score,
    ComposedReport, ReportInputs,
};
pub use views::EstimateView;
