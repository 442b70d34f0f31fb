use buildcast::workflows::estimation::intake::{parse_start_date, DATE_FORMAT};
use buildcast::workflows::estimation::{EstimationEngine, ModelError, TrainedModels};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    parse_start_date(raw).map_err(|_| format!("failed to parse '{raw}' as {DATE_FORMAT}"))
}

/// Builds an engine, attaching trained models when a directory is given.
pub(crate) fn load_engine(model_dir: Option<&Path>) -> Result<EstimationEngine, ModelError> {
    match model_dir {
        Some(dir) => {
            let models = TrainedModels::load(dir)?;
            info!(directory = %dir.display(), "statistical estimator loaded");
            Ok(EstimationEngine::with_model(Arc::new(models)))
        }
        None => Ok(EstimationEngine::formula()),
    }
}

/// Like [`load_engine`], but a broken artifact only disables the model path.
pub(crate) fn load_engine_or_formula(model_dir: Option<&Path>) -> EstimationEngine {
    match load_engine(model_dir) {
        Ok(engine) => engine,
        Err(err) => {
            warn!(error = %err, "continuing with formula estimator only");
            EstimationEngine::formula()
        }
    }
}
