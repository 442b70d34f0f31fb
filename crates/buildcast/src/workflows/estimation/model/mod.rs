//! Optional statistical estimators fitted offline on synthetic project data.
//!
//! The formula pipeline never depends on these. When artifacts are present the
//! service loads them once and hands them to the engine as a shared capability.

mod regression;
mod training;

pub use regression::{RegressionModel, FEATURE_COUNT};
pub use training::{train_models, SyntheticDataset, DEFAULT_SAMPLES, DEFAULT_SEED};

use super::domain::ProjectRequest;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const COST_MODEL_FILE: &str = "cost_model.json";
pub const DELAY_MODEL_FILE: &str = "delay_model.json";

const BUDGET_PRESSURE_SCALE: f64 = 10_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelFeatures {
    pub area: f64,
    pub workers: f64,
    pub budget: f64,
}

impl ModelFeatures {
    pub fn from_request(request: &ProjectRequest) -> Self {
        Self {
            area: request.area,
            workers: f64::from(request.total_workers),
            budget: request.budget,
        }
    }

    /// Delay grows with `1e7 / budget`, which a linear fit on budget alone misses.
    pub fn budget_pressure(&self) -> f64 {
        BUDGET_PRESSURE_SCALE / self.budget
    }

    /// Inputs in the column order the models were fitted with.
    pub fn as_row(&self) -> [f64; FEATURE_COUNT] {
        [self.area, self.workers, self.budget, self.budget_pressure()]
    }
}

/// Alternative source for predicted cost and delay.
pub trait StatisticalEstimator: Send + Sync {
    fn predict_cost(&self, features: &ModelFeatures) -> f64;
    fn predict_delay(&self, features: &ModelFeatures) -> f64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModels {
    pub cost: RegressionModel,
    pub delay: RegressionModel,
}

impl TrainedModels {
    pub fn save(&self, directory: impl AsRef<Path>) -> Result<(), ModelError> {
        let directory = directory.as_ref();
        fs::create_dir_all(directory).map_err(|source| ModelError::Io {
            path: directory.to_path_buf(),
            source,
        })?;

        write_model(&directory.join(COST_MODEL_FILE), &self.cost)?;
        write_model(&directory.join(DELAY_MODEL_FILE), &self.delay)?;
        info!(directory = %directory.display(), "saved trained models");
        Ok(())
    }

    pub fn load(directory: impl AsRef<Path>) -> Result<Self, ModelError> {
        let directory = directory.as_ref();
        let cost = read_model(&directory.join(COST_MODEL_FILE))?;
        let delay = read_model(&directory.join(DELAY_MODEL_FILE))?;
        Ok(Self { cost, delay })
    }
}

impl StatisticalEstimator for TrainedModels {
    fn predict_cost(&self, features: &ModelFeatures) -> f64 {
        self.cost.predict(&features.as_row())
    }

    fn predict_delay(&self, features: &ModelFeatures) -> f64 {
        self.delay.predict(&features.as_row())
    }
}

fn write_model(path: &Path, model: &RegressionModel) -> Result<(), ModelError> {
    let payload = serde_json::to_vec_pretty(model).map_err(|source| ModelError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, payload).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_model(path: &Path) -> Result<RegressionModel, ModelError> {
    let raw = fs::read(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&raw).map_err(|source| ModelError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to access model artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid model artifact {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot fit a model on an empty dataset")]
    EmptyDataset,
    #[error("feature rows ({rows}) and targets ({targets}) differ in length")]
    LengthMismatch { rows: usize, targets: usize },
    #[error("feature column {0} is constant and cannot be standardized")]
    ConstantFeature(usize),
    #[error("normal equations are singular; features are collinear")]
    Singular,
    #[error("invalid synthetic noise distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),
}
