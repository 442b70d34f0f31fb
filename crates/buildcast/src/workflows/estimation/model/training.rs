use super::{ModelError, ModelFeatures, RegressionModel, TrainedModels, FEATURE_COUNT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::info;

pub const DEFAULT_SAMPLES: usize = 1000;
pub const DEFAULT_SEED: u64 = 42;

const MIN_SYNTHETIC_DELAY: f64 = 5.0;
const MAX_SYNTHETIC_DELAY: f64 = 120.0;
const DELAY_NOISE_MEAN: f64 = 5.0;
const DELAY_NOISE_STD_DEV: f64 = 3.0;

/// Randomly generated projects with ground-truth cost and delay targets.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticDataset {
    pub rows: Vec<[f64; FEATURE_COUNT]>,
    pub costs: Vec<f64>,
    pub delays: Vec<f64>,
}

impl SyntheticDataset {
    pub fn generate(samples: usize, seed: u64) -> Result<Self, ModelError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let delay_noise = Normal::new(DELAY_NOISE_MEAN, DELAY_NOISE_STD_DEV)?;
        let mut rows = Vec::with_capacity(samples);
        let mut costs = Vec::with_capacity(samples);
        let mut delays = Vec::with_capacity(samples);

        for _ in 0..samples {
            let area = rng.random_range(500_i64..6_000) as f64;
            let workers = rng.random_range(5_i64..60) as f64;
            let budget = rng.random_range(1_000_000_i64..20_000_000) as f64;

            // cost grows slightly faster than linearly with area
            let cost_noise = rng.random_range(-300_000_i64..300_000) as f64;
            let cost = area * 1_800.0 + workers * 8_000.0 + area.powf(1.05) + cost_noise;

            let delay = area / 400.0 - workers * 0.8
                + (10_000_000.0 / budget) * 20.0
                + delay_noise.sample(&mut rng);
            let delay = delay.clamp(MIN_SYNTHETIC_DELAY, MAX_SYNTHETIC_DELAY);

            let features = ModelFeatures {
                area,
                workers,
                budget,
            };
            rows.push(features.as_row());
            costs.push(cost);
            delays.push(delay);
        }

        Ok(Self {
            rows,
            costs,
            delays,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn train_models(dataset: &SyntheticDataset) -> Result<TrainedModels, ModelError> {
    let cost = RegressionModel::fit(&dataset.rows, &dataset.costs)?;
    let delay = RegressionModel::fit(&dataset.rows, &dataset.delays)?;
    info!(samples = dataset.len(), "fitted cost and delay models");
    Ok(TrainedModels { cost, delay })
}
