use super::ModelError;
use serde::{Deserialize, Serialize};

/// Columns per feature row: area, workers, budget and budget pressure.
pub const FEATURE_COUNT: usize = 4;
const FEATURES: usize = FEATURE_COUNT;
const PIVOT_EPSILON: f64 = 1e-12;

/// Ordinary least squares on standardized features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionModel {
    pub feature_means: [f64; FEATURES],
    pub feature_scales: [f64; FEATURES],
    pub intercept: f64,
    pub coefficients: [f64; FEATURES],
}

impl RegressionModel {
    pub fn fit(rows: &[[f64; FEATURES]], targets: &[f64]) -> Result<Self, ModelError> {
        if rows.is_empty() {
            return Err(ModelError::EmptyDataset);
        }
        if rows.len() != targets.len() {
            return Err(ModelError::LengthMismatch {
                rows: rows.len(),
                targets: targets.len(),
            });
        }

        let n = rows.len() as f64;
        let mut feature_means = [0.0; FEATURES];
        for row in rows {
            for (mean, value) in feature_means.iter_mut().zip(row) {
                *mean += value / n;
            }
        }

        let mut feature_scales = [0.0; FEATURES];
        for row in rows {
            for column in 0..FEATURES {
                let centered = row[column] - feature_means[column];
                feature_scales[column] += centered * centered / n;
            }
        }
        for (column, scale) in feature_scales.iter_mut().enumerate() {
            *scale = scale.sqrt();
            if *scale < PIVOT_EPSILON {
                return Err(ModelError::ConstantFeature(column));
            }
        }

        let intercept = targets.iter().sum::<f64>() / n;

        // normal equations on z-scores: (ZᵀZ) b = Zᵀ(y - ȳ)
        let mut gram = [[0.0; FEATURES]; FEATURES];
        let mut moment = [0.0; FEATURES];
        for (row, target) in rows.iter().zip(targets) {
            let z = standardize(row, &feature_means, &feature_scales);
            let residual = target - intercept;
            for i in 0..FEATURES {
                moment[i] += z[i] * residual;
                for j in 0..FEATURES {
                    gram[i][j] += z[i] * z[j];
                }
            }
        }

        let coefficients = solve(gram, moment)?;

        Ok(Self {
            feature_means,
            feature_scales,
            intercept,
            coefficients,
        })
    }

    pub fn predict(&self, row: &[f64; FEATURES]) -> f64 {
        let z = standardize(row, &self.feature_means, &self.feature_scales);
        self.intercept
            + z.iter()
                .zip(&self.coefficients)
                .map(|(value, weight)| value * weight)
                .sum::<f64>()
    }
}

fn standardize(
    row: &[f64; FEATURES],
    means: &[f64; FEATURES],
    scales: &[f64; FEATURES],
) -> [f64; FEATURES] {
    let mut z = [0.0; FEATURES];
    for column in 0..FEATURES {
        z[column] = (row[column] - means[column]) / scales[column];
    }
    z
}

/// Gaussian elimination with partial pivoting.
fn solve(
    mut matrix: [[f64; FEATURES]; FEATURES],
    mut rhs: [f64; FEATURES],
) -> Result<[f64; FEATURES], ModelError> {
    for pivot in 0..FEATURES {
        let best = (pivot..FEATURES)
            .max_by(|a, b| matrix[*a][pivot].abs().total_cmp(&matrix[*b][pivot].abs()))
            .unwrap_or(pivot);
        if matrix[best][pivot].abs() < PIVOT_EPSILON {
            return Err(ModelError::Singular);
        }
        matrix.swap(pivot, best);
        rhs.swap(pivot, best);

        for row in pivot + 1..FEATURES {
            let factor = matrix[row][pivot] / matrix[pivot][pivot];
            for column in pivot..FEATURES {
                matrix[row][column] -= factor * matrix[pivot][column];
            }
            rhs[row] -= factor * rhs[pivot];
        }
    }

    let mut solution = [0.0; FEATURES];
    for row in (0..FEATURES).rev() {
        let tail: f64 = (row + 1..FEATURES)
            .map(|column| matrix[row][column] * solution[column])
            .sum();
        solution[row] = (rhs[row] - tail) / matrix[row][row];
    }
    Ok(solution)
}
