use buildcast::error::AppError;
use buildcast::workflows::estimation::model::{
    train_models, SyntheticDataset, COST_MODEL_FILE, DEFAULT_SAMPLES, DEFAULT_SEED,
    DELAY_MODEL_FILE,
};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct TrainArgs {
    /// Directory the model artifacts are written to
    #[arg(long, default_value = "models")]
    pub(crate) output: PathBuf,
    /// Number of synthetic projects to generate
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    pub(crate) samples: usize,
    /// Seed for the synthetic data generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub(crate) seed: u64,
}

pub(crate) fn run_train(args: TrainArgs) -> Result<(), AppError> {
    let TrainArgs {
        output,
        samples,
        seed,
    } = args;

    let dataset = SyntheticDataset::generate(samples, seed)?;
    let models = train_models(&dataset)?;
    models.save(&output)?;

    println!(
        "Trained cost and delay models on {} synthetic projects (seed {})",
        dataset.len(),
        seed
    );
    println!("- {}", output.join(COST_MODEL_FILE).display());
    println!("- {}", output.join(DELAY_MODEL_FILE).display());
    Ok(())
}
