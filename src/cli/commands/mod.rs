pub mod config;
pub mod export;
pub mod init;
pub mod run;
pub mod show;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Dataset;
use crate::ui::messages::info;

/// Load the dataset configured in `cfg`.
pub(crate) fn load_dataset(cfg: &Config) -> AppResult<Dataset> {
    let path = cfg.data_path();
    info(format!("Loading data from {}", path.display()));
    let dataset = Dataset::load(&path)?;
    info(format!(
        "{} duties, {} vehicles, {} stops",
        dataset.duties.len(),
        dataset.vehicles.len(),
        dataset.stops.len()
    ));
    Ok(dataset)
}
