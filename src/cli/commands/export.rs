use crate::cli::commands::load_dataset;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ReportPipeline;
use crate::errors::AppResult;
use crate::export::{ExportLogic, Step};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        step,
        format,
        file,
        force,
    } = cmd
    {
        // step non valido → errore prima di leggere i dati
        let step = Step::try_from(*step)?;
        let format = format.unwrap_or(cfg.default_format);
        let path = file
            .clone()
            .unwrap_or_else(|| cfg.output_path().join(step.file_name(format)));

        let dataset = load_dataset(cfg)?;
        let pipeline = ReportPipeline::new(&dataset, cfg.break_threshold_minutes);
        ExportLogic::export(&pipeline, step, format, &path, *force)?;
    }
    Ok(())
}
