use crate::cli::commands::load_dataset;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ReportPipeline;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run {
        format,
        out_dir,
        force,
    } = cmd
    {
        let dataset = load_dataset(cfg)?;
        let pipeline = ReportPipeline::new(&dataset, cfg.break_threshold_minutes);

        let format = format.unwrap_or(cfg.default_format);
        let out_dir = out_dir.clone().unwrap_or_else(|| cfg.output_path());

        let written = ExportLogic::export_all(&pipeline, format, &out_dir, *force)?;
        success(format!("{} report files written", written.len()));
    }
    Ok(())
}
