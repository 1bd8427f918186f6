// src/export/logic.rs

use crate::core::report::{ReportPipeline, break_rows, stops_rows, times_rows};
use crate::core::DutyReport;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TableRow;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, Step};
use crate::ui::messages::{header, warning};
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Compute the pipeline up to `step` and export that column set only.
    pub fn export(
        pipeline: &ReportPipeline<'_>,
        step: Step,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }

        let windows = pipeline.windows()?;
        if step == Step::Times {
            return write_rows(&times_rows(&windows), format, path);
        }

        let duties = pipeline.with_stop_names(windows);
        if step == Step::Stops {
            return write_rows(&stops_rows(&duties), format, path);
        }

        let reports = pipeline.with_breaks(duties)?;
        warn_overlaps(&reports);
        write_rows(&break_rows(&reports), format, path)
    }

    /// Run the three steps one after the other, exporting after each one
    /// into `out_dir` (`step1.<ext>`, `step2.<ext>`, `step3.<ext>`).
    ///
    /// Returns the written files, in step order.
    pub fn export_all(
        pipeline: &ReportPipeline<'_>,
        format: ExportFormat,
        out_dir: &Path,
        force: bool,
    ) -> AppResult<Vec<PathBuf>> {
        ensure_dir(out_dir)?;

        let paths: Vec<PathBuf> = Step::ALL
            .iter()
            .map(|s| out_dir.join(s.file_name(format)))
            .collect();

        // conferma sovrascrittura prima di calcolare qualsiasi cosa
        for p in &paths {
            ensure_writable(p, force)?;
        }

        announce(Step::Times);
        let windows = pipeline.windows()?;
        write_rows(&times_rows(&windows), format, &paths[0])?;

        announce(Step::Stops);
        let duties = pipeline.with_stop_names(windows);
        write_rows(&stops_rows(&duties), format, &paths[1])?;

        announce(Step::Breaks);
        let reports = pipeline.with_breaks(duties)?;
        warn_overlaps(&reports);
        write_rows(&break_rows(&reports), format, &paths[2])?;

        Ok(paths)
    }
}

fn announce(step: Step) {
    header(format!(
        "Step {}: generating {}",
        step.number(),
        step.description()
    ));
}

/// Dispatch verso il writer del formato richiesto.
pub(crate) fn write_rows<R: TableRow>(rows: &[R], format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Xlsx => export_xlsx(rows, path),
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}

/// One warning per duty whose events overlap in time.
pub(crate) fn warn_overlaps(reports: &[DutyReport]) {
    for r in reports.iter().filter(|r| !r.overlaps.is_empty()) {
        let details: Vec<String> = r
            .overlaps
            .iter()
            .map(|o| format!("{} ({} min)", o.after, o.minutes))
            .collect();
        warning(format!(
            "Duty {}: overlapping events after {}",
            r.duty.window.duty_id,
            details.join(", ")
        ));
    }
}
