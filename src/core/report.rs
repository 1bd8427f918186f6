//! Report assembly.
//!
//! The pipeline runs in three stages, each one consuming the records of the
//! previous stage and wrapping them in a richer type:
//!
//! 1. [`DutyWindow`]  duty id, start and end time
//! 2. [`DutyStops`]   + first and last stop names
//! 3. [`DutyReport`]  + breaks (and overlap diagnostics)
//!
//! The `*_rows` functions flatten each stage into export rows.

use crate::core::calculator::breaks::{Break, Overlap, detect_breaks};
use crate::core::calculator::windows::{DutyWindow, generate_windows, index_by_duty};
use crate::core::directory::StopDirectory;
use crate::errors::AppResult;
use crate::export::model::{DutyBreakRow, DutyStopsRow, DutyTimesRow};
use crate::models::{Dataset, Vehicle};

/// Stage 2 record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutyStops {
    pub window: DutyWindow,
    pub first_stop: String,
    pub last_stop: String,
}

/// Stage 3 record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutyReport {
    pub duty: DutyStops,
    pub breaks: Vec<Break>,
    pub overlaps: Vec<Overlap>,
}

/// Resolve the first/last stop ids of every window.
pub fn attach_stop_names(windows: Vec<DutyWindow>, stops: &StopDirectory<'_>) -> Vec<DutyStops> {
    windows
        .into_iter()
        .map(|window| DutyStops {
            first_stop: stops.resolve(window.first_stop_id.as_ref()).to_string(),
            last_stop: stops.resolve(window.last_stop_id.as_ref()).to_string(),
            window,
        })
        .collect()
}

/// Run break detection for every duty.
pub fn attach_breaks(
    duties: Vec<DutyStops>,
    vehicles: &[Vehicle],
    stops: &StopDirectory<'_>,
    threshold: i64,
) -> AppResult<Vec<DutyReport>> {
    let index = index_by_duty(vehicles);

    duties
        .into_iter()
        .map(|duty| {
            let events = index
                .get(&duty.window.duty_id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let scan = detect_breaks(events, stops, threshold)?;

            Ok(DutyReport {
                duty,
                breaks: scan.breaks,
                overlaps: scan.overlaps,
            })
        })
        .collect()
}

/// Convenience wrapper running the stages against one dataset.
pub struct ReportPipeline<'a> {
    dataset: &'a Dataset,
    threshold: i64,
}

impl<'a> ReportPipeline<'a> {
    pub fn new(dataset: &'a Dataset, threshold: i64) -> Self {
        Self { dataset, threshold }
    }

    fn directory(&self) -> StopDirectory<'a> {
        StopDirectory::new(&self.dataset.stops)
    }

    pub fn windows(&self) -> AppResult<Vec<DutyWindow>> {
        generate_windows(&self.dataset.duties, &self.dataset.vehicles)
    }

    pub fn with_stop_names(&self, windows: Vec<DutyWindow>) -> Vec<DutyStops> {
        attach_stop_names(windows, &self.directory())
    }

    pub fn with_breaks(&self, duties: Vec<DutyStops>) -> AppResult<Vec<DutyReport>> {
        attach_breaks(
            duties,
            &self.dataset.vehicles,
            &self.directory(),
            self.threshold,
        )
    }

    /// All three stages in a row.
    pub fn full_report(&self) -> AppResult<Vec<DutyReport>> {
        let windows = self.windows()?;
        self.with_breaks(self.with_stop_names(windows))
    }
}

// ---------------------------
// Rows
// ---------------------------

fn times_row(w: &DutyWindow) -> DutyTimesRow {
    DutyTimesRow {
        duty_id: w.duty_id.to_string(),
        start_time: w.start_label().to_string(),
        end_time: w.end_label().to_string(),
    }
}

fn stops_row(d: &DutyStops) -> DutyStopsRow {
    DutyStopsRow::new(
        times_row(&d.window),
        d.first_stop.clone(),
        d.last_stop.clone(),
    )
}

pub fn times_rows(windows: &[DutyWindow]) -> Vec<DutyTimesRow> {
    windows.iter().map(times_row).collect()
}

pub fn stops_rows(duties: &[DutyStops]) -> Vec<DutyStopsRow> {
    duties.iter().map(stops_row).collect()
}

/// One row per break; a duty without breaks still gets one row, with the
/// break columns left empty.
pub fn break_rows(reports: &[DutyReport]) -> Vec<DutyBreakRow> {
    let mut rows = Vec::new();

    for r in reports {
        let base = stops_row(&r.duty);

        if r.breaks.is_empty() {
            rows.push(DutyBreakRow::without_break(base));
            continue;
        }

        for b in &r.breaks {
            rows.push(DutyBreakRow::with_break(base.clone(), b));
        }
    }

    rows
}
