// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{Cell, DutyBreakRow, DutyStopsRow, DutyTimesRow, TableRow};

use crate::errors::AppError;
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Which column set to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Duty ID, Start Time, End Time
    Times = 1,
    /// + First Stop, Last Stop
    Stops = 2,
    /// + Break Start Time, Break Duration, Break Stop Name
    Breaks = 3,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Times, Step::Stops, Step::Breaks];

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Default output file name for this step (`step1.xlsx`, ...).
    pub fn file_name(self, format: ExportFormat) -> String {
        format!("step{}.{}", self.number(), format.as_str())
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::Times => "start and end times",
            Step::Stops => "start and end times with stop names",
            Step::Breaks => "full report with breaks",
        }
    }
}

impl TryFrom<u8> for Step {
    type Error = AppError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Step::Times),
            2 => Ok(Step::Stops),
            3 => Ok(Step::Breaks),
            other => Err(AppError::InvalidStep(other)),
        }
    }
}
