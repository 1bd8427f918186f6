// src/export/model.rs

use crate::core::calculator::breaks::Break;
use serde::Serialize;

/// A flat record that any tabular sink can write.
pub trait TableRow: Serialize {
    /// Column names, in output order.
    fn headers() -> &'static [&'static str];

    /// One cell per header.
    fn cells(&self) -> Vec<Cell>;
}

/// Typed cell value. Sinks decide how to write each kind; nothing is
/// guessed from the text, so ids like `"007"` stay text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(i64),
    /// Absent value (break columns of a duty without breaks).
    Blank,
}

impl Cell {
    pub fn text(s: &str) -> Self {
        Cell::Text(s.to_string())
    }

    /// Display form, `None` for a blank cell.
    pub fn display(&self) -> Option<String> {
        match self {
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) => Some(n.to_string()),
            Cell::Blank => None,
        }
    }
}

/// Step 1: duty window only.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DutyTimesRow {
    #[serde(rename = "Duty ID")]
    pub duty_id: String,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
}

/// Step 2: window + first/last stop.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DutyStopsRow {
    #[serde(rename = "Duty ID")]
    pub duty_id: String,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "First Stop")]
    pub first_stop: String,
    #[serde(rename = "Last Stop")]
    pub last_stop: String,
}

/// Step 3: one row per break.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DutyBreakRow {
    #[serde(rename = "Duty ID")]
    pub duty_id: String,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "First Stop")]
    pub first_stop: String,
    #[serde(rename = "Last Stop")]
    pub last_stop: String,
    #[serde(rename = "Break Start Time")]
    pub break_start_time: Option<String>,
    #[serde(rename = "Break Duration")]
    pub break_duration: Option<i64>,
    #[serde(rename = "Break Stop Name")]
    pub break_stop_name: Option<String>,
}

impl DutyStopsRow {
    pub fn new(times: DutyTimesRow, first_stop: String, last_stop: String) -> Self {
        Self {
            duty_id: times.duty_id,
            start_time: times.start_time,
            end_time: times.end_time,
            first_stop,
            last_stop,
        }
    }
}

impl DutyBreakRow {
    pub fn with_break(base: DutyStopsRow, b: &Break) -> Self {
        Self {
            break_start_time: Some(b.start.clone()),
            break_duration: Some(b.duration),
            break_stop_name: Some(b.stop_name.clone()),
            ..Self::without_break(base)
        }
    }

    /// Placeholder row for a duty with no breaks.
    pub fn without_break(base: DutyStopsRow) -> Self {
        Self {
            duty_id: base.duty_id,
            start_time: base.start_time,
            end_time: base.end_time,
            first_stop: base.first_stop,
            last_stop: base.last_stop,
            break_start_time: None,
            break_duration: None,
            break_stop_name: None,
        }
    }

    pub fn has_break(&self) -> bool {
        self.break_start_time.is_some()
    }
}

const TIMES_HEADERS: [&str; 3] = ["Duty ID", "Start Time", "End Time"];
const STOPS_HEADERS: [&str; 5] = [
    "Duty ID",
    "Start Time",
    "End Time",
    "First Stop",
    "Last Stop",
];
const BREAK_HEADERS: [&str; 8] = [
    "Duty ID",
    "Start Time",
    "End Time",
    "First Stop",
    "Last Stop",
    "Break Start Time",
    "Break Duration",
    "Break Stop Name",
];

impl TableRow for DutyTimesRow {
    fn headers() -> &'static [&'static str] {
        &TIMES_HEADERS
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.duty_id),
            Cell::text(&self.start_time),
            Cell::text(&self.end_time),
        ]
    }
}

impl TableRow for DutyStopsRow {
    fn headers() -> &'static [&'static str] {
        &STOPS_HEADERS
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.duty_id),
            Cell::text(&self.start_time),
            Cell::text(&self.end_time),
            Cell::text(&self.first_stop),
            Cell::text(&self.last_stop),
        ]
    }
}

impl TableRow for DutyBreakRow {
    fn headers() -> &'static [&'static str] {
        &BREAK_HEADERS
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.duty_id),
            Cell::text(&self.start_time),
            Cell::text(&self.end_time),
            Cell::text(&self.first_stop),
            Cell::text(&self.last_stop),
            self.break_start_time.as_deref().map_or(Cell::Blank, Cell::text),
            self.break_duration.map_or(Cell::Blank, Cell::Number),
            self.break_stop_name.as_deref().map_or(Cell::Blank, Cell::text),
        ]
    }
}

/// Rows as display strings (absent cells rendered with `placeholder`).
pub(crate) fn rows_to_table<R: TableRow>(rows: &[R], placeholder: &str) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| {
            r.cells()
                .into_iter()
                .map(|c| c.display().unwrap_or_else(|| placeholder.to_string()))
                .collect()
        })
        .collect()
}
