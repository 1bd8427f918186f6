//! Time-domain computation pipeline: duty windows, stop names, breaks.

pub mod calculator;
pub mod directory;
pub mod report;

pub use calculator::breaks::{Break, BreakScan, Overlap, detect_breaks};
pub use calculator::windows::{DutyWindow, NO_END_TIME, NO_START_TIME, generate_windows};
pub use directory::{StopDirectory, UNKNOWN_STOP};
pub use report::{DutyReport, DutyStops, ReportPipeline};
