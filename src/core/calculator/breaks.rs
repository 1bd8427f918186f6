//! Break detection between chronologically adjacent events of a duty.

use crate::core::directory::StopDirectory;
use crate::errors::AppResult;
use crate::models::VehicleEvent;
use crate::utils::time::{format_day_time, parse_day_time};
use serde::Serialize;

/// Idle gaps strictly longer than this are breaks.
pub const DEFAULT_BREAK_THRESHOLD: i64 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Break {
    pub start: String,
    pub duration: i64,
    pub stop_name: String,
}

/// Two adjacent events that overlap in time (next start before previous end).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub after: String,
    pub minutes: i64, // always negative
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakScan {
    pub breaks: Vec<Break>,
    pub overlaps: Vec<Overlap>,
}

/// Sort the timed events of a duty by start and measure the gap between
/// each event's end and the next event's start.
///
/// Events missing either time are ignored. Ties on start keep input order.
/// Negative gaps never produce a break; they are reported as overlaps.
pub fn detect_breaks(
    events: &[&VehicleEvent],
    stops: &StopDirectory<'_>,
    threshold: i64,
) -> AppResult<BreakScan> {
    let mut timed = Vec::with_capacity(events.len());
    for &ev in events {
        if let (Some(start), Some(end)) = (&ev.start_time, &ev.end_time) {
            timed.push((parse_day_time(start)?, parse_day_time(end)?, ev));
        }
    }

    timed.sort_by_key(|&(start, _, _)| start);

    let mut scan = BreakScan::default();

    for pair in timed.windows(2) {
        let (_, end, ev) = pair[0];
        let (next_start, _, _) = pair[1];
        let gap = next_start - end;

        if gap > threshold {
            scan.breaks.push(Break {
                start: format_day_time(end)?,
                duration: gap,
                stop_name: stops.resolve(ev.destination_stop_id.as_ref()).to_string(),
            });
        } else if gap < 0 {
            scan.overlaps.push(Overlap {
                after: format_day_time(end)?,
                minutes: gap,
            });
        }
    }

    Ok(scan)
}
