//! Per-duty operating window: earliest start and latest end over all the
//! vehicle events tagged with the duty.

use crate::errors::AppResult;
use crate::models::{Duty, EntityId, Vehicle, VehicleEvent};
use crate::utils::time::{format_day_time, parse_day_time};
use std::collections::HashMap;

pub const NO_START_TIME: &str = "No Start Time Found";
pub const NO_END_TIME: &str = "No End Time Found";

/// Stage 1 record: one per duty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutyWindow {
    pub duty_id: EntityId,
    pub start: Option<String>, // canonical "<day>.<HH>:<MM>"
    pub end: Option<String>,
    /// Origin of the event that opened the duty.
    pub first_stop_id: Option<EntityId>,
    /// Destination of the event that closed the duty.
    pub last_stop_id: Option<EntityId>,
}

impl DutyWindow {
    pub fn start_label(&self) -> &str {
        self.start.as_deref().unwrap_or(NO_START_TIME)
    }

    pub fn end_label(&self) -> &str {
        self.end.as_deref().unwrap_or(NO_END_TIME)
    }
}

/// Group events by duty id, keeping input order (vehicle order, then event
/// order inside each vehicle). Events without a duty are skipped.
pub fn index_by_duty(vehicles: &[Vehicle]) -> HashMap<&EntityId, Vec<&VehicleEvent>> {
    let mut index: HashMap<&EntityId, Vec<&VehicleEvent>> = HashMap::new();

    for ev in vehicles.iter().flat_map(|v| v.vehicle_events.iter()) {
        if let Some(duty_id) = &ev.duty_id {
            index.entry(duty_id).or_default().push(ev);
        }
    }

    index
}

/// Compute one window per duty, in duty order.
///
/// Duties without matching events still get a window, with both bounds
/// unset. A malformed time on a matching event aborts the whole run.
pub fn generate_windows(duties: &[Duty], vehicles: &[Vehicle]) -> AppResult<Vec<DutyWindow>> {
    let index = index_by_duty(vehicles);

    duties
        .iter()
        .map(|duty| {
            let events = index
                .get(&duty.duty_id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            window_for(&duty.duty_id, events)
        })
        .collect()
}

fn window_for(duty_id: &EntityId, events: &[&VehicleEvent]) -> AppResult<DutyWindow> {
    let mut earliest: Option<(i64, &VehicleEvent)> = None;
    let mut latest: Option<(i64, &VehicleEvent)> = None;

    for &ev in events {
        // strict comparisons: on ties the first event seen is kept
        if let Some(start) = &ev.start_time {
            let m = parse_day_time(start)?;
            if earliest.is_none_or(|(cur, _)| m < cur) {
                earliest = Some((m, ev));
            }
        }

        if let Some(end) = &ev.end_time {
            let m = parse_day_time(end)?;
            if latest.is_none_or(|(cur, _)| m > cur) {
                latest = Some((m, ev));
            }
        }
    }

    Ok(DutyWindow {
        duty_id: duty_id.clone(),
        start: earliest.map(|(m, _)| format_day_time(m)).transpose()?,
        end: latest.map(|(m, _)| format_day_time(m)).transpose()?,
        first_stop_id: earliest.and_then(|(_, ev)| ev.origin_stop_id.clone()),
        last_stop_id: latest.and_then(|(_, ev)| ev.destination_stop_id.clone()),
    })
}
