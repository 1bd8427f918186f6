//! Stop name lookup.

use crate::models::{EntityId, Stop};

pub const UNKNOWN_STOP: &str = "Unknown Stop";

/// Read-only view over the stop list of a dataset.
///
/// Lookups scan the list in input order, so with duplicated ids the first
/// stop wins.
#[derive(Debug, Clone, Copy)]
pub struct StopDirectory<'a> {
    stops: &'a [Stop],
}

impl<'a> StopDirectory<'a> {
    pub fn new(stops: &'a [Stop]) -> Self {
        Self { stops }
    }

    /// Name of the stop, or `"Unknown Stop"` when the id is missing, blank
    /// or not in the list.
    pub fn resolve(&self, stop_id: Option<&EntityId>) -> &'a str {
        let Some(id) = stop_id.filter(|id| !id.is_empty()) else {
            return UNKNOWN_STOP;
        };

        self.stops
            .iter()
            .find(|s| &s.stop_id == id)
            .map(|s| s.stop_name.as_str())
            .unwrap_or(UNKNOWN_STOP)
    }
}
