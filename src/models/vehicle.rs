use super::ids::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default)]
    pub vehicle_id: Option<EntityId>,
    #[serde(default)]
    pub vehicle_events: Vec<VehicleEvent>,
}

/// A single scheduled activity of a vehicle.
///
/// Every field is optional in the source data: depot pulls, standbys and
/// attendances regularly come without a duty or without one of the times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleEvent {
    #[serde(default)]
    pub duty_id: Option<EntityId>,
    #[serde(default)]
    pub vehicle_event_type: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>, // "<day>.<HH>:<MM>"
    #[serde(default)]
    pub end_time: Option<String>, // "<day>.<HH>:<MM>"
    #[serde(default)]
    pub origin_stop_id: Option<EntityId>,
    #[serde(default)]
    pub destination_stop_id: Option<EntityId>,
}

impl VehicleEvent {
    /// Event for `duty_id` between two times (fixtures, tests).
    pub fn for_duty<I: Into<EntityId>>(duty_id: I, start: &str, end: &str) -> Self {
        Self {
            duty_id: Some(duty_id.into()),
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            ..Default::default()
        }
    }

    pub fn with_stops(mut self, origin: Option<&str>, destination: Option<&str>) -> Self {
        self.origin_stop_id = origin.map(EntityId::from);
        self.destination_stop_id = destination.map(EntityId::from);
        self
    }
}

impl Vehicle {
    pub fn new(vehicle_events: Vec<VehicleEvent>) -> Self {
        Self {
            vehicle_id: None,
            vehicle_events,
        }
    }
}
