use super::ids::EntityId;
use serde::{Deserialize, Serialize};

/// A work assignment. Its events are found by `duty_id` match, not owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duty {
    pub duty_id: EntityId,
}

impl Duty {
    pub fn new<I: Into<EntityId>>(duty_id: I) -> Self {
        Self {
            duty_id: duty_id.into(),
        }
    }
}
