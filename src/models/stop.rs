use super::ids::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    pub stop_id: EntityId,
    pub stop_name: String,
}

impl Stop {
    pub fn new<I: Into<EntityId>>(stop_id: I, stop_name: &str) -> Self {
        Self {
            stop_id: stop_id.into(),
            stop_name: stop_name.to_string(),
        }
    }
}
