pub mod dataset;
pub mod duty;
pub mod ids;
pub mod stop;
pub mod vehicle;

pub use dataset::Dataset;
pub use duty::Duty;
pub use ids::EntityId;
pub use stop::Stop;
pub use vehicle::{Vehicle, VehicleEvent};
