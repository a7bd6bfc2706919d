mod coordinator;
mod generator;
mod models;
mod store;

pub use coordinator::{SightingsCoordinator, UiState};
pub use generator::{
    random_sighting, seed_sightings, RandomSightingSource, SightingSource, MAX_SPEED, MIN_SPEED,
};
pub use models::{Sighting, SightingKind};
pub use store::SightingStore;
