pub mod sighting;

pub use sighting::{Sighting, SightingKind};
