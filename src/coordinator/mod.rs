pub mod controller;
pub mod state;

pub use controller::SightingsCoordinator;
pub use state::UiState;
