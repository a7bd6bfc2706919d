use std::sync::Arc;

use log::warn;
use tokio::sync::{watch, Mutex};

use crate::generator::{RandomSightingSource, SightingSource};
use crate::models::Sighting;
use crate::store::SightingStore;

use super::UiState;

/// Mediator between user intents and the store. The store stays the single
/// source of truth for records; the coordinator only owns the ephemeral
/// [`UiState`] and publishes it over a watch channel.
///
/// Every failure is absorbed here and surfaced as `UiState::error_message`;
/// nothing propagates to the presentation layer as a returned error.
#[derive(Clone)]
pub struct SightingsCoordinator {
    store: Arc<SightingStore>,
    ui: Arc<watch::Sender<UiState>>,
    source: Arc<Mutex<Box<dyn SightingSource>>>,
}

impl SightingsCoordinator {
    /// Coordinator over a freshly seeded store and an entropy-seeded source.
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(SightingStore::new()),
            Box::new(RandomSightingSource::new()),
        )
    }

    pub fn with_parts(store: Arc<SightingStore>, source: Box<dyn SightingSource>) -> Self {
        let (ui, _) = watch::channel(UiState::new());
        Self {
            store,
            ui: Arc::new(ui),
            source: Arc::new(Mutex::new(source)),
        }
    }

    /// Generates a sighting and adds it to the store. Loading is flagged for
    /// the duration; a source failure becomes an error message instead of a
    /// panic. Async to keep the presentation layer's render loop free, though
    /// no blocking I/O happens here.
    pub async fn add_random(&self) {
        self.ui.send_modify(UiState::begin_loading);

        let outcome = self.source.lock().await.next_sighting();
        match outcome {
            Ok(sighting) => {
                self.store.add(sighting);
                self.ui.send_modify(UiState::finish_loading);
            }
            Err(err) => {
                warn!("add sighting failed: {err}");
                self.ui
                    .send_modify(|ui| ui.fail(format!("Failed to add sighting: {err}")));
            }
        }
    }

    /// Removes the sighting and clears the selection when it pointed at the
    /// removed id. Removing an absent id is a quiet no-op.
    pub fn remove(&self, id: i64) {
        self.store.remove(id);
        self.ui.send_if_modified(|ui| ui.drop_selection(id));
    }

    /// Toggles the selection: tapping the selected row deselects it. No store
    /// interaction.
    pub fn select(&self, id: i64) {
        self.ui.send_modify(|ui| ui.toggle_selection(id));
    }

    /// Explicit error dismissal; the timed auto-clear lives in the
    /// presentation layer.
    pub fn clear_error(&self) {
        self.ui.send_if_modified(UiState::clear_error);
    }

    /// Live record list, re-delivered on every change.
    pub fn sightings(&self) -> watch::Receiver<Vec<Sighting>> {
        self.store.subscribe()
    }

    /// Live screen state.
    pub fn ui_state(&self) -> watch::Receiver<UiState> {
        self.ui.subscribe()
    }

    pub fn store(&self) -> &SightingStore {
        &self.store
    }
}

impl Default for SightingsCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
