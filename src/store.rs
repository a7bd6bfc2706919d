use log::{debug, info};
use tokio::sync::watch;

use crate::generator::seed_sightings;
use crate::models::Sighting;

/// Owner of the authoritative sighting list, newest-first. Subscribers get the
/// current list immediately on subscribe and a wakeup on every change.
///
/// Mutations run inside the watch channel's modify closures, so the notify
/// step and the list update are a single exclusive section and observers never
/// see a torn list.
pub struct SightingStore {
    sightings: watch::Sender<Vec<Sighting>>,
}

impl SightingStore {
    /// Store populated with the fixed seed data.
    pub fn new() -> Self {
        Self::with_sightings(seed_sightings())
    }

    pub fn with_sightings(initial: Vec<Sighting>) -> Self {
        let (sightings, _) = watch::channel(initial);
        Self { sightings }
    }

    /// Inserts at the front of the list and notifies subscribers. Always
    /// succeeds; id uniqueness is the generator's concern.
    pub fn add(&self, sighting: Sighting) {
        info!(
            "adding sighting {} ({}, {} knots)",
            sighting.id,
            sighting.kind.display_name(),
            sighting.speed
        );
        self.sightings.send_modify(|list| list.insert(0, sighting));
    }

    /// Removes the sighting with the given id. Silent no-op when absent; no
    /// notification fires in that case.
    pub fn remove(&self, id: i64) {
        let removed = self.sightings.send_if_modified(|list| {
            let before = list.len();
            list.retain(|s| s.id != id);
            list.len() != before
        });
        if removed {
            info!("removed sighting {id}");
        } else {
            debug!("remove: no sighting with id {id}");
        }
    }

    pub fn get_by_id(&self, id: i64) -> Option<Sighting> {
        self.sightings.borrow().iter().find(|s| s.id == id).cloned()
    }

    pub fn count(&self) -> usize {
        self.sightings.borrow().len()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Sighting>> {
        self.sightings.subscribe()
    }
}

impl Default for SightingStore {
    fn default() -> Self {
        Self::new()
    }
}
