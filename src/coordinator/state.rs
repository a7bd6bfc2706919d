use serde::Serialize;

/// Ephemeral screen state owned by the coordinator. Never persisted; record
/// data itself lives in the store only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub selected_id: Option<i64>,
    /// True only while an add is in flight.
    pub is_loading: bool,
    /// Level-triggered: a later error overwrites an undisplayed one.
    pub error_message: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tapping a row: same id deselects, anything else selects.
    pub fn toggle_selection(&mut self, id: i64) {
        self.selected_id = if self.selected_id == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Clears the selection only when it points at `id`. Returns whether the
    /// state changed.
    pub fn drop_selection(&mut self, id: i64) -> bool {
        if self.selected_id == Some(id) {
            self.selected_id = None;
            true
        } else {
            false
        }
    }

    /// Only flags the in-flight add; an undisplayed error stays visible until
    /// explicitly cleared.
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
    }

    pub fn finish_loading(&mut self) {
        self.is_loading = false;
    }

    pub fn fail(&mut self, message: String) {
        self.is_loading = false;
        self.error_message = Some(message);
    }

    /// Returns whether the state changed.
    pub fn clear_error(&mut self) -> bool {
        self.error_message.take().is_some()
    }
}
