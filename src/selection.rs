use std::collections::HashSet;

/// Tracks which entity ids are selected while a gallery view is in selection mode.
///
/// All operations are total and idempotent; the view layer can call them in any
/// order without error handling.
#[derive(Debug, Default, Clone)]
pub struct Selection {
    selected: HashSet<String>,
    selection_mode: bool,
}

impl Selection {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_selection_mode(&self) -> bool {
        self.selection_mode
    }

    pub fn enter_selection_mode(&mut self) {
        self.selection_mode = true;
    }

    /// Leaving selection mode never retains a partial selection.
    pub fn exit_selection_mode(&mut self) {
        self.selection_mode = false;
        self.selected.clear();
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Toggle-all: if the selection already equals `all_ids` (set equality, not
    /// length), clear it; otherwise replace it with the full set.
    pub fn select_all(&mut self, all_ids: &[String]) {
        let full: HashSet<String> = all_ids.iter().cloned().collect();
        if self.selected == full {
            self.selected.clear();
        } else {
            self.selected = full;
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Snapshot of the selected ids, for handing to a bulk mutation.
    pub fn ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }
}
