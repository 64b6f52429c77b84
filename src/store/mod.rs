//! In-memory rule lists plus the selected list, persisted on every change.
//!
//! Three independent keys are written:
//!
//! - `ruleLists`: JSON array of `{ id, name, rules }`
//! - `selectedRuleListIndex`: JSON integer
//! - `darkMode`: JSON boolean
//!
//! A failed write to one key leaves the others untouched.

mod error;
mod selection;

use serde::Serialize;

use crate::model::{default_rule_list, RuleList};
use crate::naming::generate_duplicate_name;
use crate::storage::KeyValueStore;

pub use error::{EditError, PersistError};

pub const RULE_LISTS_KEY: &str = "ruleLists";
pub const SELECTED_INDEX_KEY: &str = "selectedRuleListIndex";
pub const DARK_MODE_KEY: &str = "darkMode";

/// Owner and single writer of the persisted rule lists.
///
/// Invariants: the collection is never empty and the selected index is
/// always within it.
#[derive(Debug)]
pub struct RuleListStore<S> {
    storage: S,
    lists: Vec<RuleList>,
    selected: usize,
    dark_mode: bool,
}

impl<S: KeyValueStore> RuleListStore<S> {
    /// Load persisted state, falling back to the default list.
    ///
    /// Missing, unreadable, corrupt or empty list data all yield the
    /// built-in default list with selection 0.
    pub fn load(storage: S) -> Self {
        let dark_mode = read_dark_mode(&storage);

        let Some(lists) = read_rule_lists(&storage) else {
            return Self {
                storage,
                lists: vec![default_rule_list()],
                selected: 0,
                dark_mode,
            };
        };

        let selected = read_selected_index(&storage, lists.len());
        tracing::info!(lists = lists.len(), selected, "loaded rule lists");
        Self {
            storage,
            lists,
            selected,
            dark_mode,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// All lists, in display order.
    pub fn rule_lists(&self) -> &[RuleList] {
        &self.lists
    }

    pub fn list(&self, index: usize) -> Option<&RuleList> {
        self.lists.get(index)
    }

    /// Display names in order, as fed to the duplicate-name generator.
    pub fn names(&self) -> Vec<&str> {
        self.lists.iter().map(|list| list.name.as_str()).collect()
    }

    pub fn selected_index(&self) -> usize {
        selection::clamp(self.selected, self.lists.len())
    }

    /// The list spins draw from.
    pub fn current_list(&self) -> &RuleList {
        &self.lists[self.selected_index()]
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
        if let Err(e) = self.write_json(DARK_MODE_KEY, &enabled) {
            tracing::warn!(error = %e, "failed to save dark mode preference");
        }
    }

    /// Write the full list collection.
    pub fn save(&self) -> Result<(), PersistError> {
        self.write_json(RULE_LISTS_KEY, &self.lists)?;
        tracing::info!(lists = self.lists.len(), "saved rule lists");
        Ok(())
    }

    /// Write the selected index on its own key.
    pub fn save_selected_index(&self) -> Result<(), PersistError> {
        self.write_json(SELECTED_INDEX_KEY, &self.selected_index())
    }

    /// Make the list at `index` the active one.
    pub fn select_list(&mut self, index: usize) -> Result<(), EditError> {
        self.check_list(index)?;
        self.selected = index;
        self.flush_selection();
        Ok(())
    }

    /// Append an empty list named `name` (trimmed).
    pub fn create_list(&mut self, name: &str) -> Result<&RuleList, EditError> {
        let name = non_blank(name).ok_or(EditError::EmptyName)?;
        self.lists.push(RuleList::new(name, Vec::new()));
        self.flush_lists();
        Ok(&self.lists[self.lists.len() - 1])
    }

    pub fn rename_list(&mut self, index: usize, name: &str) -> Result<(), EditError> {
        self.check_list(index)?;
        let name = non_blank(name).ok_or(EditError::EmptyName)?;
        self.lists[index].name = name.to_string();
        self.flush_lists();
        Ok(())
    }

    /// Remove the list at `index`. The last remaining list cannot go.
    pub fn delete_list(&mut self, index: usize) -> Result<(), EditError> {
        self.check_list(index)?;
        if self.lists.len() == 1 {
            tracing::debug!("refusing to delete the last rule list");
            return Err(EditError::LastList);
        }

        let before = self.selected_index();
        self.lists.remove(index);
        self.selected = selection::clamp(
            selection::after_delete(before, index),
            self.lists.len(),
        );

        self.flush_lists();
        if self.selected != before || index == before {
            self.flush_selection();
        }
        Ok(())
    }

    /// Insert a copy of the list at `index` right after it, under a fresh id
    /// and a name no other list uses.
    pub fn duplicate_list(&mut self, index: usize) -> Result<&RuleList, EditError> {
        self.check_list(index)?;

        let source = &self.lists[index];
        let name = generate_duplicate_name(&source.name, &self.names());
        let copy = RuleList::new(name, source.rules.clone());

        let before = self.selected_index();
        self.lists.insert(index + 1, copy);
        self.selected = selection::after_duplicate(before, index);

        self.flush_lists();
        if self.selected != before {
            self.flush_selection();
        }
        Ok(&self.lists[index + 1])
    }

    /// Move the list at `from` to before position `to` (`to <= len`).
    /// The selection keeps pointing at the same list.
    pub fn move_list(&mut self, from: usize, to: usize) -> Result<(), EditError> {
        self.check_list(from)?;
        if to > self.lists.len() {
            return Err(EditError::ListOutOfRange {
                index: to,
                len: self.lists.len(),
            });
        }

        let before = self.selected_index();
        if !selection::move_item(&mut self.lists, from, to) {
            return Ok(());
        }
        self.selected = selection::clamp(
            selection::after_move(before, from, to),
            self.lists.len(),
        );

        self.flush_lists();
        if self.selected != before {
            self.flush_selection();
        }
        Ok(())
    }

    /// Append `text` (trimmed) to the rules of list `list`.
    pub fn add_rule(&mut self, list: usize, text: &str) -> Result<(), EditError> {
        self.check_list(list)?;
        let text = non_blank(text).ok_or(EditError::EmptyRule)?;
        self.lists[list].rules.push(text.to_string());
        self.flush_lists();
        Ok(())
    }

    /// Replace rule `rule` of list `list` with `text` (trimmed).
    pub fn edit_rule(&mut self, list: usize, rule: usize, text: &str) -> Result<(), EditError> {
        self.check_rule(list, rule)?;
        let text = non_blank(text).ok_or(EditError::EmptyRule)?;
        self.lists[list].rules[rule] = text.to_string();
        self.flush_lists();
        Ok(())
    }

    /// Remove every rule whose position is in `offsets`.
    ///
    /// Duplicate offsets are ignored. If any offset is out of range nothing
    /// is removed.
    pub fn delete_rules(&mut self, list: usize, offsets: &[usize]) -> Result<(), EditError> {
        self.check_list(list)?;
        if offsets.is_empty() {
            return Ok(());
        }

        let len = self.lists[list].rules.len();
        if let Some(&index) = offsets.iter().find(|&&offset| offset >= len) {
            return Err(EditError::RuleOutOfRange { index, len });
        }

        let mut doomed = offsets.to_vec();
        doomed.sort_unstable_by(|a, b| b.cmp(a));
        doomed.dedup();

        let rules = &mut self.lists[list].rules;
        for offset in doomed {
            rules.remove(offset);
        }
        self.flush_lists();
        Ok(())
    }

    /// Move rule `from` of list `list` to before position `to`.
    pub fn move_rule(&mut self, list: usize, from: usize, to: usize) -> Result<(), EditError> {
        self.check_rule(list, from)?;
        let len = self.lists[list].rules.len();
        if to > len {
            return Err(EditError::RuleOutOfRange { index: to, len });
        }

        if selection::move_item(&mut self.lists[list].rules, from, to) {
            self.flush_lists();
        }
        Ok(())
    }

    fn check_list(&self, index: usize) -> Result<(), EditError> {
        if index < self.lists.len() {
            Ok(())
        } else {
            Err(EditError::ListOutOfRange {
                index,
                len: self.lists.len(),
            })
        }
    }

    fn check_rule(&self, list: usize, rule: usize) -> Result<(), EditError> {
        self.check_list(list)?;
        let len = self.lists[list].rules.len();
        if rule < len {
            Ok(())
        } else {
            Err(EditError::RuleOutOfRange { index: rule, len })
        }
    }

    fn flush_lists(&self) {
        if let Err(e) = self.save() {
            tracing::warn!(error = %e, "failed to save rule lists");
        }
    }

    fn flush_selection(&self) {
        if let Err(e) = self.save_selected_index() {
            tracing::warn!(error = %e, "failed to save selected rule list");
        }
    }

    fn write_json<T: Serialize + ?Sized>(
        &self,
        key: &'static str,
        value: &T,
    ) -> Result<(), PersistError> {
        let bytes =
            serde_json::to_vec(value).map_err(|source| PersistError::Encode { key, source })?;
        self.storage.set(key, &bytes)?;
        Ok(())
    }
}

fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn read_rule_lists<S: KeyValueStore>(storage: &S) -> Option<Vec<RuleList>> {
    let bytes = match storage.get(RULE_LISTS_KEY) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            tracing::info!("no saved rule lists, using the default list");
            return None;
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to read rule lists, using the default list");
            return None;
        }
    };

    match serde_json::from_slice::<Vec<RuleList>>(&bytes) {
        Ok(lists) if lists.is_empty() => {
            tracing::info!("saved rule lists are empty, using the default list");
            None
        }
        Ok(lists) => Some(lists),
        Err(e) => {
            tracing::warn!(error = %e, "saved rule lists are corrupt, using the default list");
            None
        }
    }
}

fn read_selected_index<S: KeyValueStore>(storage: &S, len: usize) -> usize {
    let raw = match storage.get(SELECTED_INDEX_KEY) {
        Ok(Some(bytes)) => serde_json::from_slice::<i64>(&bytes).ok(),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read selected rule list");
            None
        }
    };
    raw.and_then(|index| usize::try_from(index).ok())
        .map(|index| selection::clamp(index, len))
        .unwrap_or(0)
}

fn read_dark_mode<S: KeyValueStore>(storage: &S) -> bool {
    match storage.get(DARK_MODE_KEY) {
        Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or(true),
        _ => true,
    }
}
