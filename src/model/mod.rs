//! Rule list data model.

mod defaults;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::selector::check_drawable;

pub use defaults::{default_rule_list, DEFAULT_LIST_NAME, DEFAULT_RULES};

/// Rule text that asks the generator to draw again.
///
/// Never surfaced as the final pick of a spin.
pub const REROLL_SENTINEL: &str = "Re-roll the generator.";

/// Stable identity of a rule list. Survives renames and reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleListId(Uuid);

impl RuleListId {
    /// Generate a fresh, never-before-used id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RuleListId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RuleListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered collection of rules.
///
/// Equality compares identity only: two lists with the same name and
/// rules are still different lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleList {
    pub id: RuleListId,
    pub name: String,
    pub rules: Vec<String>,
}

impl RuleList {
    /// Create a list with a freshly generated id.
    pub fn new(name: impl Into<String>, rules: Vec<String>) -> Self {
        Self {
            id: RuleListId::new(),
            name: name.into(),
            rules,
        }
    }

    /// True when a spin on this list can land on something.
    pub fn has_drawable_rule(&self) -> bool {
        check_drawable(&self.rules).is_ok()
    }
}

impl PartialEq for RuleList {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RuleList {}
