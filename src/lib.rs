//! Rule list management and random rule drawing for the YGO Shuffle
//! rule generator.
//!
//! The presentation layer owns rendering and animation. This crate owns the
//! data it renders: the persisted rule lists, the selected list, duplicate
//! naming, the random draw and the spin state machine.

pub mod config;
pub mod logging;
pub mod model;
pub mod naming;
pub mod selector;
pub mod storage;
pub mod store;
pub mod ui;

pub use model::{RuleList, RuleListId, REROLL_SENTINEL};
pub use naming::generate_duplicate_name;
pub use selector::{build_reel, pick_rule, Draw, ReelGeometry, SelectError};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::{EditError, PersistError, RuleListStore};
