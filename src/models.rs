//! Todo Models
//!
//! Data structures for the todo list and its drafts.

use serde::{Deserialize, Serialize};

/// A single task in the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub description: String,
}

/// Uncommitted title/description pair, not yet written to the list.
///
/// Always fully initialized; `Default` is two empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

/// Why a create attempt was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftRejected {
    /// The draft title was empty or whitespace-only
    BlankTitle,
}
