//! Column domain model.
//!
//! # Responsibility
//! - Define the board column record and its typed partial update.
//! - Own hex color validation used by snapshot import checks.
//!
//! # Invariants
//! - `id` is stable and never reused for another column.
//! - Column display order is the order of the owning list; there is no
//!   separate rank field.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a column.
///
/// Kept as a `String` alias so boards imported from other tools keep their
/// original id scheme; freshly created columns use UUID v4 text.
pub type ColumnId = String;

/// Color applied when a column is created without one.
pub const DEFAULT_COLUMN_COLOR: &str = "#6b7280";

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color regex"));

/// Returns whether `value` is a `#rrggbb` hex color.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_RE.is_match(value)
}

/// A named, colored, ordered bucket holding zero or more tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Stable id referenced by `Task::column_id`.
    pub id: ColumnId,
    pub title: String,
    /// `#rrggbb` hex color used by the rendering layer.
    pub color: String,
}

impl Column {
    /// Creates a column with a generated stable id.
    ///
    /// Falls back to [`DEFAULT_COLUMN_COLOR`] when `color` is omitted.
    pub fn new(title: impl Into<String>, color: Option<&str>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, color)
    }

    /// Creates a column with a caller-provided stable id.
    ///
    /// Used by seed/import paths where identity already exists externally.
    pub fn with_id(id: impl Into<ColumnId>, title: impl Into<String>, color: Option<&str>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.unwrap_or(DEFAULT_COLUMN_COLOR).to_string(),
        }
    }

    /// Merges the set fields of `patch` into this column.
    pub fn apply(&mut self, patch: ColumnPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

/// Typed partial update for [`Column`].
///
/// Unset fields leave the current value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnPatch {
    pub title: Option<String>,
    pub color: Option<String>,
}
