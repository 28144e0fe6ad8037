//! Task validation and effective-category resolution.
//!
//! A task may reference a category by id, carry only the legacy free-text
//! category name, or neither. [`resolve_effective_category`] is the single
//! place that decides what a task displays.

use crate::category::{FALLBACK_CATEGORY, NEUTRAL_COLOR};
use crate::error::CoreError;

/// Maximum length for a task description, in characters.
pub const MAX_TASK_TEXT_LEN: usize = 1000;

/// Trim and validate a task description. Returns the trimmed text.
pub fn normalize_task_text(text: &str) -> Result<String, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Task text must not be empty".to_string(),
        ));
    }
    let len = trimmed.chars().count();
    if len > MAX_TASK_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "Task text too long: {len} chars (max {MAX_TASK_TEXT_LEN})"
        )));
    }
    Ok(trimmed.to_string())
}

/// The category name and color a task is displayed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveCategory {
    pub name: String,
    pub color: String,
}

/// Decide the displayed category for a task.
///
/// Precedence:
/// 1. the category joined through `category_id` (`linked` is `(name, color)`)
/// 2. the legacy text column, shown with [`NEUTRAL_COLOR`]
/// 3. [`FALLBACK_CATEGORY`] with [`NEUTRAL_COLOR`]
///
/// Blank legacy text counts as absent.
pub fn resolve_effective_category(
    linked: Option<(&str, &str)>,
    legacy: Option<&str>,
) -> EffectiveCategory {
    if let Some((name, color)) = linked {
        return EffectiveCategory {
            name: name.to_string(),
            color: color.to_string(),
        };
    }

    let name = legacy
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(FALLBACK_CATEGORY);

    EffectiveCategory {
        name: name.to_string(),
        color: NEUTRAL_COLOR.to_string(),
    }
}

/// Pick the legacy category text stored alongside a new task.
///
/// An explicitly supplied name wins, then the name of the referenced
/// category, then [`FALLBACK_CATEGORY`].
pub fn legacy_category_text(supplied: Option<&str>, referenced: Option<&str>) -> String {
    supplied
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or(referenced)
        .unwrap_or(FALLBACK_CATEGORY)
        .to_string()
}
