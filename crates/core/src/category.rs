//! Category constants and input validation.
//!
//! Holds the default category set seeded at store initialization, the
//! fallback category used when a task carries no usable category, and the
//! name/color checks applied before a category reaches the store.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Defaults
   -------------------------------------------------------------------------- */

/// Name shown for tasks that reference no category and carry no legacy text.
pub const FALLBACK_CATEGORY: &str = "General";

/// Neutral display color for unresolved categories. Also `General`'s color.
pub const NEUTRAL_COLOR: &str = "#95a5a6";

/// Categories seeded on every startup (insert-or-ignore), in display order.
pub const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    (FALLBACK_CATEGORY, NEUTRAL_COLOR),
    ("Work", "#3498db"),
    ("Personal", "#9b59b6"),
    ("Shopping", "#2ecc71"),
    ("Health", "#e74c3c"),
    ("Gaming", "#7c6cf5"),
];

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length for a category name, in characters.
pub const MAX_CATEGORY_NAME_LEN: usize = 100;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Trim and validate a category name. Returns the trimmed name.
pub fn normalize_category_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Category name must not be empty".to_string(),
        ));
    }
    let len = trimmed.chars().count();
    if len > MAX_CATEGORY_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Category name too long: {len} chars (max {MAX_CATEGORY_NAME_LEN})"
        )));
    }
    Ok(trimmed.to_string())
}

/// Resolve the color to store for a new category.
///
/// A missing or blank color falls back to [`NEUTRAL_COLOR`]. Anything else
/// must be a `#rgb` or `#rrggbb` hex triplet; it is stored lowercased.
pub fn normalize_color(color: Option<&str>) -> Result<String, CoreError> {
    let Some(raw) = color.map(str::trim).filter(|c| !c.is_empty()) else {
        return Ok(NEUTRAL_COLOR.to_string());
    };

    if is_hex_color(raw) {
        Ok(raw.to_ascii_lowercase())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid color '{raw}'. Expected #rgb or #rrggbb"
        )))
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(normalize_category_name("  Errands ").unwrap(), "Errands");
    }

    #[test]
    fn blank_name_rejected() {
        assert_matches!(normalize_category_name("   "), Err(CoreError::Validation(_)));
        assert_matches!(normalize_category_name(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn overlong_name_rejected() {
        let name = "x".repeat(MAX_CATEGORY_NAME_LEN + 1);
        assert_matches!(normalize_category_name(&name), Err(CoreError::Validation(_)));
    }

    #[test]
    fn name_case_is_preserved() {
        assert_eq!(normalize_category_name("work").unwrap(), "work");
    }

    #[test]
    fn missing_color_uses_neutral() {
        assert_eq!(normalize_color(None).unwrap(), NEUTRAL_COLOR);
        assert_eq!(normalize_color(Some("  ")).unwrap(), NEUTRAL_COLOR);
    }

    #[test]
    fn hex_colors_accepted_and_lowercased() {
        assert_eq!(normalize_color(Some("#3498DB")).unwrap(), "#3498db");
        assert_eq!(normalize_color(Some("#abc")).unwrap(), "#abc");
    }

    #[test]
    fn malformed_colors_rejected() {
        for bad in ["3498db", "#3498d", "#zzzzzz", "red", "#12345678"] {
            assert_matches!(
                normalize_color(Some(bad)),
                Err(CoreError::Validation(_)),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn defaults_have_unique_names_and_valid_colors() {
        let mut names: Vec<_> = DEFAULT_CATEGORIES.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DEFAULT_CATEGORIES.len());

        for (_, color) in DEFAULT_CATEGORIES {
            assert!(is_hex_color(color), "{color} is not a hex color");
        }
    }
}
