//! Target-list parsing
//!
//! One delimited string in, an ordered list of non-blank target names out.

/// Separator between target names in the raw setting value
pub const TARGET_DELIMITER: char = '|';

/// Resolve the raw setting value into the ordered target list
///
/// Splits on [`TARGET_DELIMITER`] and discards segments that are empty or
/// whitespace-only. Kept segments are NOT trimmed: `" web "` stays a distinct
/// target name from `"web"`, and silently trimming would change which queues
/// resolve. Duplicates are kept verbatim and cause duplicate delivery.
///
/// An absent or empty value yields an empty list; that is not an error, it
/// just makes every later dispatch a no-op.
pub fn resolve_targets(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(TARGET_DELIMITER)
        .filter(|segment| !segment.trim().is_empty())
        .map(str::to_owned)
        .collect()
}
