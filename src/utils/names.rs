//! Display-name shaping for result records.

/// Maximum display name length for video records.
pub const VIDEO_NAME_MAX: usize = 50;

/// Maximum display name length for channel records.
pub const CHANNEL_NAME_MAX: usize = 30;

/// Maximum display name length for trending-video records.
pub const TRENDING_NAME_MAX: usize = 78;

const ELLIPSIS: &str = "...";

/// Cut `name` so that it fits in `max` characters.
///
/// Names within the limit are returned unchanged. Longer names are cut to
/// `max - 3` characters, stripped of trailing whitespace and suffixed with
/// `...`. The result never exceeds `max`, so truncating twice is a no-op.
pub fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }

    let keep = max.saturating_sub(ELLIPSIS.len());
    let cut: String = name.chars().take(keep).collect();
    format!("{}{}", cut.trim_end(), ELLIPSIS)
}

/// Uppercase first, then truncate.
pub fn shape_name(name: &str, max: usize, uppercase: bool) -> String {
    if uppercase {
        truncate_name(&name.to_uppercase(), max)
    } else {
        truncate_name(name, max)
    }
}
