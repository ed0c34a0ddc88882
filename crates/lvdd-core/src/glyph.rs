//! Icon-font glyphs (Fluent UI System Icons, filled set) used by the
//! drag indicator and group headers.

pub const ARROW_SORT_FILLED: &str = "\u{f150}";
pub const PRESENCE_BLOCKED: &str = "\u{f5b6}";
pub const CHEVRON_UP_FILLED: &str = "\u{f2b6}";
pub const CHEVRON_DOWN_FILLED: &str = "\u{f2a4}";

/// Expand/collapse glyph for a group header.
pub fn expander_glyph(is_expanded: bool) -> &'static str {
    if is_expanded {
        CHEVRON_UP_FILLED
    } else {
        CHEVRON_DOWN_FILLED
    }
}
