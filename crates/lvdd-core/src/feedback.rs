//! Drag feedback: the valid/invalid indicator shown on the dragged item.
//!
//! The session writes every decision into a [`NotifyDragState`] sink.
//! [`DragItemStyle`] is the stock sink: it maps the decision onto one of
//! two configured (color, glyph) pairs and notifies listeners when the
//! resulting indicator actually changes.

use crate::color::{Color, colors};
use crate::glyph;
use crate::observe::{Observers, Subscription};
use serde::Deserialize;

/// Receiver of drag decisions. Holds only the most recent one.
pub trait NotifyDragState {
    fn state_changed(&mut self, is_valid: bool);
}

// ─── Config ───────────────────────────────────────────────────────────────

/// Colors and glyphs for the two indicator states.
///
/// Colors deserialize from a catalog name or a hex string; missing
/// fields take the defaults (green sort arrow / red blocked sign).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DragStyleConfig {
    pub valid_color: Color,
    pub valid_glyph: String,
    pub invalid_color: Color,
    pub invalid_glyph: String,
}

impl Default for DragStyleConfig {
    fn default() -> Self {
        Self {
            valid_color: colors::GREEN,
            valid_glyph: glyph::ARROW_SORT_FILLED.to_string(),
            invalid_color: colors::RED,
            invalid_glyph: glyph::PRESENCE_BLOCKED.to_string(),
        }
    }
}

impl DragStyleConfig {
    /// # Errors
    /// Returns the JSON error message, including unknown color names.
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("invalid drag style config: {e}"))
    }
}

// ─── Style ────────────────────────────────────────────────────────────────

/// What the dragged item currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DragIndicator {
    pub glyph: String,
    pub color: Color,
}

/// Configurable values of a [`DragItemStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleProperty {
    ValidColor,
    ValidGlyph,
    InvalidColor,
    InvalidGlyph,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StyleChange {
    /// The indicator glyph, color, or both changed.
    Indicator(DragIndicator),
    /// A configured value changed. The indicator picks it up on the next
    /// decision.
    Config(StyleProperty),
}

#[derive(Debug)]
pub struct DragItemStyle {
    config: DragStyleConfig,
    is_valid: bool,
    drag_glyph: String,
    drag_color: Color,
    observers: Observers<StyleChange>,
}

impl Default for DragItemStyle {
    fn default() -> Self {
        Self::with_config(DragStyleConfig::default())
    }
}

impl DragItemStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts in the valid state.
    pub fn with_config(config: DragStyleConfig) -> Self {
        Self {
            drag_glyph: config.valid_glyph.clone(),
            drag_color: config.valid_color,
            is_valid: true,
            config,
            observers: Observers::new(),
        }
    }

    /// Apply a drag decision. Notifies at most once, and only when the
    /// glyph text or the color value differs from what is shown.
    pub fn drag_state(&mut self, is_valid: bool) {
        self.is_valid = is_valid;
        let (glyph, color) = if is_valid {
            (&self.config.valid_glyph, self.config.valid_color)
        } else {
            (&self.config.invalid_glyph, self.config.invalid_color)
        };

        let mut changed = false;
        if self.drag_glyph != *glyph {
            self.drag_glyph = glyph.clone();
            changed = true;
        }
        if !self.drag_color.same_argb(&color) {
            self.drag_color = color;
            changed = true;
        }

        if changed {
            log::debug!(
                "drag indicator -> {} {}",
                if is_valid { "valid" } else { "invalid" },
                self.drag_color.to_hex()
            );
            self.observers
                .notify(&StyleChange::Indicator(self.indicator()));
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn drag_glyph(&self) -> &str {
        &self.drag_glyph
    }

    pub fn drag_color(&self) -> Color {
        self.drag_color
    }

    pub fn indicator(&self) -> DragIndicator {
        DragIndicator {
            glyph: self.drag_glyph.clone(),
            color: self.drag_color,
        }
    }

    pub fn config(&self) -> &DragStyleConfig {
        &self.config
    }

    pub fn set_valid_color(&mut self, color: Color) {
        if !self.config.valid_color.same_argb(&color) {
            self.config.valid_color = color;
            self.observers
                .notify(&StyleChange::Config(StyleProperty::ValidColor));
        }
    }

    pub fn set_valid_glyph(&mut self, glyph: &str) {
        if self.config.valid_glyph != glyph {
            self.config.valid_glyph = glyph.to_string();
            self.observers
                .notify(&StyleChange::Config(StyleProperty::ValidGlyph));
        }
    }

    pub fn set_invalid_color(&mut self, color: Color) {
        if !self.config.invalid_color.same_argb(&color) {
            self.config.invalid_color = color;
            self.observers
                .notify(&StyleChange::Config(StyleProperty::InvalidColor));
        }
    }

    pub fn set_invalid_glyph(&mut self, glyph: &str) {
        if self.config.invalid_glyph != glyph {
            self.config.invalid_glyph = glyph.to_string();
            self.observers
                .notify(&StyleChange::Config(StyleProperty::InvalidGlyph));
        }
    }

    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, callback: impl Fn(&StyleChange) + 'static) -> Subscription {
        self.observers.subscribe(callback)
    }
}

impl NotifyDragState for DragItemStyle {
    fn state_changed(&mut self, is_valid: bool) {
        self.drag_state(is_valid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn record(style: &DragItemStyle) -> (Rc<RefCell<Vec<StyleChange>>>, Subscription) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let l = Rc::clone(&log);
        let sub = style.subscribe(move |c| l.borrow_mut().push(c.clone()));
        (log, sub)
    }

    #[test]
    fn starts_valid_with_defaults() {
        let style = DragItemStyle::new();
        assert!(style.is_valid());
        assert_eq!(style.drag_glyph(), glyph::ARROW_SORT_FILLED);
        assert_eq!(style.drag_color().to_argb(), 0xFF008000);
    }

    #[test]
    fn repeated_state_notifies_once() {
        let mut style = DragItemStyle::new();
        style.drag_state(false);
        let (log, _sub) = record(&style);

        style.state_changed(true);
        style.state_changed(true);

        assert_eq!(
            *log.borrow(),
            vec![StyleChange::Indicator(DragIndicator {
                glyph: glyph::ARROW_SORT_FILLED.to_string(),
                color: colors::GREEN,
            })]
        );
    }

    #[test]
    fn equal_color_values_do_not_notify() {
        let config = DragStyleConfig {
            invalid_color: Color::from_argb(0xFF008000),
            invalid_glyph: glyph::ARROW_SORT_FILLED.to_string(),
            ..DragStyleConfig::default()
        };
        let mut style = DragItemStyle::with_config(config);
        let (log, _sub) = record(&style);

        style.drag_state(false);
        assert!(!style.is_valid());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn config_changes_apply_on_next_decision() {
        let mut style = DragItemStyle::new();
        let (log, _sub) = record(&style);

        style.set_invalid_glyph("x");
        style.set_invalid_glyph("x");
        assert_eq!(style.drag_glyph(), glyph::ARROW_SORT_FILLED);

        style.drag_state(false);
        assert_eq!(style.drag_glyph(), "x");
        assert_eq!(log.borrow().len(), 2);
        assert_eq!(
            log.borrow()[0],
            StyleChange::Config(StyleProperty::InvalidGlyph)
        );
    }

    #[test]
    fn config_from_json_accepts_names_and_hex() {
        let config = DragStyleConfig::from_json(
            r##"{ "valid_color": "Cerulean", "invalid_color": "#800000", "invalid_glyph": "!" }"##,
        )
        .expect("config should parse");
        assert_eq!(config.valid_color.to_argb(), 0xFF008FBE);
        assert_eq!(config.invalid_color.to_argb(), 0xFF800000);
        assert_eq!(config.invalid_glyph, "!");
        assert_eq!(config.valid_glyph, glyph::ARROW_SORT_FILLED);
    }

    #[test]
    fn config_from_json_reports_bad_colors() {
        let err = DragStyleConfig::from_json(r#"{ "valid_color": "Chartreusish" }"#).unwrap_err();
        assert!(err.contains("unknown color"), "{err}");
    }
}
