//! Named colors: the payload of the reorderable color list.

use crate::color::{Color, color_from_name, standard_color_names};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

/// A color paired with its display name.
#[derive(Debug, Clone)]
pub struct NamedColor {
    name: String,
    color: Color,
}

struct Registry {
    all: Vec<NamedColor>,
    by_name: HashMap<String, usize>,
    by_argb: HashMap<u32, usize>,
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    let mut all: Vec<NamedColor> = standard_color_names()
        .filter_map(|name| color_from_name(name).map(|color| NamedColor::new(name, color)))
        .collect();

    // Reverse lookup keeps the first name in declaration order.
    let mut by_argb = HashMap::new();
    for named in &all {
        by_argb
            .entry(named.color.to_argb())
            .or_insert_with(|| named.name.clone());
    }

    all.sort_by(NamedColorComparer::ByName.as_fn());

    let by_name: HashMap<String, usize> = all
        .iter()
        .enumerate()
        .map(|(i, c)| (c.name.clone(), i))
        .collect();
    let by_argb = by_argb
        .into_iter()
        .filter_map(|(argb, name)| by_name.get(&name).map(|i| (argb, *i)))
        .collect();

    Registry {
        all,
        by_name,
        by_argb,
    }
});

impl NamedColor {
    fn new(name: &str, color: Color) -> Self {
        Self {
            name: name.to_string(),
            color,
        }
    }

    /// Every standard named color, sorted by name (case-insensitive).
    pub fn all() -> &'static [NamedColor] {
        &REGISTRY.all
    }

    pub fn from_name(name: &str) -> Option<NamedColor> {
        REGISTRY.by_name.get(name).map(|i| REGISTRY.all[*i].clone())
    }

    /// The named color for `color`; when several names share the value,
    /// the first declared one.
    pub fn from_color(color: &Color) -> Option<NamedColor> {
        REGISTRY
            .by_argb
            .get(&color.to_argb())
            .map(|i| REGISTRY.all[*i].clone())
    }

    pub fn black() -> NamedColor {
        Self::new("Black", crate::color::colors::BLACK)
    }

    pub fn white() -> NamedColor {
        Self::new("White", crate::color::colors::WHITE)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn argb(&self) -> String {
        self.color.to_hex()
    }

    /// First character of the name; the reorder policy compares these.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

impl PartialEq for NamedColor {
    fn eq(&self, other: &Self) -> bool {
        self.color.same_argb(&other.color) && self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for NamedColor {}

impl PartialEq<Color> for NamedColor {
    fn eq(&self, other: &Color) -> bool {
        self.color.same_argb(other)
    }
}

impl Hash for NamedColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.to_ascii_lowercase().hash(state);
    }
}

impl std::fmt::Display for NamedColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

// ─── Comparer ────────────────────────────────────────────────────────────

/// Orderings over named colors. Missing values sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColorComparer {
    /// Case-insensitive name order.
    ByName,
    /// Packed ARGB value order.
    ByArgb,
}

impl NamedColorComparer {
    pub fn compare(self, x: Option<&NamedColor>, y: Option<&NamedColor>) -> Ordering {
        match (x, y) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => self.compare_present(x, y),
        }
    }

    fn compare_present(self, x: &NamedColor, y: &NamedColor) -> Ordering {
        match self {
            Self::ByName => x
                .name
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(y.name.chars().flat_map(char::to_lowercase)),
            Self::ByArgb => x.color.to_argb().cmp(&y.color.to_argb()),
        }
    }

    /// Adapter for `sort_by`.
    pub fn as_fn(self) -> impl Fn(&NamedColor, &NamedColor) -> Ordering {
        move |x, y| self.compare_present(x, y)
    }
}
