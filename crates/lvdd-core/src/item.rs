//! Drag payloads.
//!
//! Everything a list can display, and therefore everything that can be
//! dragged or dropped onto, is one closed [`DragItem`] variant. Handlers
//! match on the variants they manage and treat the rest as "not
//! applicable".

use crate::glyph;
use crate::named_color::NamedColor;
use crate::roster::{Player, Team};
use std::fmt;

/// Key of a grouped-view section.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupKey {
    Team(Team),
    /// Section whose key is not a roster entity (e.g. an "Unassigned" bucket).
    Label(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Team(team) => write!(f, "{team}"),
            GroupKey::Label(label) => f.write_str(label),
        }
    }
}

/// Header row of a grouped list: the section key plus the items under it.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupResult {
    pub key: GroupKey,
    pub items: Vec<DragItem>,
    pub is_expanded: bool,
}

impl GroupResult {
    pub fn new(key: GroupKey, items: Vec<DragItem>) -> Self {
        Self {
            key,
            items,
            is_expanded: true,
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Chevron shown on the header row.
    pub fn expander_glyph(&self) -> &'static str {
        glyph::expander_glyph(self.is_expanded)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragItem {
    Color(NamedColor),
    Player(Player),
    Team(Team),
    Group(GroupResult),
}

impl DragItem {
    pub fn kind(&self) -> &'static str {
        match self {
            DragItem::Color(_) => "color",
            DragItem::Player(_) => "player",
            DragItem::Team(_) => "team",
            DragItem::Group(_) => "group",
        }
    }

    pub fn as_color(&self) -> Option<&NamedColor> {
        match self {
            DragItem::Color(color) => Some(color),
            _ => None,
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            DragItem::Player(player) => Some(player),
            _ => None,
        }
    }
}

impl From<NamedColor> for DragItem {
    fn from(color: NamedColor) -> Self {
        DragItem::Color(color)
    }
}

impl From<Player> for DragItem {
    fn from(player: Player) -> Self {
        DragItem::Player(player)
    }
}

impl From<Team> for DragItem {
    fn from(team: Team) -> Self {
        DragItem::Team(team)
    }
}

impl From<GroupResult> for DragItem {
    fn from(group: GroupResult) -> Self {
        DragItem::Group(group)
    }
}

impl fmt::Display for DragItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragItem::Color(color) => write!(f, "{color}"),
            DragItem::Player(player) => write!(f, "{player}"),
            DragItem::Team(team) => write!(f, "{team}"),
            DragItem::Group(group) => write!(f, "{} ({})", group.key, group.count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_chevron_follows_expansion() {
        let mut group = GroupResult::new(GroupKey::Label("Unassigned".into()), vec![]);
        assert_eq!(group.expander_glyph(), glyph::CHEVRON_UP_FILLED);
        group.is_expanded = false;
        assert_eq!(group.expander_glyph(), glyph::CHEVRON_DOWN_FILLED);
    }
}
