//! Team reassignment handler for the player list.
//!
//! Dropping a player never reorders anything. It moves the player to the
//! team the drop target stands for:
//!
//! | Target | Team |
//! |--------|------|
//! | a team | that team |
//! | a player | that player's current team |
//! | a group header keyed by a team | the key |
//! | anything else | none, drop rejected |

use crate::handler::{DragDropHandler, is_origin};
use crate::item::{DragItem, GroupKey};
use crate::roster::{Player, Team};

pub struct PlayerDragDropHandler {
    update_source: bool,
}

impl PlayerDragDropHandler {
    pub fn new(update_source: bool) -> Self {
        Self { update_source }
    }

    /// The team a drop onto `target` would assign.
    pub fn resolve_team(target: Option<&DragItem>) -> Option<Team> {
        match target? {
            DragItem::Team(team) => Some(team.clone()),
            DragItem::Player(player) => player.team(),
            DragItem::Group(group) => match &group.key {
                GroupKey::Team(team) => Some(team.clone()),
                GroupKey::Label(_) => None,
            },
            DragItem::Color(_) => None,
        }
    }

    fn dragged_player(item: &DragItem) -> Option<&Player> {
        item.as_player()
    }
}

impl Default for PlayerDragDropHandler {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DragDropHandler for PlayerDragDropHandler {
    fn update_source(&self) -> bool {
        self.update_source
    }

    fn can_drag(&self, item: &DragItem, _item_index: usize) -> bool {
        Self::dragged_player(item).is_some()
    }

    fn can_drop(
        &self,
        item: &DragItem,
        item_index: usize,
        target: Option<&DragItem>,
        target_index: usize,
    ) -> bool {
        Self::dragged_player(item).is_some()
            && (is_origin(item_index, target_index) || Self::resolve_team(target).is_some())
    }

    fn drop(
        &mut self,
        item: &DragItem,
        item_index: usize,
        target: Option<&DragItem>,
        target_index: usize,
    ) -> bool {
        let Some(player) = Self::dragged_player(item) else {
            return false;
        };
        if is_origin(item_index, target_index) {
            return true;
        }
        let Some(team) = Self::resolve_team(target) else {
            log::trace!("no team under {target_index} for {player}");
            return false;
        };
        if player.set_team(Some(team.clone())) {
            log::debug!("{player} moved to {team}");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::GroupResult;

    #[test]
    fn only_players_can_be_dragged() {
        let handler = PlayerDragDropHandler::default();
        let team = Team::new("Team 1");
        assert!(handler.can_drag(&Player::with_team("Ann", &team).into(), 0));
        assert!(!handler.can_drag(&team.into(), 0));
    }

    #[test]
    fn every_target_shape_resolves_the_same_team() {
        let home = Team::new("Team 1");
        let away = Team::new("Team 2");
        let mate = Player::with_team("Mate", &away);
        let targets = [
            DragItem::from(away.clone()),
            DragItem::from(mate),
            DragItem::from(GroupResult::new(GroupKey::Team(away.clone()), vec![])),
        ];

        for target in &targets {
            let mut handler = PlayerDragDropHandler::default();
            let player = Player::with_team("Ann", &home);
            let item = DragItem::from(player.clone());
            assert!(handler.can_drop(&item, 0, Some(target), 3), "{target}");
            assert!(handler.drop(&item, 0, Some(target), 3), "{target}");
            assert_eq!(player.team(), Some(away.clone()));
        }
    }

    #[test]
    fn unresolvable_targets_are_rejected() {
        let mut handler = PlayerDragDropHandler::default();
        let home = Team::new("Team 1");
        let player = Player::with_team("Ann", &home);
        let item = DragItem::from(player.clone());
        let free_agent = DragItem::from(Player::new("Free"));
        let label = DragItem::from(GroupResult::new(GroupKey::Label("Bench".into()), vec![]));
        let color = DragItem::from(crate::named_color::NamedColor::black());

        for target in [Some(&free_agent), Some(&label), Some(&color), None] {
            assert!(!handler.can_drop(&item, 0, target, 1));
            assert!(!handler.drop(&item, 0, target, 1));
        }
        assert_eq!(player.team(), Some(home));
    }

    #[test]
    fn origin_drop_is_accepted_without_change() {
        let mut handler = PlayerDragDropHandler::default();
        let player = Player::new("Solo");
        let item = DragItem::from(player.clone());
        assert!(handler.can_drop(&item, 2, None, 2));
        assert!(handler.drop(&item, 2, None, 2));
        assert_eq!(player.team(), None);
    }
}
