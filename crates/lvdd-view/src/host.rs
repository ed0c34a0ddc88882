//! Headless list-view host.
//!
//! Stands in for the list control: it projects a source collection into
//! displayed rows, raises drag phase events, and performs the default
//! source move after an accepted drop when the handler leaves that to the
//! host. Rendering and gesture recognition stay outside.

use crate::presenter::{DragItemView, ItemTemplate};
use crate::session::{DragAction, DragContext, DragDecision, DragPhaseEvent, handle_drag_event};
use lvdd_core::{
    DragDropHandler, DragItem, DragItemStyle, EntityId, GroupKey, GroupResult, NamedColor,
    ObservableList, Player, Team,
};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::collections::HashSet;

// ─── Display sources ─────────────────────────────────────────────────────

/// A collection as the list view shows it.
pub trait DisplaySource {
    /// Rows in current display order.
    fn display_items(&self) -> Vec<DragItem>;

    /// Move the source element behind display row `from` to row `to`.
    fn move_source(&self, from: usize, to: usize) -> Result<(), String>;
}

/// Colors shown one per row, in collection order.
impl DisplaySource for ObservableList<NamedColor> {
    fn display_items(&self) -> Vec<DragItem> {
        self.with_items(|items| items.iter().cloned().map(DragItem::Color).collect())
    }

    fn move_source(&self, from: usize, to: usize) -> Result<(), String> {
        self.move_item(from, to)
    }
}

/// Players grouped under one header row per team.
///
/// Groups are ordered by team name; players keep collection order inside
/// their group. Players without a team are listed under `unassigned_label`
/// after all teams. A collapsed team shows its header row only; the
/// unassigned section is always expanded.
#[derive(Debug, Clone)]
pub struct TeamGrouping {
    pub players: ObservableList<Player>,
    pub unassigned_label: String,
    collapsed: HashSet<EntityId>,
}

impl TeamGrouping {
    pub fn new(players: ObservableList<Player>) -> Self {
        Self {
            players,
            unassigned_label: "Unassigned".to_string(),
            collapsed: HashSet::new(),
        }
    }

    pub fn is_expanded(&self, team: &Team) -> bool {
        !self.collapsed.contains(&team.id())
    }

    /// Returns whether the state changed.
    pub fn set_expanded(&mut self, team: &Team, expanded: bool) -> bool {
        if expanded {
            self.collapsed.remove(&team.id())
        } else {
            self.collapsed.insert(team.id())
        }
    }

    /// Flip a team's section. Returns the new state.
    pub fn toggle(&mut self, team: &Team) -> bool {
        let expanded = !self.is_expanded(team);
        self.set_expanded(team, expanded);
        expanded
    }

    /// Sections in display order.
    pub fn groups(&self) -> Vec<GroupResult> {
        let mut groups: Vec<GroupResult> = Vec::new();
        let mut unassigned = Vec::new();

        self.players.with_items(|players| {
            for player in players {
                let Some(team) = player.team() else {
                    unassigned.push(DragItem::Player(player.clone()));
                    continue;
                };
                let key = GroupKey::Team(team);
                match groups.iter_mut().find(|g| g.key == key) {
                    Some(group) => group.items.push(DragItem::Player(player.clone())),
                    None => groups.push(GroupResult::new(
                        key,
                        vec![DragItem::Player(player.clone())],
                    )),
                }
            }
        });

        groups.sort_by(|a, b| match (&a.key, &b.key) {
            (GroupKey::Team(a), GroupKey::Team(b)) => a.compare(b),
            _ => Ordering::Equal,
        });
        for group in &mut groups {
            if let GroupKey::Team(team) = &group.key {
                group.is_expanded = self.is_expanded(team);
            }
        }
        if !unassigned.is_empty() {
            groups.push(GroupResult::new(
                GroupKey::Label(self.unassigned_label.clone()),
                unassigned,
            ));
        }
        groups
    }
}

impl DisplaySource for TeamGrouping {
    fn display_items(&self) -> Vec<DragItem> {
        let mut rows = Vec::with_capacity(self.players.len() + 8);
        for group in self.groups() {
            let members = group.items.clone();
            let expanded = group.is_expanded;
            rows.push(DragItem::Group(group));
            if expanded {
                rows.extend(members);
            }
        }
        rows
    }

    fn move_source(&self, from: usize, to: usize) -> Result<(), String> {
        Err(format!(
            "grouped rows {from} -> {to} have no positional source; regroup instead"
        ))
    }
}

// ─── List view ───────────────────────────────────────────────────────────

/// What happened at one phase of a scripted gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseRecord {
    pub action: DragAction,
    pub new_index: usize,
    pub decision: DragDecision,
}

#[derive(Debug, Clone, Default)]
pub struct DragOutcome {
    pub phases: SmallVec<[PhaseRecord; 8]>,
}

impl DragOutcome {
    /// Whether the gesture got past `Start`.
    pub fn started(&self) -> bool {
        self.phases
            .first()
            .is_some_and(|p| p.action == DragAction::Start && !p.decision.cancel)
    }

    /// Whether the final drop was accepted.
    pub fn dropped(&self) -> bool {
        self.phases
            .last()
            .is_some_and(|p| p.action == DragAction::Drop && !p.decision.cancel)
    }

    /// Decisions for the `Dragging` phases, in order.
    pub fn hover_permits(&self) -> Vec<bool> {
        self.phases
            .iter()
            .filter(|p| p.action == DragAction::Dragging)
            .map(|p| p.decision.permit)
            .collect()
    }
}

/// A list control with drag-and-drop bound to one handler and one style.
pub struct ListView<S: DisplaySource> {
    source: S,
    handler: Box<dyn DragDropHandler>,
    style: DragItemStyle,
    item_template: Option<ItemTemplate>,
}

impl<S: DisplaySource> ListView<S> {
    pub fn new(source: S, handler: Box<dyn DragDropHandler>) -> Self {
        Self::with_style(source, handler, DragItemStyle::new())
    }

    pub fn with_style(source: S, handler: Box<dyn DragDropHandler>, style: DragItemStyle) -> Self {
        Self {
            source,
            handler,
            style,
            item_template: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn style(&self) -> &DragItemStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut DragItemStyle {
        &mut self.style
    }

    pub fn set_item_template(&mut self, template: Option<ItemTemplate>) {
        self.item_template = template;
    }

    pub fn display_items(&self) -> Vec<DragItem> {
        self.source.display_items()
    }

    /// A presenter for the dragged row, bound to this list's style and
    /// template.
    pub fn drag_item_view(&self) -> DragItemView {
        let mut view = DragItemView::new();
        view.attach(&self.style, self.item_template.clone());
        view
    }

    /// Deliver one phase event. On an accepted drop the host moves the
    /// source item itself when the handler asks it to.
    pub fn raise(&mut self, event: &mut DragPhaseEvent) -> DragDecision {
        let display = self.source.display_items();
        let mut ctx = DragContext::new(self.handler.as_mut(), &mut self.style);
        let decision = handle_drag_event(event, &display, &mut ctx);

        if event.action == DragAction::Drop
            && !decision.cancel
            && !event.at_origin()
            && self.handler.update_source()
        {
            match self.source.move_source(event.old_index, event.new_index) {
                Ok(()) => log::debug!("host moved row {} -> {}", event.old_index, event.new_index),
                Err(err) => log::warn!("host move skipped: {err}"),
            }
        }
        decision
    }

    /// Script a whole gesture: pick up row `from`, hover over each row in
    /// `path`, release over the last one (or the origin when `path` is
    /// empty). Stops after `Start` when the drag is refused.
    pub fn drag(&mut self, from: usize, path: &[usize]) -> DragOutcome {
        let mut outcome = DragOutcome::default();
        let Some(item) = self.display_items().get(from).cloned() else {
            log::warn!("no row {from} to drag");
            return outcome;
        };

        let mut start = DragPhaseEvent::start(item.clone(), from);
        let decision = self.raise(&mut start);
        outcome.phases.push(PhaseRecord {
            action: DragAction::Start,
            new_index: from,
            decision,
        });
        if start.cancel {
            return outcome;
        }

        // The host reports the pickup slot first.
        for &index in std::iter::once(&from).chain(path) {
            let mut hover = DragPhaseEvent::dragging(item.clone(), from, index);
            let decision = self.raise(&mut hover);
            outcome.phases.push(PhaseRecord {
                action: DragAction::Dragging,
                new_index: index,
                decision,
            });
        }

        let release = path.last().copied().unwrap_or(from);
        let mut released = DragPhaseEvent::drop(item, from, release);
        let decision = self.raise(&mut released);
        outcome.phases.push(PhaseRecord {
            action: DragAction::Drop,
            new_index: release,
            decision,
        });
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lvdd_core::{ColorDragDropHandler, PlayerDragDropHandler, Team};
    use pretty_assertions::assert_eq;

    fn colors(names: &[&str]) -> ObservableList<NamedColor> {
        ObservableList::from_vec(
            names
                .iter()
                .map(|n| NamedColor::from_name(n).unwrap())
                .collect(),
        )
    }

    fn names(list: &ObservableList<NamedColor>) -> Vec<String> {
        list.with_items(|items| items.iter().map(|c| c.name().to_string()).collect())
    }

    #[test]
    fn host_moves_when_handler_defers() {
        let list = colors(&["Red", "Green", "Blue", "Tan"]);
        let handler = ColorDragDropHandler::new(list.clone(), true);
        let mut view = ListView::new(list.clone(), Box::new(handler));

        let outcome = view.drag(0, &[1, 2]);
        assert!(outcome.started());
        assert!(outcome.dropped());
        assert_eq!(names(&list), vec!["Green", "Blue", "Red", "Tan"]);
    }

    #[test]
    fn only_one_side_moves() {
        let list = colors(&["Red", "Green", "Blue", "Tan"]);
        let handler = ColorDragDropHandler::new(list.clone(), false);
        let mut view = ListView::new(list.clone(), Box::new(handler));

        view.drag(3, &[0]);
        assert_eq!(names(&list), vec!["Tan", "Red", "Green", "Blue"]);
    }

    #[test]
    fn indicator_follows_the_latest_phase() {
        let list = colors(&["Red", "RosyBrown", "Blue"]);
        let handler = ColorDragDropHandler::new(list.clone(), false);
        let mut view = ListView::new(list.clone(), Box::new(handler));

        let outcome = view.drag(0, &[1]);
        assert_eq!(outcome.hover_permits(), vec![true, false]);
        assert!(!outcome.dropped());
        assert!(!view.style().is_valid());
        assert_eq!(names(&list), vec!["Red", "RosyBrown", "Blue"]);

        view.drag(0, &[2]);
        assert!(view.style().is_valid());
    }

    #[test]
    fn grouping_orders_teams_by_name() {
        let b = Team::new("Team B");
        let a = Team::new("Team A");
        let players = ObservableList::from_vec(vec![
            Player::with_team("p1", &b),
            Player::with_team("p2", &a),
            Player::new("p3"),
            Player::with_team("p4", &b),
        ]);
        let rows: Vec<String> = TeamGrouping::new(players)
            .display_items()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rows,
            vec![
                "Team A (1)",
                "p2",
                "Team B (2)",
                "p1",
                "p4",
                "Unassigned (1)",
                "p3"
            ]
        );
    }

    #[test]
    fn collapsed_team_shows_header_only() {
        let a = Team::new("Team A");
        let b = Team::new("Team B");
        let players = ObservableList::from_vec(vec![
            Player::with_team("p1", &a),
            Player::with_team("p2", &b),
            Player::with_team("p3", &a),
        ]);
        let mut grouping = TeamGrouping::new(players);

        assert!(grouping.set_expanded(&a, false));
        assert!(!grouping.set_expanded(&a, false));
        let rows: Vec<String> = grouping.display_items().iter().map(ToString::to_string).collect();
        assert_eq!(rows, vec!["Team A (2)", "Team B (1)", "p2"]);

        let headers = grouping.groups();
        assert_eq!(headers[0].expander_glyph(), lvdd_core::glyph::CHEVRON_DOWN_FILLED);
        assert_eq!(headers[1].expander_glyph(), lvdd_core::glyph::CHEVRON_UP_FILLED);

        assert!(grouping.toggle(&a));
        assert_eq!(grouping.display_items().len(), 5);
    }

    #[test]
    fn collapsing_through_the_view_shifts_drop_targets() {
        let a = Team::new("Team A");
        let b = Team::new("Team B");
        let moved = Player::with_team("p1", &b);
        let players = ObservableList::from_vec(vec![
            Player::with_team("p0", &a),
            moved.clone(),
        ]);
        let mut view = ListView::new(
            TeamGrouping::new(players),
            Box::new(PlayerDragDropHandler::new(false)),
        );
        view.source_mut().set_expanded(&a, false);

        // Rows: [Team A, Team B, p1]
        let outcome = view.drag(2, &[0]);
        assert!(outcome.dropped());
        assert_eq!(moved.team(), Some(a));
    }

    #[test]
    fn grouped_drop_reassigns_without_reordering() {
        let one = Team::new("Team 1");
        let two = Team::new("Team 2");
        let moved = Player::with_team("Ann", &one);
        let players = ObservableList::from_vec(vec![
            moved.clone(),
            Player::with_team("Bo", &two),
            Player::with_team("Cy", &one),
        ]);
        let before = players.to_vec();
        let mut view = ListView::new(
            TeamGrouping::new(players.clone()),
            Box::new(PlayerDragDropHandler::new(false)),
        );

        // Rows: [Team 1, Ann, Cy, Team 2, Bo]
        let outcome = view.drag(1, &[2, 3, 4]);
        assert!(outcome.dropped());
        assert_eq!(outcome.hover_permits(), vec![true, true, true, true]);
        assert_eq!(moved.team(), Some(two));
        assert_eq!(players.to_vec(), before);
    }

    #[test]
    fn refused_start_stops_the_gesture() {
        let team = Team::new("Team 1");
        let players = ObservableList::from_vec(vec![Player::with_team("Ann", &team)]);
        let mut view = ListView::new(
            TeamGrouping::new(players),
            Box::new(PlayerDragDropHandler::new(false)),
        );

        // Row 0 is the group header.
        let outcome = view.drag(0, &[1]);
        assert!(!outcome.started());
        assert_eq!(outcome.phases.len(), 1);
        assert!(!view.style().is_valid());
    }
}
