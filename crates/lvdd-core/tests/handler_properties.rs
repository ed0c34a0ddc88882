//! Integration tests: handler contract properties (lvdd-core).
//!
//! Table-driven checks over every index pair of small fixtures, for both
//! the color reorder handler and the team reassignment handler.

use lvdd_core::*;
use pretty_assertions::assert_eq;

fn palette(names: &[&str]) -> ObservableList<NamedColor> {
    ObservableList::from_vec(
        names
            .iter()
            .map(|n| NamedColor::from_name(n).unwrap())
            .collect(),
    )
}

fn color_items(list: &ObservableList<NamedColor>) -> Vec<DragItem> {
    list.to_vec().into_iter().map(DragItem::Color).collect()
}

fn names(list: &ObservableList<NamedColor>) -> Vec<String> {
    list.with_items(|items| items.iter().map(|c| c.name().to_string()).collect())
}

/// Red and RosyBrown share an initial, so do Blue and Beige.
const MIXED: [&str; 6] = ["Red", "Blue", "RosyBrown", "Green", "Beige", "Tan"];

// ─── Wrong payload types ─────────────────────────────────────────────────

#[test]
fn wrong_types_are_never_draggable() {
    let team = Team::new("Team 1");
    let player = Player::with_team("Ann", &team);
    let color = NamedColor::black();

    let colors = ColorDragDropHandler::new(palette(&MIXED), false);
    let players = PlayerDragDropHandler::default();

    let header = DragItem::from(GroupResult::new(
        GroupKey::Team(team.clone()),
        vec![player.clone().into()],
    ));

    for item in [
        DragItem::from(player.clone()),
        DragItem::from(team.clone()),
        header.clone(),
    ] {
        assert!(!colors.can_drag(&item, 0), "color handler dragged {item}");
    }
    for item in [DragItem::from(color), DragItem::from(team), header] {
        assert!(!players.can_drag(&item, 0), "player handler dragged {item}");
    }
}

#[test]
fn wrong_types_are_never_dropped() {
    let team = Team::new("Team 1");
    let player = DragItem::from(Player::with_team("Ann", &team));
    let color = DragItem::from(NamedColor::white());

    let mut colors = ColorDragDropHandler::new(palette(&MIXED), false);
    let mut players = PlayerDragDropHandler::default();

    assert!(!colors.can_drop(&player, 0, Some(&color), 1));
    assert!(!colors.drop(&player, 0, Some(&color), 1));
    assert!(!players.can_drop(&color, 0, Some(&player), 1));
    assert!(!players.drop(&color, 0, Some(&player), 1));
}

// ─── Color reorder ───────────────────────────────────────────────────────

#[test]
fn origin_is_always_accepted() {
    let list = palette(&MIXED);
    let items = color_items(&list);
    let handler = ColorDragDropHandler::new(list, false);
    for (i, item) in items.iter().enumerate() {
        assert!(handler.can_drop(item, i, Some(item), i), "origin {i}");
    }
}

#[test]
fn policy_follows_initials_for_every_pair() {
    let list = palette(&MIXED);
    let items = color_items(&list);
    let handler = ColorDragDropHandler::new(list, false);

    for (i, item) in items.iter().enumerate() {
        for (j, target) in items.iter().enumerate() {
            if i == j {
                continue;
            }
            let a = item.as_color().unwrap().initial();
            let b = target.as_color().unwrap().initial();
            assert_eq!(
                handler.can_drop(item, i, Some(target), j),
                a != b,
                "{item} onto {target}"
            );
        }
    }
}

#[test]
fn handler_move_is_remove_then_insert() {
    let original = ["Red", "Green", "Blue", "Tan", "Orange"];
    for i in 0..original.len() {
        for j in 0..original.len() {
            if i == j {
                continue;
            }
            let list = palette(&original);
            let items = color_items(&list);
            let mut handler = ColorDragDropHandler::new(list.clone(), false);

            assert!(handler.drop(&items[i], i, Some(&items[j]), j));

            let mut expected: Vec<String> = original.iter().map(|s| s.to_string()).collect();
            let moved = expected.remove(i);
            expected.insert(j, moved);
            assert_eq!(names(&list), expected, "{i} -> {j}");
        }
    }
}

#[test]
fn deferring_handler_never_touches_the_list() {
    let original = ["Red", "Green", "Blue", "Tan", "Orange"];
    let list = palette(&original);
    let items = color_items(&list);
    let mut handler = ColorDragDropHandler::new(list.clone(), true);

    for i in 0..items.len() {
        for j in 0..items.len() {
            assert!(handler.drop(&items[i], i, Some(&items[j]), j));
        }
    }
    assert_eq!(names(&list), original);
}

#[test]
fn rejected_drop_leaves_order() {
    let list = palette(&MIXED);
    let items = color_items(&list);
    let mut handler = ColorDragDropHandler::new(list.clone(), false);

    assert!(!handler.drop(&items[0], 0, Some(&items[2]), 2));
    assert_eq!(names(&list), MIXED);
}

// ─── Team reassignment ───────────────────────────────────────────────────

#[test]
fn every_target_shape_resolves_to_the_same_team() {
    let one = Team::new("Team 1");
    let two = Team::new("Team 2");
    let sibling = Player::with_team("Bo", &two);
    let header = GroupResult::new(GroupKey::Team(two.clone()), vec![sibling.clone().into()]);

    let shapes = [
        DragItem::from(two.clone()),
        DragItem::from(sibling),
        DragItem::from(header),
    ];

    for target in &shapes {
        let ann = Player::with_team("Ann", &one);
        let players = ObservableList::from_vec(vec![ann.clone()]);
        let before = players.to_vec();
        let mut handler = PlayerDragDropHandler::default();
        let item = DragItem::from(ann.clone());

        assert!(handler.can_drop(&item, 0, Some(target), 3), "{target}");
        assert!(handler.drop(&item, 0, Some(target), 3), "{target}");
        assert_eq!(ann.team(), Some(two.clone()));
        assert_eq!(players.to_vec(), before);
    }
}

#[test]
fn unresolvable_targets_are_rejected() {
    let one = Team::new("Team 1");
    let ann = Player::with_team("Ann", &one);
    let item = DragItem::from(ann.clone());
    let mut handler = PlayerDragDropHandler::default();

    let unassigned = GroupResult::new(GroupKey::Label("Unassigned".into()), vec![]);
    let targets = [
        Some(DragItem::from(Player::new("Loner"))),
        Some(DragItem::from(unassigned)),
        Some(DragItem::from(NamedColor::black())),
        None,
    ];
    for target in &targets {
        assert!(!handler.can_drop(&item, 0, target.as_ref(), 1));
        assert!(!handler.drop(&item, 0, target.as_ref(), 1));
    }
    assert_eq!(ann.team(), Some(one));
}

#[test]
fn predicates_can_run_twice() {
    let two = Team::new("Team 2");
    let ann = DragItem::from(Player::new("Ann"));
    let target = DragItem::from(two.clone());
    let handler = PlayerDragDropHandler::default();

    let first = handler.can_drop(&ann, 0, Some(&target), 1);
    let second = handler.can_drop(&ann, 0, Some(&target), 1);
    assert_eq!(first, second);
    assert_eq!(ann.as_player().unwrap().team(), None);
}
