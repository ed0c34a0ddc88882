//! ListView DragDrop walkthrough.
//!
//! Replays a few gestures against the seeded view model and a small
//! palette, printing what the lists look like afterwards:
//!
//! ```text
//! lvdd-demo [style.json]
//! ```
//!
//! The optional JSON file holds a drag style config, e.g.
//! `{ "valid_color": "Cerulean", "invalid_glyph": "x" }`.

use lvdd_core::{
    ColorDragDropHandler, DragItem, DragItemStyle, DragStyleConfig, NamedColor, ObservableList,
};
use lvdd_view::{DragOutcome, ListView, MainViewModel, TeamGrouping};
use std::rc::Rc;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1);
            }
        },
        None => DragStyleConfig::default(),
    };

    let mut vm = MainViewModel::new();

    let Some(color_handler) = vm.take_color_handler() else {
        log::error!("color handler already taken");
        std::process::exit(1);
    };
    let mut catalog_view = ListView::with_style(
        vm.colors().clone(),
        color_handler,
        DragItemStyle::with_config(config.clone()),
    );

    println!("== Catalog: neighbours sharing an initial refuse the drop ==");
    println!("before: {}", color_names(&head(vm.colors(), 5)));
    let outcome = catalog_view.drag(0, &[1]);
    report(&outcome, catalog_view.style());
    println!("after:  {}", color_names(&head(vm.colors(), 5)));

    let palette = ObservableList::from_vec(
        ["Red", "Green", "Blue", "Tan", "Orange"]
            .iter()
            .filter_map(|name| NamedColor::from_name(name))
            .collect(),
    );
    let mut palette_view = ListView::with_style(
        palette.clone(),
        Box::new(ColorDragDropHandler::new(palette.clone(), true)),
        DragItemStyle::with_config(config.clone()),
    );
    palette_view.set_item_template(Some(Rc::new(|item: &DragItem| {
        item.as_color().map(|c| format!("{} {}", c.argb(), c.name()))
    })));
    let mut presenter = palette_view.drag_item_view();
    presenter.set_item(palette.get(0).map(DragItem::Color));

    println!("\n== Reorder: first color to fourth slot ==");
    println!("before: {}", color_names(&palette.to_vec()));
    println!("dragging: {}", presenter.content().unwrap_or("-"));
    let outcome = palette_view.drag(0, &[1, 2, 3]);
    report(&outcome, palette_view.style());
    println!("after:  {}", color_names(&palette.to_vec()));

    println!("\n== Back to origin ==");
    let outcome = palette_view.drag(2, &[]);
    report(&outcome, palette_view.style());
    println!("after:  {}", color_names(&palette.to_vec()));

    let Some(player_handler) = vm.take_player_handler() else {
        log::error!("player handler already taken");
        std::process::exit(1);
    };
    let mut roster_view = ListView::with_style(
        TeamGrouping::new(vm.players().clone()),
        player_handler,
        DragItemStyle::with_config(config),
    );

    println!("\n== Reassign: a Team 1 player onto a Team 2 player ==");
    let rows = roster_view.display_items();
    let Some((from, onto)) = first_cross_team_pair(&rows) else {
        log::error!("seed roster has no Team 1 / Team 2 players");
        std::process::exit(1);
    };
    let outcome = roster_view.drag(from, &[onto]);
    report(&outcome, roster_view.style());

    if let Some(team) = vm.teams().get(2) {
        roster_view.source_mut().set_expanded(team, false);
    }
    for row in roster_view.display_items().iter().take(16) {
        match row {
            DragItem::Group(group) => {
                println!("{} {row}", group.expander_glyph().escape_unicode())
            }
            _ => println!("    {row}"),
        }
    }

    let captain = vm.players().get(0);
    vm.set_selected_player(captain);
    vm.set_new_player_name("New Kid");
    if vm.add_player() {
        println!("\nadded player #{}", vm.players().len());
    }
}

fn load_config(path: &str) -> Result<DragStyleConfig, String> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?;
    DragStyleConfig::from_json(&text)
}

fn head(list: &ObservableList<NamedColor>, n: usize) -> Vec<NamedColor> {
    list.with_items(|items| items.iter().take(n).cloned().collect())
}

fn color_names(colors: &[NamedColor]) -> String {
    colors
        .iter()
        .map(NamedColor::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Row of the first "Team 1" player and of the first "Team 2" player.
fn first_cross_team_pair(rows: &[DragItem]) -> Option<(usize, usize)> {
    let in_team = |name: &str| {
        rows.iter().position(|row| {
            row.as_player()
                .and_then(|p| p.team())
                .is_some_and(|t| t.name() == name)
        })
    };
    Some((in_team("Team 1")?, in_team("Team 2")?))
}

fn report(outcome: &DragOutcome, style: &DragItemStyle) {
    println!(
        "started={} dropped={} hovers={:?} indicator={} {}",
        outcome.started(),
        outcome.dropped(),
        outcome.hover_permits(),
        style.drag_glyph().escape_unicode(),
        style.drag_color().to_hex()
    );
}
