//! Main view model: the color list, the team roster, and their handlers.

use crate::command::Command;
use lvdd_core::{
    ColorDragDropHandler, DragDropHandler, NamedColor, ObservableList, Observers,
    PlayerDragDropHandler, Player, Subscription, Team,
};
use std::cell::RefCell;
use std::rc::Rc;

const TEAM_NAMES: [&str; 6] = ["Team 1", "Team 2", "Team 3", "Team 4", "Team 5", "Team 6"];

const PLAYER_NAMES: [&str; 30] = [
    "John Doe",
    "Jane Doe",
    "Sam Smith",
    "Tom Brown",
    "Lucy White",
    "Bob Green",
    "Alice Black",
    "Charlie Orange",
    "Eve Red",
    "Frank Purple",
    "Grace Yellow",
    "Henry Blue",
    "Ivy Pink",
    "Jack Gray",
    "Kate Silver",
    "Larry Gold",
    "Molly Copper",
    "Ned Nickel",
    "Olive Brass",
    "Pete Zinc",
    "Quinn Iron",
    "Rose Lead",
    "Stan Mercury",
    "Tina Platinum",
    "Uma Titanium",
    "Vince Uranium",
    "Wendy Tungsten",
    "Xavier Silver",
    "Yvonne Gold",
    "Zack Copper",
];

/// Seed roster: player `x` plays for team `x % 6`.
pub fn seed_roster() -> (Vec<Team>, Vec<Player>) {
    let teams: Vec<Team> = TEAM_NAMES.iter().map(|name| Team::new(name)).collect();
    let players = PLAYER_NAMES
        .iter()
        .enumerate()
        .map(|(x, name)| Player::with_team(name, &teams[x % teams.len()]))
        .collect();
    (teams, players)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewModelProperty {
    SelectedPlayer,
    NewPlayerName,
    CanAddPlayer,
}

/// State the add-player action reads when it runs.
#[derive(Default)]
struct AddPlayerState {
    selected: Option<Player>,
    new_name: String,
}

pub struct MainViewModel {
    colors: ObservableList<NamedColor>,
    players: ObservableList<Player>,
    teams: Vec<Team>,
    color_handler: Option<Box<dyn DragDropHandler>>,
    player_handler: Option<Box<dyn DragDropHandler>>,
    add_player: Rc<RefCell<AddPlayerState>>,
    add_player_command: Command,
    observers: Observers<ViewModelProperty>,
}

impl Default for MainViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MainViewModel {
    /// The color list reorders through the host; the roster never
    /// reorders, drops only change a player's team.
    pub fn new() -> Self {
        Self::with_update_source(true)
    }

    /// `color_update_source` picks who moves a dropped color.
    pub fn with_update_source(color_update_source: bool) -> Self {
        let colors = ObservableList::from_vec(NamedColor::all().to_vec());
        let (teams, players) = seed_roster();
        let players = ObservableList::from_vec(players);

        let add_player = Rc::new(RefCell::new(AddPlayerState::default()));
        let action = {
            let state = Rc::clone(&add_player);
            let players = players.clone();
            move |_: &Command| {
                let state = state.borrow();
                let Some(selected) = &state.selected else {
                    return;
                };
                if state.new_name.is_empty() {
                    return;
                }
                let player = Player::new(&state.new_name);
                player.set_team(selected.team());
                log::debug!("added {player} to {:?}", selected.team().map(|t| t.name()));
                players.push(player);
            }
        };

        Self {
            color_handler: Some(Box::new(ColorDragDropHandler::new(
                colors.clone(),
                color_update_source,
            ))),
            player_handler: Some(Box::new(PlayerDragDropHandler::new(false))),
            colors,
            players,
            teams,
            add_player,
            add_player_command: Command::new(
                action,
                false,
                "+",
                "Add a new player to a player's team.",
            ),
            observers: Observers::new(),
        }
    }

    pub fn colors(&self) -> &ObservableList<NamedColor> {
        &self.colors
    }

    pub fn players(&self) -> &ObservableList<Player> {
        &self.players
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Hand the color handler to the list view that will drive it.
    pub fn take_color_handler(&mut self) -> Option<Box<dyn DragDropHandler>> {
        self.color_handler.take()
    }

    /// Hand the roster handler to the list view that will drive it.
    pub fn take_player_handler(&mut self) -> Option<Box<dyn DragDropHandler>> {
        self.player_handler.take()
    }

    pub fn selected_player(&self) -> Option<Player> {
        self.add_player.borrow().selected.clone()
    }

    pub fn set_selected_player(&mut self, player: Option<Player>) {
        let changed = {
            let mut state = self.add_player.borrow_mut();
            if state.selected == player {
                false
            } else {
                state.selected = player;
                true
            }
        };
        if changed {
            self.observers.notify(&ViewModelProperty::SelectedPlayer);
            self.observers.notify(&ViewModelProperty::CanAddPlayer);
        }
    }

    pub fn can_add_player(&self) -> bool {
        self.add_player.borrow().selected.is_some()
    }

    pub fn new_player_name(&self) -> String {
        self.add_player.borrow().new_name.clone()
    }

    /// Also enables the add command exactly when the name is non-empty.
    pub fn set_new_player_name(&mut self, name: &str) {
        let changed = {
            let mut state = self.add_player.borrow_mut();
            if state.new_name == name {
                false
            } else {
                state.new_name = name.to_string();
                true
            }
        };
        if changed {
            self.observers.notify(&ViewModelProperty::NewPlayerName);
            self.add_player_command.set_enabled(!name.is_empty());
        }
    }

    pub fn add_player_command(&self) -> &Command {
        &self.add_player_command
    }

    /// Run the add command; on success the name box is cleared.
    pub fn add_player(&mut self) -> bool {
        let before = self.players.len();
        self.add_player_command.execute(None);
        let added = self.players.len() > before;
        if added {
            self.set_new_player_name("");
        }
        added
    }

    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, callback: impl Fn(&ViewModelProperty) + 'static) -> Subscription {
        self.observers.subscribe(callback)
    }
}
