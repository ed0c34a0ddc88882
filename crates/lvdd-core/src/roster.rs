//! Roster entities: teams and the players assigned to them.
//!
//! Both are cheap-to-clone shared handles. A clone refers to the same
//! entity, so a player's team can be reassigned through whichever handle
//! the list, the handler or the view holds.

use crate::id::EntityId;
use crate::observe::{Observers, Subscription};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Observable properties of roster entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterProperty {
    Name,
    Team,
}

/// State shared by teams and players.
struct RosterEntry {
    id: EntityId,
    name: RefCell<String>,
    observers: Observers<RosterProperty>,
}

impl RosterEntry {
    fn new(prefix: &str, name: &str) -> Self {
        Self {
            id: EntityId::with_prefix(prefix),
            name: RefCell::new(name.to_string()),
            observers: Observers::new(),
        }
    }

    fn name(&self) -> String {
        self.name.borrow().clone()
    }

    fn set_name(&self, name: &str) -> bool {
        if *self.name.borrow() == name {
            return false;
        }
        self.name.replace(name.to_string());
        self.observers.notify(&RosterProperty::Name);
        true
    }

    /// Ordinal comparison by name.
    fn compare(&self, other: &RosterEntry) -> Ordering {
        self.name.borrow().as_str().cmp(other.name.borrow().as_str())
    }
}

// ─── Team ────────────────────────────────────────────────────────────────

/// A group that players belong to. Equality is identity.
#[derive(Clone)]
pub struct Team(Rc<RosterEntry>);

impl Team {
    pub fn new(name: &str) -> Self {
        Team(Rc::new(RosterEntry::new("team", name)))
    }

    pub fn id(&self) -> EntityId {
        self.0.id
    }

    pub fn name(&self) -> String {
        self.0.name()
    }

    pub fn set_name(&self, name: &str) -> bool {
        self.0.set_name(name)
    }

    pub fn compare(&self, other: &Team) -> Ordering {
        self.0.compare(&other.0)
    }

    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, callback: impl Fn(&RosterProperty) + 'static) -> Subscription {
        self.0.observers.subscribe(callback)
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Team {}

impl fmt::Debug for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team({:?} {:?})", self.0.id, self.0.name.borrow())
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name.borrow())
    }
}

// ─── Player ──────────────────────────────────────────────────────────────

struct PlayerState {
    entry: RosterEntry,
    team: RefCell<Option<Team>>,
}

/// A leaf entity carrying a mutable reference to its team.
#[derive(Clone)]
pub struct Player(Rc<PlayerState>);

impl Player {
    pub fn new(name: &str) -> Self {
        Player(Rc::new(PlayerState {
            entry: RosterEntry::new("player", name),
            team: RefCell::new(None),
        }))
    }

    pub fn with_team(name: &str, team: &Team) -> Self {
        let player = Self::new(name);
        player.set_team(Some(team.clone()));
        player
    }

    pub fn id(&self) -> EntityId {
        self.0.entry.id
    }

    pub fn name(&self) -> String {
        self.0.entry.name()
    }

    pub fn set_name(&self, name: &str) -> bool {
        self.0.entry.set_name(name)
    }

    pub fn team(&self) -> Option<Team> {
        self.0.team.borrow().clone()
    }

    /// Reassign the team. Notifies only when the team identity changes.
    pub fn set_team(&self, team: Option<Team>) -> bool {
        if *self.0.team.borrow() == team {
            return false;
        }
        self.0.team.replace(team);
        self.0.entry.observers.notify(&RosterProperty::Team);
        true
    }

    pub fn compare(&self, other: &Player) -> Ordering {
        self.0.entry.compare(&other.0.entry)
    }

    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, callback: impl Fn(&RosterProperty) + 'static) -> Subscription {
        self.0.entry.observers.subscribe(callback)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.0.entry.id == other.0.entry.id
    }
}

impl Eq for Player {}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.0.entry.id)
            .field("name", &self.0.entry.name.borrow())
            .field("team", &self.0.team.borrow().as_ref().map(Team::id))
            .finish()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.entry.name.borrow())
    }
}
