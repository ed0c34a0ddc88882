pub mod command;
pub mod host;
pub mod presenter;
pub mod session;
pub mod view_model;

pub use command::{Command, CommandEvent, CommandProperty};
pub use host::{DisplaySource, DragOutcome, ListView, PhaseRecord, TeamGrouping};
pub use presenter::{DragItemView, ItemTemplate};
pub use session::{
    DisplayItems, DragAction, DragContext, DragDecision, DragPhaseEvent, handle_drag_event,
};
pub use view_model::{MainViewModel, ViewModelProperty, seed_roster};
