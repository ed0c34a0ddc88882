pub mod color;
pub mod color_handler;
pub mod feedback;
pub mod glyph;
pub mod handler;
pub mod id;
pub mod item;
pub mod list;
pub mod named_color;
pub mod observe;
pub mod player_handler;
pub mod roster;

pub use color::Color;
pub use color_handler::ColorDragDropHandler;
pub use feedback::{DragIndicator, DragItemStyle, DragStyleConfig, NotifyDragState, StyleChange};
pub use handler::DragDropHandler;
pub use id::EntityId;
pub use item::{DragItem, GroupKey, GroupResult};
pub use list::{ListChange, ObservableList};
pub use named_color::{NamedColor, NamedColorComparer};
pub use observe::{Observers, Subscription};
pub use player_handler::PlayerDragDropHandler;
pub use roster::{Player, RosterProperty, Team};
