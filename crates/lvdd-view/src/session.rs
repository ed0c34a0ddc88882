//! Drag session state machine.
//!
//! The host list view owns the gesture; this module only interprets the
//! phase events it raises. Each event is handled on its own from the data
//! it carries, with no memory between calls:
//!
//! | Phase | Indices | Handler call | permit | cancel |
//! |-------|---------|--------------|--------|--------|
//! | Start | - | `can_drag` | result | `!permit` |
//! | Dragging | old == new | - | `true` | untouched |
//! | Dragging | old != new | `can_drop` | result | untouched |
//! | Drop | old == new | - | `true` | `false` |
//! | Drop | old != new | `drop` | result | `!permit` |
//!
//! Every decision is written to the feedback sink afterwards.

use lvdd_core::{DragDropHandler, DragItem, NotifyDragState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    Start,
    Dragging,
    Drop,
}

/// One phase of a drag gesture, as raised by the host.
#[derive(Debug, Clone)]
pub struct DragPhaseEvent {
    pub action: DragAction,
    /// The item being dragged.
    pub item: DragItem,
    /// Position of the item when the drag started.
    pub old_index: usize,
    /// Candidate position. Equals `old_index` on `Start`.
    pub new_index: usize,
    /// Written back by [`handle_drag_event`]; the host reads it after the
    /// call returns.
    pub cancel: bool,
}

impl DragPhaseEvent {
    pub fn start(item: DragItem, index: usize) -> Self {
        Self::new(DragAction::Start, item, index, index)
    }

    pub fn dragging(item: DragItem, old_index: usize, new_index: usize) -> Self {
        Self::new(DragAction::Dragging, item, old_index, new_index)
    }

    pub fn drop(item: DragItem, old_index: usize, new_index: usize) -> Self {
        Self::new(DragAction::Drop, item, old_index, new_index)
    }

    fn new(action: DragAction, item: DragItem, old_index: usize, new_index: usize) -> Self {
        Self {
            action,
            item,
            old_index,
            new_index,
            cancel: false,
        }
    }

    pub fn at_origin(&self) -> bool {
        self.old_index == self.new_index
    }
}

/// The host's current displayed order, used to find the drop target.
pub trait DisplayItems {
    fn item_at(&self, index: usize) -> Option<DragItem>;
}

impl DisplayItems for [DragItem] {
    fn item_at(&self, index: usize) -> Option<DragItem> {
        self.get(index).cloned()
    }
}

impl DisplayItems for Vec<DragItem> {
    fn item_at(&self, index: usize) -> Option<DragItem> {
        self.as_slice().item_at(index)
    }
}

/// The collaborators a list view binds for its drags.
pub struct DragContext<'a> {
    pub handler: &'a mut dyn DragDropHandler,
    pub feedback: &'a mut dyn NotifyDragState,
}

impl<'a> DragContext<'a> {
    pub fn new(handler: &'a mut dyn DragDropHandler, feedback: &'a mut dyn NotifyDragState) -> Self {
        Self { handler, feedback }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragDecision {
    /// Whether the handler accepts this phase. Drives the indicator.
    pub permit: bool,
    /// Whether the host should abandon the gesture (Start) or skip its
    /// default drop behavior (Drop).
    pub cancel: bool,
}

/// Interpret one phase event. Sets `event.cancel` and updates the
/// feedback sink before returning.
pub fn handle_drag_event(
    event: &mut DragPhaseEvent,
    display: &dyn DisplayItems,
    ctx: &mut DragContext<'_>,
) -> DragDecision {
    log::trace!(
        "{:?} {} {} -> {}",
        event.action,
        event.item,
        event.old_index,
        event.new_index
    );

    let permit = match event.action {
        DragAction::Start => {
            let permit = ctx.handler.can_drag(&event.item, event.new_index);
            event.cancel = !permit;
            permit
        }
        // The host raises a Dragging event right after Start, and again
        // whenever the item returns to its slot. Both show as valid.
        DragAction::Dragging if event.at_origin() => true,
        DragAction::Dragging => {
            let target = display.item_at(event.new_index);
            ctx.handler.can_drop(
                &event.item,
                event.old_index,
                target.as_ref(),
                event.new_index,
            )
        }
        // Releasing over the origin is a no-op the handler never sees.
        DragAction::Drop if event.at_origin() => {
            event.cancel = false;
            true
        }
        DragAction::Drop => {
            let target = display.item_at(event.new_index);
            let permit = ctx.handler.drop(
                &event.item,
                event.old_index,
                target.as_ref(),
                event.new_index,
            );
            event.cancel = !permit;
            permit
        }
    };

    log::trace!("{:?} permit={permit} cancel={}", event.action, event.cancel);
    ctx.feedback.state_changed(permit);

    DragDecision {
        permit,
        cancel: event.cancel,
    }
}
