//! The drag-drop handler contract.
//!
//! A list view delegates every drag decision to exactly one handler:
//! whether an item may be picked up, whether a hovered position accepts
//! it, and what happens on release.
//!
//! ## Who moves the item
//!
//! | `update_source()` | After `drop` returns `true` |
//! |-------------------|-----------------------------|
//! | `true`  | the host moves the item in its source collection; `drop` must not reorder |
//! | `false` | `drop` has already done whatever mutation the drop means |
//!
//! The flag must agree with how the host is configured. If both the host
//! and the handler move the item the collection ends up double-moved;
//! nothing here detects that.

use crate::item::DragItem;

pub trait DragDropHandler {
    /// Fixed for the lifetime of the handler.
    fn update_source(&self) -> bool;

    /// Whether a drag may start on `item`. Must not mutate anything.
    fn can_drag(&self, item: &DragItem, item_index: usize) -> bool;

    /// Whether `item`, picked up at `item_index`, may be dropped over
    /// `target` at `target_index`. Evaluated on every hover, so it must be
    /// pure; `drop` calls it again before committing.
    ///
    /// `target` is `None` when the host had nothing at `target_index`.
    /// Returns `true` when `item_index == target_index` for any item the
    /// handler manages.
    fn can_drop(
        &self,
        item: &DragItem,
        item_index: usize,
        target: Option<&DragItem>,
        target_index: usize,
    ) -> bool;

    /// Re-validate and commit. Returns whether the drop was accepted.
    fn drop(
        &mut self,
        item: &DragItem,
        item_index: usize,
        target: Option<&DragItem>,
        target_index: usize,
    ) -> bool;
}

/// Dropping back on the origin slot: always accepted, never a change.
pub fn is_origin(item_index: usize, target_index: usize) -> bool {
    item_index == target_index
}
