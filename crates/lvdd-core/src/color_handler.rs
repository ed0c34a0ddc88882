//! Reordering handler for the color list.

use crate::handler::{DragDropHandler, is_origin};
use crate::item::DragItem;
use crate::list::ObservableList;
use crate::named_color::NamedColor;

/// Reorders a list of named colors.
///
/// Policy: a color may not be dropped onto a color whose name starts with
/// the same character.
pub struct ColorDragDropHandler {
    colors: ObservableList<NamedColor>,
    update_source: bool,
}

impl ColorDragDropHandler {
    pub fn new(colors: ObservableList<NamedColor>, update_source: bool) -> Self {
        Self {
            colors,
            update_source,
        }
    }

    fn accepts(color: &NamedColor, target: &NamedColor) -> bool {
        color.initial() != target.initial()
    }
}

impl DragDropHandler for ColorDragDropHandler {
    fn update_source(&self) -> bool {
        self.update_source
    }

    fn can_drag(&self, item: &DragItem, _item_index: usize) -> bool {
        matches!(item, DragItem::Color(_))
    }

    fn can_drop(
        &self,
        item: &DragItem,
        item_index: usize,
        target: Option<&DragItem>,
        target_index: usize,
    ) -> bool {
        match (item, target) {
            (DragItem::Color(color), Some(DragItem::Color(target))) => {
                is_origin(item_index, target_index) || Self::accepts(color, target)
            }
            _ => false,
        }
    }

    fn drop(
        &mut self,
        item: &DragItem,
        item_index: usize,
        target: Option<&DragItem>,
        target_index: usize,
    ) -> bool {
        if !self.can_drop(item, item_index, target, target_index) {
            log::trace!("color drop {item_index} -> {target_index} rejected");
            return false;
        }
        if self.update_source || is_origin(item_index, target_index) {
            return true;
        }
        match self.colors.move_item(item_index, target_index) {
            Ok(()) => {
                log::debug!("moved {item} from {item_index} to {target_index}");
                true
            }
            Err(err) => {
                log::warn!("color drop not applied: {err}");
                false
            }
        }
    }
}
