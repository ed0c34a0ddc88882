//! Presenter for the row being dragged.
//!
//! Renders the bound item through the list's item template and mirrors
//! the list's drag indicator. The style subscription lives exactly as
//! long as the attachment.

use lvdd_core::{DragIndicator, DragItem, DragItemStyle, StyleChange, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

/// Turns an item into its row content. `None` means "render nothing".
pub type ItemTemplate = Rc<dyn Fn(&DragItem) -> Option<String>>;

#[derive(Default)]
pub struct DragItemView {
    template: Option<ItemTemplate>,
    item: Option<DragItem>,
    content: Option<String>,
    indicator: Rc<RefCell<Option<DragIndicator>>>,
    subscription: Option<Subscription>,
}

impl DragItemView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind to a list's style and template, replacing any previous binding.
    pub fn attach(&mut self, style: &DragItemStyle, template: Option<ItemTemplate>) {
        self.detach();

        *self.indicator.borrow_mut() = Some(style.indicator());
        let indicator = Rc::clone(&self.indicator);
        self.subscription = Some(style.subscribe(move |change| {
            if let StyleChange::Indicator(current) = change {
                *indicator.borrow_mut() = Some(current.clone());
            }
        }));
        self.template = template;
        self.render();
    }

    /// Drop the style subscription and the template.
    pub fn detach(&mut self) {
        self.subscription = None;
        self.template = None;
        *self.indicator.borrow_mut() = None;
        self.render();
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Change the bound item and re-render.
    pub fn set_item(&mut self, item: Option<DragItem>) {
        self.item = item;
        self.render();
    }

    pub fn item(&self) -> Option<&DragItem> {
        self.item.as_ref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn indicator(&self) -> Option<DragIndicator> {
        self.indicator.borrow().clone()
    }

    fn render(&mut self) {
        self.content = match (&self.item, &self.template) {
            (Some(item), Some(template)) => template(item),
            _ => None,
        };
    }
}
