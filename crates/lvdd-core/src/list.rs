//! Observable, order-preserving item collection.
//!
//! The list is a shared handle: the view model, the host list view and a
//! handler that reorders on drop all hold clones of the same list.

use crate::observe::{Observers, Subscription};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A structural change to an [`ObservableList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    Inserted { index: usize },
    Removed { index: usize },
    Moved { from: usize, to: usize },
}

struct ListState<T> {
    items: RefCell<Vec<T>>,
    observers: Observers<ListChange>,
}

pub struct ObservableList<T: 'static> {
    state: Rc<ListState<T>>,
}

impl<T: 'static> Clone for ObservableList<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: 'static> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> ObservableList<T> {
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            state: Rc::new(ListState {
                items: RefCell::new(items),
                observers: Observers::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.state.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push(&self, item: T) {
        let index = {
            let mut items = self.state.items.borrow_mut();
            items.push(item);
            items.len() - 1
        };
        self.state.observers.notify(&ListChange::Inserted { index });
    }

    pub fn insert(&self, index: usize, item: T) -> Result<(), String> {
        {
            let mut items = self.state.items.borrow_mut();
            if index > items.len() {
                return Err(format!(
                    "insert index {index} out of range for list of {}",
                    items.len()
                ));
            }
            items.insert(index, item);
        }
        self.state.observers.notify(&ListChange::Inserted { index });
        Ok(())
    }

    pub fn remove(&self, index: usize) -> Result<T, String> {
        let item = {
            let mut items = self.state.items.borrow_mut();
            if index >= items.len() {
                return Err(format!(
                    "remove index {index} out of range for list of {}",
                    items.len()
                ));
            }
            items.remove(index)
        };
        self.state.observers.notify(&ListChange::Removed { index });
        Ok(item)
    }

    /// Relocate the element at `from` so it ends up at `to`, keeping the
    /// relative order of all others (remove at `from`, insert at `to`).
    pub fn move_item(&self, from: usize, to: usize) -> Result<(), String> {
        {
            let mut items = self.state.items.borrow_mut();
            let len = items.len();
            if from >= len || to >= len {
                return Err(format!("move {from} -> {to} out of range for list of {len}"));
            }
            if from == to {
                return Ok(());
            }
            let item = items.remove(from);
            items.insert(to, item);
        }
        self.state.observers.notify(&ListChange::Moved { from, to });
        Ok(())
    }

    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, callback: impl Fn(&ListChange) + 'static) -> Subscription {
        self.state.observers.subscribe(callback)
    }

    /// Run `f` over the current contents without cloning them.
    pub fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.state.items.borrow())
    }
}

impl<T: Clone + 'static> ObservableList<T> {
    pub fn get(&self, index: usize) -> Option<T> {
        self.state.items.borrow().get(index).cloned()
    }

    /// Snapshot of the current contents.
    pub fn to_vec(&self) -> Vec<T> {
        self.state.items.borrow().clone()
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.state.items.borrow().iter()).finish()
    }
}
