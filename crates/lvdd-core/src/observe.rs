//! Change notification.
//!
//! Every observable object owns an [`Observers`] registry. Listeners hold
//! the returned [`Subscription`]; dropping it removes the listener, so a
//! view releases everything it registered when it is torn down. Ownership
//! runs one way (emitter → listener) and no weak listener tables are needed.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<E> = Rc<dyn Fn(&E)>;

struct Registry<E> {
    next_id: u64,
    slots: SmallVec<[(u64, Callback<E>); 2]>,
}

/// Listener registry for events of type `E`.
pub struct Observers<E: 'static> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E: 'static> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> Observers<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                slots: SmallVec::new(),
            })),
        }
    }

    /// Register `callback`. It stays registered until the returned
    /// subscription is dropped.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, callback: impl Fn(&E) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.slots.push((id, Rc::new(callback)));
            id
        };

        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.borrow_mut().slots.retain(|(slot, _)| *slot != id);
                }
            })),
        }
    }

    /// Deliver `event` to every current listener, in registration order.
    ///
    /// Listeners may subscribe or unsubscribe while being notified; such
    /// changes apply from the next notification on.
    pub fn notify(&self, event: &E) {
        let callbacks: SmallVec<[Callback<E>; 2]> = self
            .registry
            .borrow()
            .slots
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: 'static> fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Handle to a registered listener. Dropping it unregisters the listener.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unregister now. Equivalent to dropping the handle.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Store `value` in `field` and notify `event` when `same` reports a
/// difference. Returns whether the field changed.
pub fn set_property<T, E: 'static>(
    field: &mut T,
    value: T,
    same: impl Fn(&T, &T) -> bool,
    observers: &Observers<E>,
    event: E,
) -> bool {
    if same(field, &value) {
        return false;
    }
    *field = value;
    observers.notify(&event);
    true
}
