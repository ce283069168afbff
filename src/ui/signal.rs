//! Notification channels.
//!
//! A [`Signal`] delivers each emission synchronously to every subscriber, in
//! subscription order, on the calling thread.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::debug;

/// Handle returned by [`Signal::subscribe`], used to disconnect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Slot<T> = Rc<RefCell<dyn FnMut(&T)>>;

/// Multi-subscriber publish channel.
pub struct Signal<T> {
    slots: RefCell<Vec<(SubscriptionId, Slot<T>)>>,
    next_id: Cell<u64>,
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn subscribe(&self, f: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.slots.borrow_mut().push((id, Rc::new(RefCell::new(f))));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut slots = self.slots.borrow_mut();
        let before = slots.len();
        slots.retain(|(slot_id, _)| *slot_id != id);
        slots.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn emit(&self, value: &T) {
        // Snapshot so handlers may subscribe or unsubscribe while running.
        let slots: Vec<(SubscriptionId, Slot<T>)> = self
            .slots
            .borrow()
            .iter()
            .map(|(id, slot)| (*id, Rc::clone(slot)))
            .collect();
        for (id, slot) in slots {
            // A subscriber already running (re-emission from inside its own
            // handler) misses the nested value; the others still receive it.
            match slot.try_borrow_mut() {
                Ok(mut f) => (*f)(value),
                Err(_) => debug!(?id, "subscriber busy, nested emission skipped"),
            }
        }
    }
}

impl Signal<()> {
    pub fn notify(&self) {
        self.emit(&());
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
