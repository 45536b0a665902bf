//! Scoped event subscriptions.
//!
//! The runner only reacts to an event kind while it holds a live
//! [`Subscription`] for it.  Dropping the subscription (or calling
//! [`Subscription::unsubscribe`]) releases it, so tearing the runner down can
//! never leave a listener behind.  Everything here is single-threaded.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Host notifications a runner can listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Frame,
}

#[derive(Debug, Default)]
struct ListenerTable {
    next_id: u64,
    active: HashMap<u64, EventKind>,
}

/// Registry of live subscriptions.
#[derive(Debug, Default, Clone)]
pub struct EventListeners {
    table: Rc<RefCell<ListenerTable>>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, kind: EventKind) -> Subscription {
        let mut table = self.table.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.active.insert(id, kind);
        log::debug!("subscribed to {kind:?} (#{id})");
        Subscription {
            id,
            kind,
            table: Rc::downgrade(&self.table),
        }
    }

    pub fn is_subscribed(&self, kind: EventKind) -> bool {
        self.count(kind) > 0
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.table.borrow().active.values().filter(|k| **k == kind).count()
    }
}

/// A live listener.  Released on drop.
#[derive(Debug)]
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    kind: EventKind,
    table: Weak<RefCell<ListenerTable>>,
}

impl Subscription {
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Explicit counterpart to [`EventListeners::subscribe`].
    pub fn unsubscribe(self) {
        // released by Drop
    }

    fn release(&self) {
        if let Some(table) = self.table.upgrade() {
            if table.borrow_mut().active.remove(&self.id).is_some() {
                log::debug!("unsubscribed from {:?} (#{})", self.kind, self.id);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_and_unsubscribe() {
        let listeners = EventListeners::new();
        let sub = listeners.subscribe(EventKind::Scroll);
        assert!(listeners.is_subscribed(EventKind::Scroll));
        assert!(!listeners.is_subscribed(EventKind::Frame));
        sub.unsubscribe();
        assert!(!listeners.is_subscribed(EventKind::Scroll));
    }

    #[test]
    fn drop_releases() {
        let listeners = EventListeners::new();
        {
            let _a = listeners.subscribe(EventKind::Frame);
            let _b = listeners.subscribe(EventKind::Frame);
            assert_eq!(listeners.count(EventKind::Frame), 2);
        }
        assert_eq!(listeners.count(EventKind::Frame), 0);
    }

    #[test]
    fn outliving_the_registry_is_harmless() {
        let listeners = EventListeners::new();
        let sub = listeners.subscribe(EventKind::Scroll);
        drop(listeners);
        drop(sub);
    }
}
