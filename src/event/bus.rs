use std::cell::{Cell, RefCell};

use crate::event::{EditorEvent, EventHandler};

/// Token returned by [`EventBus::subscribe`], used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Broadcasts editor events to its handlers in subscription order.
///
/// The editor is single-threaded, so handlers sit behind a `RefCell` and a
/// handler must not emit on the bus it is subscribed to.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<Vec<(SubscriptionId, Box<dyn EventHandler>)>>,
    next_id: Cell<u64>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().push((id, handler));
        id
    }

    /// Remove a handler. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(handler_id, _)| *handler_id != id);
        handlers.len() != before
    }

    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn emit(&self, event: EditorEvent) {
        for (_, handler) in self.handlers.borrow_mut().iter_mut() {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    struct Counter(Rc<Cell<usize>>);

    impl EventHandler for Counter {
        fn handle_event(&mut self, _event: &EditorEvent) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_unsubscribed_handler_stops_receiving() {
        let bus = EventBus::new();
        let kept = Rc::new(Cell::new(0));
        let dropped = Rc::new(Cell::new(0));
        bus.subscribe(Box::new(Counter(kept.clone())));
        let id = bus.subscribe(Box::new(Counter(dropped.clone())));

        bus.emit(EditorEvent::RedrawRequested);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.emit(EditorEvent::RedrawRequested);

        assert_eq!(kept.get(), 2);
        assert_eq!(dropped.get(), 1);
        assert_eq!(bus.len(), 1);
    }
}
