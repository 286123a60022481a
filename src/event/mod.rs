mod bus;
mod events;
mod handlers;

pub use bus::{EventBus, SubscriptionId};
pub use events::{EditorEvent, UndoTarget};
pub use handlers::{LogEventHandler, RepaintHandler};

/// Receives every event emitted on the bus it is subscribed to
pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}
