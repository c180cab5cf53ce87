use std::cell::RefCell;
use std::rc::Rc;

use super::{EventHandler, SketchEvent};

/// Broadcasts [`SketchEvent`]s to registered handlers.
///
/// Cloning shares the handler list, so the history and the tool state can
/// notify the same subscribers.
#[derive(Clone, Default)]
pub struct EventBus {
    handlers: Rc<RefCell<Vec<Box<dyn EventHandler>>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl EventHandler + 'static) {
        self.handlers.borrow_mut().push(Box::new(handler));
    }

    pub fn emit(&self, event: SketchEvent) {
        log::trace!("emit {event:?}");
        // Handlers must not emit re-entrantly; a second borrow would panic.
        let Ok(mut handlers) = self.handlers.try_borrow_mut() else {
            log::warn!("dropped re-entrant {event:?}");
            return;
        };
        for handler in handlers.iter_mut() {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_clones_share_handlers() {
        let seen = Rc::new(Cell::new(0));
        let bus = EventBus::new();
        let clone = bus.clone();

        let counter = seen.clone();
        bus.subscribe(move |_: &SketchEvent| counter.set(counter.get() + 1));

        clone.emit(SketchEvent::Cleared);
        bus.emit(SketchEvent::ToolChanged);
        assert_eq!(seen.get(), 2);
    }
}
