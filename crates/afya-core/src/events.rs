//! Cross-view event bus for data-mutation notifications.
//!
//! Views that cache backend data subscribe here so that a mutation made in
//! one view reaches the others without a refetch. Delivery is synchronous:
//! [`EventBus::publish`] invokes every matching callback before it returns.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::model::Program;

/// The kinds of mutation the bus distinguishes.
///
/// Subscriptions match on kind; a subscriber to one kind never sees the
/// others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A program was created.
    ProgramCreated,
    /// A program's fields were edited.
    ProgramUpdated,
    /// A program was deleted.
    ProgramDeleted,
}

impl EventKind {
    /// Returns the wire-style name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::ProgramCreated => "program:created",
            EventKind::ProgramUpdated => "program:updated",
            EventKind::ProgramDeleted => "program:deleted",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mutation notification with its payload.
///
/// Created and updated events carry the full record as returned by the
/// backend, so subscribers can merge it into their caches without a
/// follow-up fetch. Deletions carry only the identifier.
#[derive(Debug, Clone)]
pub enum DomainEvent {
    /// A program was created; payload is the created record.
    ProgramCreated(Program),
    /// A program was edited; payload is the updated record.
    ProgramUpdated(Program),
    /// A program was deleted; payload is its identifier.
    ProgramDeleted(Uuid),
}

impl DomainEvent {
    /// Returns the kind this event is delivered under.
    pub fn kind(&self) -> EventKind {
        match self {
            DomainEvent::ProgramCreated(_) => EventKind::ProgramCreated,
            DomainEvent::ProgramUpdated(_) => EventKind::ProgramUpdated,
            DomainEvent::ProgramDeleted(_) => EventKind::ProgramDeleted,
        }
    }
}

type Callback = Arc<dyn Fn(&DomainEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    subscribers: HashMap<EventKind, Vec<(u64, Callback)>>,
    next_id: u64,
}

/// A synchronous publish/subscribe bus keyed by [`EventKind`].
///
/// Clones share the same registry. Subscribers for a kind are invoked in
/// registration order, on the publishing thread, before `publish` returns.
///
/// # Lifetime of subscriptions
///
/// A subscription stays registered until [`Subscription::unsubscribe`] is
/// called. Dropping the handle does NOT unsubscribe; a subscriber that is
/// discarded without unsubscribing keeps receiving events for the life of
/// the bus. Callers owning short-lived views must pair every subscribe
/// with an unsubscribe.
///
/// # Panics
///
/// Callbacks are not isolated from each other. A callback that panics
/// unwinds through `publish`, and later subscribers in the delivery order
/// are not invoked.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for one event kind.
    ///
    /// The returned handle is the only way to remove the registration.
    pub fn subscribe(
        &self,
        kind: EventKind,
        callback: impl Fn(&DomainEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let mut registry = self.registry.lock().unwrap();
        let id = registry.next_id;
        registry.next_id += 1;
        registry
            .subscribers
            .entry(kind)
            .or_default()
            .push((id, Arc::new(callback)));
        Subscription {
            registry: Arc::clone(&self.registry),
            kind,
            id,
        }
    }

    /// Deliver an event to every subscriber of its kind.
    ///
    /// The subscriber list is snapshotted before the first callback runs:
    /// a callback that subscribes or unsubscribes during delivery changes
    /// future publishes, not this one. Publishing with no subscribers is a
    /// no-op.
    pub fn publish(&self, event: &DomainEvent) {
        let callbacks: Vec<Callback> = {
            let registry = self.registry.lock().unwrap();
            match registry.subscribers.get(&event.kind()) {
                Some(entries) => entries.iter().map(|(_, cb)| Arc::clone(cb)).collect(),
                None => Vec::new(),
            }
        };

        for callback in callbacks {
            callback(event);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.lock().unwrap();
        let total: usize = registry.subscribers.values().map(Vec::len).sum();
        f.debug_struct("EventBus")
            .field("subscribers", &total)
            .finish()
    }
}

/// A handle identifying one registration on the bus.
///
/// Dropping the handle leaves the registration in place; call
/// [`unsubscribe`](Subscription::unsubscribe) to remove it.
pub struct Subscription {
    registry: Arc<Mutex<Registry>>,
    kind: EventKind,
    id: u64,
}

impl Subscription {
    /// Remove this registration from the bus.
    ///
    /// Idempotent: calling it again, or after the registration is already
    /// gone, is a no-op.
    pub fn unsubscribe(&self) {
        let mut registry = self.registry.lock().unwrap();
        if let Some(entries) = registry.subscribers.get_mut(&self.kind) {
            entries.retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("kind", &self.kind)
            .field("id", &self.id)
            .finish()
    }
}
