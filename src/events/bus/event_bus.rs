// src/events/bus/event_bus.rs
//
// In-process, synchronous publish/subscribe keyed by event type.
//
// A view-model emits after a successful write; every subscribed refresher
// runs on the emitting thread before `emit` returns. The bus remembers the
// last few emissions so a shell can show what was refreshed and why.

use std::any::{Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::events::types::DomainEvent;

/// Emissions kept by `recent_emissions`
const EMISSION_HISTORY: usize = 64;

type Subscriber = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// One `emit` call and how its subscribers fared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLogEntry {
    pub event_type: &'static str,
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub handler_count: usize,
    /// Subscribers that panicked; the others still ran
    pub failed_handlers: usize,
}

#[derive(Default)]
pub struct EventBus {
    subscribers: RwLock<HashMap<TypeId, Vec<Subscriber>>>,
    emissions: Mutex<VecDeque<EventLogEntry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `handler` for every future `E`, after the handlers already
    /// subscribed to `E`. A handler must not subscribe from inside its body.
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let subscriber: Subscriber = Box::new(move |event: &dyn Any| {
            if let Some(event) = event.downcast_ref::<E>() {
                handler(event);
            }
        });

        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<E>())
            .or_default()
            .push(subscriber);
    }

    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let subscribers = self.subscribers.read().unwrap_or_else(PoisonError::into_inner);
        let targets = subscribers
            .get(&TypeId::of::<E>())
            .map(Vec::as_slice)
            .unwrap_or_default();

        log::debug!(
            "Emitting {} ({}) to {} subscriber(s)",
            event.event_type(),
            event.event_id(),
            targets.len()
        );

        let mut failed_handlers = 0;
        for subscriber in targets {
            if catch_unwind(AssertUnwindSafe(|| subscriber(&event as &dyn Any))).is_err() {
                failed_handlers += 1;
                log::error!("A {} subscriber panicked; continuing", event.event_type());
            }
        }

        self.remember(EventLogEntry {
            event_type: event.event_type(),
            event_id: event.event_id(),
            occurred_at: event.occurred_at(),
            handler_count: targets.len(),
            failed_handlers,
        });
    }

    /// Most recent emissions, oldest first
    pub fn get_event_log(&self) -> Vec<EventLogEntry> {
        self.emissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn subscriber_count<E: 'static>(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }

    fn remember(&self, entry: EventLogEntry) {
        let mut emissions = self.emissions.lock().unwrap_or_else(PoisonError::into_inner);
        if emissions.len() == EMISSION_HISTORY {
            emissions.pop_front();
        }
        emissions.push_back(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::*;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_delivery_reaches_subscriber() {
        let bus = EventBus::new();
        let delivered = Arc::new(AtomicI64::new(0));
        let seen = Arc::clone(&delivered);

        bus.subscribe::<DeliveryRegistered, _>(move |event| {
            seen.fetch_add(event.quantity, Ordering::SeqCst);
        });
        bus.emit(DeliveryRegistered::new(1, 1, 3));
        bus.emit(DeliveryRegistered::new(1, 1, 4));

        assert_eq!(delivered.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_subscribers_run_in_subscription_order() {
        let bus = EventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for view in ["stock", "delivery", "history"] {
            let order = Arc::clone(&order);
            bus.subscribe::<StockReceived, _>(move |_| order.lock().unwrap().push(view));
        }
        bus.emit(StockReceived::new(1, 2, 10, 1));

        assert_eq!(*order.lock().unwrap(), vec!["stock", "delivery", "history"]);
    }

    #[test]
    fn test_other_event_types_are_not_delivered() {
        let bus = EventBus::new();
        bus.subscribe::<StockItemDeleted, _>(|_| panic!("wrong event type"));

        bus.emit(StockItemUpdated::new(4));

        let log = bus.get_event_log();
        assert_eq!(log[0].event_type, "StockItemUpdated");
        assert_eq!(log[0].handler_count, 0);
        assert_eq!(bus.subscriber_count::<StockItemDeleted>(), 1);
        assert_eq!(bus.subscriber_count::<StockItemUpdated>(), 0);
    }

    #[test]
    fn test_panicking_subscriber_is_counted_and_others_run() {
        let bus = EventBus::new();
        let ran = Arc::new(AtomicI64::new(0));

        bus.subscribe::<CatalogChanged, _>(|_| panic!("view gone"));
        let seen = Arc::clone(&ran);
        bus.subscribe::<CatalogChanged, _>(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(CatalogChanged::new(CatalogEntity::Size, Some(3), ChangeKind::Deleted));

        assert_eq!(ran.load(Ordering::SeqCst), 1);
        let entry = &bus.get_event_log()[0];
        assert_eq!(entry.handler_count, 2);
        assert_eq!(entry.failed_handlers, 1);
    }

    #[test]
    fn test_emission_history_is_bounded() {
        let bus = EventBus::new();
        for id in 0..(EMISSION_HISTORY as i64 + 5) {
            bus.emit(StockItemDeleted::new(id));
        }

        let log = bus.get_event_log();
        assert_eq!(log.len(), EMISSION_HISTORY);
        assert_eq!(log.last().unwrap().event_type, "StockItemDeleted");
    }
}
