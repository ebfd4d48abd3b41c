//! Event Bus implementation.

use parking_lot::RwLock;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use uuid::Uuid;

use super::events::{EditorEvent, EventCategory};

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Filter to receive only specific event types
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Check if an event matches this filter
    pub fn matches(&self, event: &EditorEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

type EventHandler = Arc<dyn Fn(EditorEvent) + Send + Sync>;

/// Configuration for the event bus
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Whether to keep event history.
    pub enable_history: bool,
    /// Maximum number of events to retain in history.
    pub max_history_size: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            enable_history: false,
            max_history_size: 1000,
        }
    }
}

/// Event bus owned by one editor session
pub struct EventBus {
    handlers: RwLock<HashMap<SubscriptionId, (EventFilter, EventHandler)>>,
    history: RwLock<VecDeque<EditorEvent>>,
    config: EventBusConfig,
}

impl EventBus {
    /// Create a new event bus with default configuration
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    /// Create a new event bus with custom configuration
    pub fn with_config(config: EventBusConfig) -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            history: RwLock::new(VecDeque::new()),
            config,
        }
    }

    /// Publish an event to all matching subscribers
    ///
    /// Returns the number of handlers that received the event.
    /// Handlers run on a snapshot taken before the first call, so subscriptions
    /// changed from inside a handler apply to the next event.
    pub fn publish(&self, event: EditorEvent) -> usize {
        if self.config.enable_history {
            self.add_to_history(&event);
        }

        tracing::trace!("Publishing: {}", event.description());

        let matching: Vec<EventHandler> = self
            .handlers
            .read()
            .values()
            .filter(|(filter, _)| filter.matches(&event))
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        for handler in &matching {
            handler(event.clone());
        }
        matching.len()
    }

    /// Subscribe to events with a synchronous handler
    ///
    /// The handler is called from inside `publish` with no bus lock held, so it
    /// may subscribe or unsubscribe on this bus. It must not call back into
    /// the editor that owns the bus.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(EditorEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        let mut handlers = self.handlers.write();
        handlers.insert(id, (filter, Arc::new(handler)));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Unsubscribe from events
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write();
        let removed = handlers.remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Get the number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Get recorded events, oldest first (empty unless history is enabled)
    pub fn history(&self) -> Vec<EditorEvent> {
        self.history.read().iter().cloned().collect()
    }

    /// Clear event history
    pub fn clear_history(&self) {
        self.history.write().clear();
    }

    /// Get the current configuration
    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }

    fn add_to_history(&self, event: &EditorEvent) {
        let mut history = self.history.write();
        history.push_back(event.clone());
        while history.len() > self.config.max_history_size {
            history.pop_front();
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("config", &self.config)
            .finish()
    }
}
