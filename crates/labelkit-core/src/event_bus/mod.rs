//! # Event Bus Module
//!
//! Publish/subscribe notifications for a single editor session.
//!
//! ## Overview
//!
//! Every editor owns its own [`EventBus`]; there is no process-wide
//! instance. The presentation layer subscribes to [`EditorEvent`]s to learn
//! when to redraw and when toolbar state (tool, zoom, selection) changed.
//! Handlers run synchronously inside `publish`, on the thread that mutated
//! the editor.
//!
//! ## Usage
//!
//! ```rust
//! use labelkit_core::event_bus::{EditorEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Render]),
//!     |event| {
//!         if let EditorEvent::RedrawRequested = event {
//!             // schedule a frame
//!         }
//!     },
//! );
//!
//! bus.publish(EditorEvent::RedrawRequested);
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
