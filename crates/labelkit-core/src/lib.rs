//! # LabelKit Core
//!
//! Core types, constants, and utilities for LabelKit.
//! Provides the shared vocabulary used by the settings and designer crates:
//! tool modes, polygon identifiers, the unified error type, and the
//! per-editor event bus that carries redraw and state-change notifications.

pub mod constants;
pub mod error;
pub mod event_bus;
pub mod types;

pub use error::{Error, Result};

pub use event_bus::{
    EditorEvent, EventBus, EventBusConfig, EventCategory, EventFilter, SubscriptionId,
};

pub use types::{LabelColor, PolygonId, Tool};
