//! Recorded input sessions.
//!
//! A session script is a JSON array of [`InputEvent`]s, for example:
//!
//! ```json
//! [
//!   { "type": "key", "action": { "switch_tool": "polygon" } },
//!   { "type": "pointer_down", "x": 0.0, "y": 0.0 },
//!   { "type": "wheel", "x": 10.0, "y": 10.0, "delta": -120.0 },
//!   { "type": "key", "action": "delete_selected", "in_text_input": false }
//! ]
//! ```

use std::path::Path;

use labelkit_core::{Error, Result};

use crate::canvas::InputEvent;
use crate::designer_state::DesignerState;

/// Parses a session script.
pub fn parse_session(json: &str) -> Result<Vec<InputEvent>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a session script from disk. Only `.json` files are accepted.
pub fn load_session(path: &Path) -> Result<Vec<InputEvent>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    if !extension.eq_ignore_ascii_case("json") {
        return Err(Error::UnsupportedFormat {
            extension: extension.to_string(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let events = parse_session(&content)?;
    tracing::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Feeds every event through the editor in order.
pub fn replay(state: &mut DesignerState, events: &[InputEvent]) {
    for event in events {
        state.handle_input(event);
    }
    tracing::debug!("Replayed {} events", events.len());
}
