//! # LabelKit
//!
//! A polygon annotation editor core. Shapes are drawn, selected, dragged and
//! reshaped on a pannable, zoomable canvas; the editor is driven entirely by
//! semantic input events so it can run headless.
//!
//! ## Architecture
//!
//! LabelKit is organized as a workspace with multiple crates:
//!
//! 1. **labelkit-core** - Constants, error type, editor events and event bus
//! 2. **labelkit-settings** - Editor configuration (TOML/JSON)
//! 3. **labelkit-designer** - Geometry, polygons, viewport, interaction, history, export
//! 4. **labelkit** - Session-replay binary that integrates all crates

pub mod cli;

pub use labelkit_designer as designer;

pub use labelkit_core::{EditorEvent, Error, LabelColor, PolygonId, Result, Tool};
pub use labelkit_designer::{
    AnnotationFile, Canvas, DesignerState, InputEvent, KeyAction, Point, Polygon, Viewport,
};
pub use labelkit_settings::{EditorConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, leaving stdout free for exports
/// - RUST_LOG environment variable support (default `info`)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
