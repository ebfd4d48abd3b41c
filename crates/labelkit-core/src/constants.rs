//! Application-wide defaults.
//!
//! Screen-space distances are in pixels and are converted to world units
//! by dividing by the current viewport scale at hit-test time.

use crate::types::LabelColor;

/// Smallest allowed viewport scale.
pub const MIN_SCALE: f64 = 0.1;

/// Largest allowed viewport scale.
pub const MAX_SCALE: f64 = 5.0;

/// Scale change per unit of wheel delta.
pub const ZOOM_SPEED: f64 = 0.001;

/// Scale used when an editor session starts.
pub const INITIAL_SCALE: f64 = 1.0;

/// Radius (screen px) within which a pointer hits a vertex.
pub const POINT_HIT_RADIUS: f64 = 6.0;

/// Distance (screen px) within which a pointer hits an edge.
pub const LINE_HIT_DISTANCE: f64 = 4.0;

/// Distance (screen px) to the first vertex that closes an open polygon.
pub const CLOSE_THRESHOLD: f64 = 10.0;

/// Per-edge padding used when fitting content to the view (fraction of canvas).
pub const VIEW_PADDING: f64 = 0.05;

/// Label given to new polygons when none is chosen.
pub const DEFAULT_LABEL: &str = "object";

/// Colour given to new polygons when none is chosen.
pub const DEFAULT_COLOR: LabelColor = LabelColor::from_rgb(0xff, 0x00, 0x00);

/// Canvas background colour.
pub const BACKGROUND_COLOR: LabelColor = LabelColor::from_rgb(0x37, 0x41, 0x50);

/// Outline colour of the selected polygon.
pub const SELECTION_COLOR: LabelColor = LabelColor::from_rgb(0xff, 0xeb, 0x3b);

/// Fill of the vertex markers drawn on unselected polygons.
pub const VERTEX_COLOR: LabelColor = LabelColor::from_rgb(0xff, 0xff, 0xff);

/// Fewest vertices a completed polygon may have.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Fill opacity of a polygon body.
pub const FILL_ALPHA: f64 = 0.3;

/// Outline width (screen px).
pub const STROKE_WIDTH: f64 = 2.0;

/// Vertex marker radius (screen px).
pub const VERTEX_RADIUS: f64 = 3.0;

/// Maximum number of undoable commands kept.
pub const HISTORY_DEPTH: usize = 100;

/// Version tag written into annotation files.
pub const FILE_FORMAT_VERSION: &str = "1.0";
