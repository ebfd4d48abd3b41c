//! Serialization and deserialization for annotation files.
//!
//! Annotations are stored as JSON with the polygon collection in draw order.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use labelkit_core::constants::{FILE_FORMAT_VERSION, MIN_POLYGON_POINTS};
use labelkit_core::{Error, LabelColor, PolygonId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::canvas::ImageSize;
use crate::model::{Point, Polygon};

/// Complete annotation file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationFile {
    pub version: String,
    pub metadata: AnnotationMetadata,
    #[serde(default)]
    pub image: Option<ImageSize>,
    #[serde(default)]
    pub polygons: Vec<PolygonData>,
}

/// Annotation metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Serialized polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonData {
    pub id: PolygonId,
    pub label: String,
    pub color: LabelColor,
    pub points: Vec<Point>,
    #[serde(rename = "isComplete")]
    pub is_complete: bool,
}

impl From<&Polygon> for PolygonData {
    fn from(polygon: &Polygon) -> Self {
        Self {
            id: polygon.id(),
            label: polygon.label().to_string(),
            color: polygon.color(),
            points: polygon.points().to_vec(),
            is_complete: polygon.is_complete(),
        }
    }
}

impl PolygonData {
    pub fn to_polygon(&self) -> Polygon {
        Polygon::from_parts(
            self.id,
            self.label.clone(),
            self.color,
            self.points.clone(),
            self.is_complete,
        )
    }
}

impl AnnotationFile {
    /// Create a new annotation file with default values
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: AnnotationMetadata {
                name: name.into(),
                created: now,
                modified: now,
            },
            image: None,
            polygons: Vec::new(),
        }
    }

    /// Serialize to a pretty-printed JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize annotations")
    }

    /// Save annotations to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;

        std::fs::write(path.as_ref(), json).context("Failed to write annotation file")?;

        Ok(())
    }

    /// Load annotations from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read annotation file")?;

        let file: AnnotationFile =
            serde_json::from_str(&content).context("Failed to parse annotation file")?;
        file.validate().context("Invalid annotation file")?;

        if file.version != FILE_FORMAT_VERSION {
            tracing::warn!(
                "Annotation file version {} differs from {}",
                file.version,
                FILE_FORMAT_VERSION
            );
        }

        Ok(file)
    }

    /// Checks that every stored polygon is a closed shape with a unique id.
    ///
    /// Only completed polygons with at least three vertices are ever saved,
    /// so anything else means the file was edited or produced elsewhere.
    pub fn validate(&self) -> labelkit_core::Result<()> {
        let mut seen = HashSet::with_capacity(self.polygons.len());
        for polygon in &self.polygons {
            if !seen.insert(polygon.id) {
                return Err(Error::other(format!("duplicate polygon id {}", polygon.id)));
            }
            if polygon.points.len() < MIN_POLYGON_POINTS {
                return Err(Error::other(format!(
                    "polygon {} has {} points, need at least {}",
                    polygon.id,
                    polygon.points.len(),
                    MIN_POLYGON_POINTS
                )));
            }
            if !polygon.is_complete {
                return Err(Error::other(format!("polygon {} is not complete", polygon.id)));
            }
        }
        Ok(())
    }

    /// Polygons rebuilt from the stored data, in draw order.
    pub fn to_polygons(&self) -> Vec<Polygon> {
        self.polygons.iter().map(PolygonData::to_polygon).collect()
    }
}
