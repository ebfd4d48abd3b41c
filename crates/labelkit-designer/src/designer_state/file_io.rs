//! File I/O operations (save, load) for designer state.

use anyhow::Context;

use super::DesignerState;
use crate::serialization::{AnnotationFile, PolygonData};

impl DesignerState {
    /// Builds the annotation file for the current collection.
    pub fn to_annotation_file(&self) -> AnnotationFile {
        let mut file = AnnotationFile::new(&self.design_name);
        file.image = self.canvas.image();
        file.polygons = self.canvas.shapes().iter().map(PolygonData::from).collect();
        file
    }

    /// Save annotations to file.
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let file = self.to_annotation_file();
        file.save_to_file(&path)?;

        tracing::info!(
            "Saved {} polygons to {}",
            file.polygons.len(),
            path.as_ref().display()
        );
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Load annotations from file, replacing the collection and clearing
    /// selection and history.
    pub fn load_from_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let file = AnnotationFile::load_from_file(&path)?;
        self.apply_annotation_file(file)?;

        tracing::info!(
            "Loaded {} polygons from {}",
            self.canvas.shape_count(),
            path.as_ref().display()
        );
        self.current_file_path = Some(path.as_ref().to_path_buf());
        Ok(())
    }

    /// Replaces the collection with the contents of `file`.
    ///
    /// A file that fails validation leaves the editor untouched.
    pub fn apply_annotation_file(&mut self, file: AnnotationFile) -> anyhow::Result<()> {
        file.validate().context("Invalid annotation file")?;
        self.canvas.replace_polygons(file.to_polygons());
        self.canvas.set_image(file.image);
        self.history.clear();
        self.design_name = file.metadata.name;
        self.is_modified = false;
        self.flush_events();
        Ok(())
    }
}
