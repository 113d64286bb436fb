//! JSON loading for annotation documents.
//!
//! Annotation files arrive as JSON from the external annotation source.
//! Parsing is permissive: unknown element fields are preserved, missing
//! optional fields default, and an absent `elements` array reads as an
//! empty collection.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::AnnotationDocument;
use crate::error::GlomscoreError;

/// Reads an annotation document from a JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_annotation_json(path: &Path) -> Result<AnnotationDocument, GlomscoreError> {
    let file = File::open(path).map_err(GlomscoreError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| GlomscoreError::AnnotationParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses an annotation document from a JSON string.
///
/// Useful for testing without file I/O.
pub fn from_json_str(json: &str) -> Result<AnnotationDocument, serde_json::Error> {
    serde_json::from_str(json)
}
