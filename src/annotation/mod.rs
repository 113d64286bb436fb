//! Annotation collection model.
//!
//! A minimal model of the annotation documents produced by the upstream
//! segmentation pipeline: one labeled collection of image regions per
//! file. Only the number of elements in a collection feeds the score;
//! element geometry is carried opaquely and never interpreted.

pub mod io_json;

use serde::{Deserialize, Serialize};

/// A single annotation document: one labeled collection of image regions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AnnotationDocument {
    /// The annotation payload.
    pub annotation: Annotation,
}

/// The annotation payload: optional metadata plus the region elements.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Annotation {
    /// Optional name of the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The annotated regions. Cardinality is all the score consumes.
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A single annotated region.
///
/// The region kind is kept for inspection; all remaining fields (points,
/// colors, grouping) are preserved verbatim without interpretation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Element {
    /// Region kind (e.g. "polyline", "point").
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,

    /// Remaining element fields, carried opaquely.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AnnotationDocument {
    /// Number of annotated regions in this collection.
    pub fn element_count(&self) -> usize {
        self.annotation.elements.len()
    }
}
