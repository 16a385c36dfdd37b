use crate::core::geometry;
use crate::domain::document::{Document, FieldValue};
use crate::domain::loi::{Geometry, GeometryType, LocationOfInterest, Properties, PropertyValue};
use crate::utils::error::{GroundError, Result};
use std::collections::HashMap;

/// Bidirectional mapping between store documents and typed locations of
/// interest. Pure function layer; a conversion either fully succeeds or
/// reports a single descriptive failure.
pub struct LoiConverter;

impl LoiConverter {
    /// Converts the raw document retrieved from the store into an immutable
    /// `LocationOfInterest`.
    ///
    /// Every failure path is captured and rewrapped into one error value
    /// carrying the id, a snapshot of the offending document, and the cause.
    pub fn to_location_of_interest(id: &str, document: &Document) -> Result<LocationOfInterest> {
        Self::decode(id, document).map_err(|cause| GroundError::InvalidDocument {
            id: id.to_string(),
            document: document.to_string(),
            cause: cause.to_string(),
        })
    }

    fn decode(id: &str, document: &Document) -> Result<LocationOfInterest> {
        if id.is_empty() {
            return Err(GroundError::MissingField { field: "id" });
        }
        let job_id = document
            .get_str("jobId")
            .filter(|job_id| !job_id.is_empty())
            .ok_or(GroundError::MissingField { field: "job id" })?;
        let properties = Self::decode_properties(document.get_map("properties"))?;
        let geometry = geometry::to_geometry(document.get("geometry"))?;

        Ok(LocationOfInterest::Generic {
            id: id.to_string(),
            job_id: job_id.to_string(),
            geometry,
            properties,
        })
    }

    // A document without a properties field maps to an empty set; only a
    // non-scalar property value is an error.
    fn decode_properties(fields: Option<&HashMap<String, FieldValue>>) -> Result<Properties> {
        let Some(fields) = fields else {
            return Ok(Properties::new());
        };

        let mut properties = Properties::new();
        for (name, value) in fields {
            let value = match value {
                FieldValue::Text(text) => PropertyValue::Text(text.clone()),
                FieldValue::Number(number) => PropertyValue::Number(*number),
                _ => {
                    return Err(GroundError::UnsupportedPropertyValue { name: name.clone() });
                }
            };
            properties.insert(name.clone(), value);
        }
        Ok(properties)
    }

    /// Converts a location of interest back to its document representation.
    /// Variants outside the writable set yield an unsupported-variant error
    /// naming the offender; data is never silently dropped.
    pub fn from_location_of_interest(loi: &LocationOfInterest) -> Result<Document> {
        match loi {
            LocationOfInterest::Generic {
                job_id,
                geometry: Geometry::Point(coordinate),
                ..
            } => {
                let mut geometry_doc = HashMap::new();
                geometry_doc.insert(
                    "coordinates".to_string(),
                    FieldValue::from(geometry::to_geo_point(coordinate)),
                );
                geometry_doc.insert(
                    "type".to_string(),
                    FieldValue::from(GeometryType::Point.code()),
                );
                Ok(Document::new()
                    .with("jobId", job_id.clone())
                    .with("geometry", FieldValue::Map(geometry_doc)))
            }
            LocationOfInterest::GeoJson {
                job_id, geo_json, ..
            } => Ok(Document::new()
                .with("jobId", job_id.clone())
                .with("geoJson", geo_json.clone())),
            LocationOfInterest::Area {
                job_id,
                polygon_vertices,
                ..
            } => Ok(Document::new()
                .with("jobId", job_id.clone())
                .with("polygonVertices", polygon_vertices.clone())),
            LocationOfInterest::Generic { geometry, .. } => Err(GroundError::UnsupportedVariant {
                variant: format!(
                    "generic location of interest with {:?} geometry",
                    geometry.geometry_type()
                ),
            }),
        }
    }
}
