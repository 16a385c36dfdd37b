use crate::domain::document::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordinate pair on the 2-dimensional Cartesian plane. Distinct from
/// `Geometry::Point`, which tags the coordinate as spatial shape data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Registry of geometry kinds and their document type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryType {
    Point,
    Polygon,
}

impl GeometryType {
    /// Type code written to the `geometry.type` field of a document.
    pub fn code(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::Polygon => "Polygon",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Point" => Some(GeometryType::Point),
            "Polygon" => Some(GeometryType::Polygon),
            _ => None,
        }
    }
}

/// Spatial shape data underlying a location of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Coordinate),
    Polygon(Vec<Coordinate>),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::Polygon(_) => GeometryType::Polygon,
        }
    }
}

/// Scalar value of a location-of-interest property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
}

pub type Properties = HashMap<String, PropertyValue>;

/// A surveyed point, shape, or area of interest. Closed set of variants;
/// every conversion site matches exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocationOfInterest {
    Generic {
        id: String,
        job_id: String,
        geometry: Geometry,
        properties: Properties,
    },
    GeoJson {
        id: String,
        job_id: String,
        /// Raw geoJson payload, carried verbatim.
        geo_json: FieldValue,
    },
    Area {
        id: String,
        job_id: String,
        /// Raw vertex list, carried verbatim.
        polygon_vertices: FieldValue,
    },
}

impl LocationOfInterest {
    pub fn id(&self) -> &str {
        match self {
            LocationOfInterest::Generic { id, .. }
            | LocationOfInterest::GeoJson { id, .. }
            | LocationOfInterest::Area { id, .. } => id,
        }
    }

    pub fn job_id(&self) -> &str {
        match self {
            LocationOfInterest::Generic { job_id, .. }
            | LocationOfInterest::GeoJson { job_id, .. }
            | LocationOfInterest::Area { job_id, .. } => job_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_type_codes_round_trip() {
        for geometry_type in [GeometryType::Point, GeometryType::Polygon] {
            assert_eq!(
                GeometryType::from_code(geometry_type.code()),
                Some(geometry_type)
            );
        }
        assert_eq!(GeometryType::from_code("Circle"), None);
    }

    #[test]
    fn test_loi_accessors() {
        let loi = LocationOfInterest::Generic {
            id: "loi1".to_string(),
            job_id: "job1".to_string(),
            geometry: Geometry::Point(Coordinate::new(1.0, 2.0)),
            properties: Properties::new(),
        };
        assert_eq!(loi.id(), "loi1");
        assert_eq!(loi.job_id(), "job1");
    }
}
