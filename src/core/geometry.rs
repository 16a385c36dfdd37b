use crate::domain::document::{FieldValue, GeoPoint};
use crate::domain::loi::{Coordinate, Geometry, GeometryType};
use crate::utils::error::{GroundError, Result};

/// Decodes the raw `geometry` fragment of a document into a typed geometry.
///
/// The fragment must be a mapping carrying a registered `type` code and a
/// `coordinates` payload whose shape matches that code.
pub fn to_geometry(fragment: Option<&FieldValue>) -> Result<Geometry> {
    let map = fragment
        .ok_or_else(|| decode_error("missing geometry"))?
        .as_map()
        .ok_or_else(|| decode_error("geometry is not a mapping"))?;

    let code = map
        .get("type")
        .and_then(FieldValue::as_str)
        .ok_or_else(|| decode_error("missing geometry type"))?;
    let geometry_type = GeometryType::from_code(code)
        .ok_or_else(|| decode_error(format!("unknown geometry type: {}", code)))?;

    let coordinates = map
        .get("coordinates")
        .ok_or_else(|| decode_error("missing coordinates"))?;

    match geometry_type {
        GeometryType::Point => Ok(Geometry::Point(to_coordinate(coordinates)?)),
        GeometryType::Polygon => {
            let vertices = coordinates
                .as_list()
                .ok_or_else(|| decode_error("polygon coordinates are not a list"))?
                .iter()
                .map(to_coordinate)
                .collect::<Result<Vec<_>>>()?;
            Ok(Geometry::Polygon(vertices))
        }
    }
}

/// Encodes a coordinate as the store's geo-point intermediate. The ordinate
/// values are carried as-is; no precision is lost through this mapping.
pub fn to_geo_point(coordinate: &Coordinate) -> GeoPoint {
    GeoPoint::new(coordinate.x, coordinate.y)
}

fn to_coordinate(value: &FieldValue) -> Result<Coordinate> {
    let point = value
        .as_geo_point()
        .ok_or_else(|| decode_error("coordinates do not match geometry type"))?;
    Ok(Coordinate::new(point.latitude, point.longitude))
}

fn decode_error(reason: impl Into<String>) -> GroundError {
    GroundError::GeometryDecode {
        reason: reason.into(),
    }
}
