use super::PointFeatureError;
use geo::Geometry;
use serde_json::Value;

/// turns an object-shaped GeoJSON geometry node into a geo-types geometry.
pub trait GeometryDeserializer: Send + Sync {
    fn parse_geometry(&self, node: &Value) -> Result<Geometry<f64>, PointFeatureError>;
}

/// default [`GeometryDeserializer`] backed by the [`geojson`] crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoJsonGeometryDeserializer;

impl GeometryDeserializer for GeoJsonGeometryDeserializer {
    fn parse_geometry(&self, node: &Value) -> Result<Geometry<f64>, PointFeatureError> {
        let geojson_geometry = geojson::Geometry::from_json_value(node.clone())
            .map_err(|e| PointFeatureError::GeometryDeserialization(e.to_string()))?;
        let geometry = geo_types::Geometry::<f64>::try_from(geojson_geometry)
            .map_err(|e| PointFeatureError::GeometryDeserialization(e.to_string()))?;
        Ok(geometry)
    }
}
