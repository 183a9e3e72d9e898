use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PointFeatureError {
    #[error("MULTIPOLYGON geometry has no member polygons")]
    EmptyGeometry,
    #[error("{0} geometry is not supported, must be POINT, POLYGON, or MULTIPOLYGON")]
    UnsupportedGeometry(String),
    #[error("failure deserializing GeoJSON geometry: {0}")]
    GeometryDeserialization(String),
}
