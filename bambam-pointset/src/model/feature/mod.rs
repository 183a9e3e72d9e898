mod attribute_data;
mod feature_geometry;
mod geometry_deserializer;
pub mod json_ops;
mod point_feature;
mod point_feature_error;

pub use attribute_data::AttributeData;
pub use feature_geometry::FeatureGeometry;
pub use geometry_deserializer::{GeoJsonGeometryDeserializer, GeometryDeserializer};
pub use point_feature::PointFeature;
pub use point_feature_error::PointFeatureError;
