use crate::model::feature::PointFeatureError;

#[derive(thiserror::Error, Debug)]
pub enum PointSetError {
    #[error("failed reading '{filepath}': {source}")]
    ReadError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failed parsing '{filepath}' as JSON: {source}")]
    JsonError {
        filepath: String,
        source: serde_json::Error,
    },
    #[error("invalid GeoJSON document: {0}")]
    InvalidDocument(String),
    #[error("failure building feature {index}: {source}")]
    Feature {
        index: usize,
        source: PointFeatureError,
    },
}
