use super::PointSetAppError;
use crate::model::pointset::FeatureErrorPolicy;
use config::Config;
use serde::{Deserialize, Serialize};

/// settings for reading point sets, typically loaded from a TOML file
/// such as
///
/// ```toml
/// error_policy = "abort"
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PointSetConfig {
    #[serde(default)]
    pub error_policy: FeatureErrorPolicy,
}

impl PointSetConfig {
    pub fn from_file(filepath: &str) -> Result<PointSetConfig, PointSetAppError> {
        let file = config::File::new(filepath, config::FileFormat::Toml);
        PointSetConfig::from_source(file, filepath)
    }

    pub fn from_toml_str(toml: &str) -> Result<PointSetConfig, PointSetAppError> {
        let source = config::File::from_str(toml, config::FileFormat::Toml);
        PointSetConfig::from_source(source, "<string>")
    }

    fn from_source<T>(source: T, name: &str) -> Result<PointSetConfig, PointSetAppError>
    where
        T: config::Source + Send + Sync + 'static,
    {
        let config = Config::builder()
            .add_source(source)
            .build()
            .map_err(|e| PointSetAppError::ConfigReadError {
                msg: format!("failed reading '{name}'"),
                source: e,
            })?;
        config
            .try_deserialize::<PointSetConfig>()
            .map_err(|e| PointSetAppError::ConfigReadError {
                msg: format!("failed deserializing '{name}' as point set configuration"),
                source: e,
            })
    }
}
