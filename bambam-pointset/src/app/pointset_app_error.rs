use crate::model::pointset::PointSetError;

#[derive(thiserror::Error, Debug)]
pub enum PointSetAppError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error(transparent)]
    PointSetError(#[from] PointSetError),
    #[error("failure writing to file {filepath}: {source}")]
    CsvWriteError { filepath: String, source: csv::Error },
}
