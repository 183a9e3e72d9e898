mod pointset_app_error;
mod pointset_cli;
mod pointset_config;
pub mod run;

pub use pointset_app_error::PointSetAppError;
pub use pointset_cli::{PointSetCliArguments, PointSetOperation};
pub use pointset_config::PointSetConfig;
