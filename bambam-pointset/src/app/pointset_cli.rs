use super::{run, PointSetAppError, PointSetConfig};
use crate::model::pointset::FeatureErrorPolicy;
use clap::{Parser, Subcommand};
use std::path::Path;

/// command line tool for loading GeoJSON point sets with structured attributes
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct PointSetCliArguments {
    /// optional TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// how to handle features that fail to build. overrides the configuration file.
    #[arg(long, global = true)]
    pub error_policy: Option<FeatureErrorPolicy>,
    /// select the point set operation to run
    #[command(subcommand)]
    pub op: PointSetOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum PointSetOperation {
    /// reads a GeoJSON file and logs feature, skip, failure and category counts
    Summary {
        /// GeoJSON FeatureCollection file
        input_file: String,
    },
    /// writes the flattened structured attributes of each feature to a CSV file,
    /// one row per attribute.
    Attributes {
        /// GeoJSON FeatureCollection file
        input_file: String,
        /// CSV file to write
        output_file: String,
    },
}

impl PointSetCliArguments {
    /// combines the configuration file (if any) with command line overrides
    pub fn build_config(&self) -> Result<PointSetConfig, PointSetAppError> {
        let mut conf = match &self.config {
            Some(filepath) => PointSetConfig::from_file(filepath)?,
            None => PointSetConfig::default(),
        };
        if let Some(policy) = self.error_policy {
            conf.error_policy = policy;
        }
        Ok(conf)
    }

    pub fn run(&self) -> Result<(), PointSetAppError> {
        let conf = self.build_config()?;
        log::debug!("running with configuration {conf:?}");
        match &self.op {
            PointSetOperation::Summary { input_file } => {
                run::run_summary(Path::new(input_file), &conf)
            }
            PointSetOperation::Attributes {
                input_file,
                output_file,
            } => run::run_attributes(Path::new(input_file), Path::new(output_file), &conf),
        }
    }
}
