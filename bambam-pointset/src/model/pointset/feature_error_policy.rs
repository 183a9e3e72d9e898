use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// what to do when a single feature in a point set fails to build.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FeatureErrorPolicy {
    /// log the failure and continue with the remaining features
    #[default]
    Skip,
    /// stop reading and return the failure
    Abort,
}

impl std::fmt::Display for FeatureErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureErrorPolicy::Skip => write!(f, "skip"),
            FeatureErrorPolicy::Abort => write!(f, "abort"),
        }
    }
}
