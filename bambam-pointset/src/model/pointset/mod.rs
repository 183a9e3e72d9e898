mod feature_error_policy;
mod point_set;
mod point_set_error;

pub use feature_error_policy::FeatureErrorPolicy;
pub use point_set::PointSet;
pub use point_set_error::PointSetError;
