pub mod feature;
pub mod pointset;
