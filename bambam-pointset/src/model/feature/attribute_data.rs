/// a single (category, name, magnitude) entry flattened from the
/// `properties.structured` object of a GeoJSON Feature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributeData {
    pub category: String,
    pub name: String,
    pub magnitude: i32,
}

impl AttributeData {
    pub fn new(category: &str, name: &str, magnitude: i32) -> AttributeData {
        AttributeData {
            category: category.to_string(),
            name: name.to_string(),
            magnitude,
        }
    }
}

impl std::fmt::Display for AttributeData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}={}", self.category, self.name, self.magnitude)
    }
}
