use super::{
    json_ops, AttributeData, FeatureGeometry, GeoJsonGeometryDeserializer, GeometryDeserializer,
    PointFeatureError,
};
use geo::{Geometry, Polygon};
use serde_json::Value;

pub const FEATURE_TYPE: &str = "Feature";
pub const STRUCTURED_PROPERTIES_KEY: &str = "structured";

/// a GeoJSON Feature reduced to a single POINT or POLYGON geometry, a cached
/// representative coordinate and a flat list of categorized attributes.
///
/// the cached `lat`/`lon` pair is always the centroid of the current geometry.
/// the only way to change the geometry is [`PointFeature::set_geometry`], which
/// recomputes the coordinate in the same step.
#[derive(Clone, Debug, PartialEq)]
pub struct PointFeature {
    id: Option<String>,
    geometry: Option<FeatureGeometry>,
    lat: f64,
    lon: f64,
    attributes: Vec<AttributeData>,
}

impl Default for PointFeature {
    fn default() -> Self {
        PointFeature::new(None)
    }
}

impl PointFeature {
    /// creates a feature with no geometry and no attributes, to be filled in with
    /// [`PointFeature::set_geometry`] and [`PointFeature::add_attribute`].
    pub fn new(id: Option<String>) -> PointFeature {
        PointFeature {
            id,
            geometry: None,
            lat: f64::NAN,
            lon: f64::NAN,
            attributes: vec![],
        }
    }

    /// creates a fully-formed feature from a raw geometry and its attributes.
    pub fn with_attributes(
        id: Option<String>,
        geometry: Geometry<f64>,
        attributes: Vec<AttributeData>,
    ) -> Result<PointFeature, PointFeatureError> {
        let mut feature = PointFeature::new(id);
        feature.set_geometry(Some(geometry))?;
        feature.attributes = attributes;
        Ok(feature)
    }

    /// builds a feature from a parsed GeoJSON Feature node using the default
    /// GeoJSON geometry deserializer. see [`PointFeature::from_json_with`].
    pub fn from_json(node: &Value) -> Result<Option<PointFeature>, PointFeatureError> {
        PointFeature::from_json_with(node, &GeoJsonGeometryDeserializer)
    }

    /// builds a feature from a parsed GeoJSON Feature node.
    ///
    /// nodes that are not Features are not errors: if the node is not an object,
    /// its `type` is not "Feature" (ignoring case) or it has no `properties` object,
    /// the result is `Ok(None)`.
    ///
    /// # Arguments
    ///
    /// * `node` - a single GeoJSON Feature as a JSON value
    /// * `deserializer` - converts the `geometry` member into a geo-types geometry
    ///
    /// # Returns
    ///
    /// * the feature, `None` if the node is not a Feature, or the geometry failure
    pub fn from_json_with(
        node: &Value,
        deserializer: &dyn GeometryDeserializer,
    ) -> Result<Option<PointFeature>, PointFeatureError> {
        let feature = match node.as_object() {
            Some(obj) => obj,
            None => return Ok(None),
        };
        let is_feature = feature
            .get("type")
            .map(|t| json_ops::text_eq_ignore_case(t, FEATURE_TYPE))
            .unwrap_or(false);
        if !is_feature {
            return Ok(None);
        }
        let properties = match feature.get("properties").and_then(Value::as_object) {
            Some(props) => props,
            None => return Ok(None),
        };

        let attributes = properties
            .get(STRUCTURED_PROPERTIES_KEY)
            .map(flatten_structured)
            .unwrap_or_default();

        let id = feature.get("id").map(json_ops::as_text);

        let geometry = match feature.get("geometry") {
            Some(g) if g.is_object() => Some(deserializer.parse_geometry(g)?),
            _ => None,
        };

        let mut result = PointFeature::new(id);
        result.set_geometry(geometry)?;
        result.attributes = attributes;
        Ok(Some(result))
    }

    /// replaces the geometry of this feature, re-validating it and recomputing the
    /// cached representative coordinate. on failure the feature is left unchanged.
    pub fn set_geometry(
        &mut self,
        geometry: Option<Geometry<f64>>,
    ) -> Result<(), PointFeatureError> {
        let normalized = FeatureGeometry::normalize(geometry)?;
        let (lat, lon) = normalized.representative_lat_lon();
        self.geometry = Some(normalized);
        self.lat = lat;
        self.lon = lon;
        Ok(())
    }

    pub fn add_attribute(&mut self, attribute: AttributeData) {
        self.attributes.push(attribute);
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn geometry(&self) -> Option<&FeatureGeometry> {
        self.geometry.as_ref()
    }

    /// the geometry as a POLYGON, or None if it is a POINT or not yet set
    pub fn polygon(&self) -> Option<&Polygon<f64>> {
        self.geometry.as_ref().and_then(FeatureGeometry::as_polygon)
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn attributes(&self) -> &[AttributeData] {
        &self.attributes
    }
}

/// flattens `{category: {name: magnitude}}` into attributes in source field order.
/// a non-object `structured` value produces no attributes, as does a non-object
/// category value.
fn flatten_structured(structured: &Value) -> Vec<AttributeData> {
    let categories = match structured.as_object() {
        Some(obj) => obj,
        None => return vec![],
    };
    let mut attributes = vec![];
    for (category, names) in categories.iter() {
        let names = match names.as_object() {
            Some(obj) => obj,
            None => continue,
        };
        for (name, value) in names.iter() {
            let magnitude = json_ops::as_magnitude(value);
            attributes.push(AttributeData::new(category, name, magnitude));
        }
    }
    attributes
}

#[cfg(test)]
mod test {
    use super::PointFeature;
    use crate::model::feature::{
        AttributeData, FeatureGeometry, GeometryDeserializer, PointFeatureError,
    };
    use geo::{point, polygon, Geometry, MultiPolygon};
    use serde_json::{json, Value};

    fn point_feature_json(structured: Option<Value>) -> Value {
        let mut properties = json!({"name": "test"});
        if let Some(s) = structured {
            properties["structured"] = s;
        }
        json!({
            "type": "Feature",
            "id": "abc",
            "properties": properties,
            "geometry": {"type": "Point", "coordinates": [-105.0, 40.0]}
        })
    }

    #[test]
    fn test_flattening_preserves_order() {
        let structured = json!({
            "categoryA": {"attr1": 3, "attr2": 5},
            "categoryB": {"attr1": 7}
        });
        let feature = PointFeature::from_json(&point_feature_json(Some(structured)))
            .expect("should not fail")
            .expect("should be a feature");
        let expected = vec![
            AttributeData::new("categoryA", "attr1", 3),
            AttributeData::new("categoryA", "attr2", 5),
            AttributeData::new("categoryB", "attr1", 7),
        ];
        assert_eq!(feature.attributes(), expected.as_slice());
    }

    #[test]
    fn test_field_order_is_source_order_not_sorted() {
        let structured = json!({
            "zoo": {"zebra": 1, "aardvark": 2},
            "bank": {"tellers": 3}
        });
        let feature = PointFeature::from_json(&point_feature_json(Some(structured)))
            .expect("should not fail")
            .expect("should be a feature");
        let names = feature
            .attributes()
            .iter()
            .map(|a| format!("{}.{}", a.category, a.name))
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["zoo.zebra", "zoo.aardvark", "bank.tellers"]);
    }

    #[test]
    fn test_missing_structured_properties() {
        let feature = PointFeature::from_json(&point_feature_json(None))
            .expect("should not fail")
            .expect("should be a feature");
        assert!(feature.attributes().is_empty());
        assert_eq!(feature.lat(), 40.0);
        assert_eq!(feature.lon(), -105.0);
    }

    #[test]
    fn test_non_object_structured_properties() {
        let feature = PointFeature::from_json(&point_feature_json(Some(json!([1, 2, 3]))))
            .expect("should not fail")
            .expect("should be a feature");
        assert!(feature.attributes().is_empty());
    }

    #[test]
    fn test_non_object_category_is_ignored() {
        let structured = json!({"a": 5, "b": {"x": 1}});
        let feature = PointFeature::from_json(&point_feature_json(Some(structured)))
            .expect("should not fail")
            .expect("should be a feature");
        assert_eq!(feature.attributes(), &[AttributeData::new("b", "x", 1)]);
    }

    #[test]
    fn test_id_handling() {
        let with_id = PointFeature::from_json(&point_feature_json(None))
            .expect("should not fail")
            .expect("should be a feature");
        assert_eq!(with_id.id(), Some("abc"));

        let mut node = point_feature_json(None);
        node.as_object_mut()
            .expect("test fixture is an object")
            .remove("id");
        let without_id = PointFeature::from_json(&node)
            .expect("should not fail")
            .expect("should be a feature");
        assert_eq!(without_id.id(), None);

        node["id"] = json!(17);
        let numeric_id = PointFeature::from_json(&node)
            .expect("should not fail")
            .expect("should be a feature");
        assert_eq!(numeric_id.id(), Some("17"));

        node["id"] = Value::Null;
        let null_id = PointFeature::from_json(&node)
            .expect("should not fail")
            .expect("should be a feature");
        assert_eq!(null_id.id(), Some("null"), "an explicit null id is present");

        node["id"] = json!({"a": 1});
        let object_id = PointFeature::from_json(&node)
            .expect("should not fail")
            .expect("should be a feature");
        assert_eq!(object_id.id(), Some(""));
    }

    #[test]
    fn test_non_feature_nodes() {
        let polygon_node = json!({
            "type": "Polygon",
            "properties": {},
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
        });
        let not_object = json!([1, 2, 3]);
        let no_type = json!({"properties": {}});
        let no_properties = json!({"type": "Feature", "geometry": null});
        let array_properties = json!({"type": "Feature", "properties": []});
        for node in [polygon_node, not_object, no_type, no_properties, array_properties] {
            let result = PointFeature::from_json(&node).expect("should not fail");
            assert!(result.is_none(), "expected None for {}", node);
        }
    }

    #[test]
    fn test_feature_type_is_case_insensitive() {
        let mut node = point_feature_json(None);
        node["type"] = json!("FEATURE");
        let result = PointFeature::from_json(&node).expect("should not fail");
        assert!(result.is_some());
    }

    #[test]
    fn test_null_geometry_is_unsupported() {
        let mut node = point_feature_json(None);
        node["geometry"] = Value::Null;
        let result = PointFeature::from_json(&node);
        assert!(matches!(
            result,
            Err(PointFeatureError::UnsupportedGeometry(_))
        ));
    }

    #[test]
    fn test_linestring_geometry_is_unsupported() {
        let mut node = point_feature_json(None);
        node["geometry"] = json!({"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]});
        let result = PointFeature::from_json(&node);
        assert!(matches!(
            result,
            Err(PointFeatureError::UnsupportedGeometry(_))
        ));
    }

    #[test]
    fn test_empty_multipolygon_feature() {
        let mut node = point_feature_json(None);
        node["geometry"] = json!({"type": "MultiPolygon", "coordinates": []});
        let result = PointFeature::from_json(&node);
        assert_eq!(result, Err(PointFeatureError::EmptyGeometry));
    }

    #[test]
    fn test_multipolygon_feature_reduced_to_first_member() {
        let mut node = point_feature_json(None);
        node["geometry"] = json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]]],
                [[[10.0, 10.0], [14.0, 10.0], [14.0, 14.0], [10.0, 14.0], [10.0, 10.0]]]
            ]
        });
        let feature = PointFeature::from_json(&node)
            .expect("should not fail")
            .expect("should be a feature");
        let polygon = feature.polygon().expect("should hold a polygon");
        assert_eq!(polygon.exterior().0.len(), 5);
        assert_eq!(feature.lat(), 1.0);
        assert_eq!(feature.lon(), 1.0);
    }

    #[test]
    fn test_custom_deserializer() {
        struct Fixed;
        impl GeometryDeserializer for Fixed {
            fn parse_geometry(&self, _node: &Value) -> Result<Geometry<f64>, PointFeatureError> {
                Ok(Geometry::Point(point! { x: 1.0, y: 2.0 }))
            }
        }
        let feature = PointFeature::from_json_with(&point_feature_json(None), &Fixed)
            .expect("should not fail")
            .expect("should be a feature");
        assert_eq!((feature.lat(), feature.lon()), (2.0, 1.0));
    }

    #[test]
    fn test_set_geometry_refreshes_coordinate() {
        let mut feature = PointFeature::new(Some(String::from("f1")));
        assert!(feature.geometry().is_none());
        assert!(feature.lat().is_nan());

        feature
            .set_geometry(Some(Geometry::Point(point! { x: 3.0, y: 4.0 })))
            .expect("point should be valid");
        assert_eq!((feature.lat(), feature.lon()), (4.0, 3.0));
        assert!(feature.polygon().is_none());

        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 4.0, y: 0.0),
            (x: 4.0, y: 4.0),
            (x: 0.0, y: 4.0),
            (x: 0.0, y: 0.0),
        ];
        feature
            .set_geometry(Some(Geometry::Polygon(square.clone())))
            .expect("polygon should be valid");
        assert_eq!((feature.lat(), feature.lon()), (2.0, 2.0));
        assert_eq!(feature.polygon(), Some(&square));
    }

    #[test]
    fn test_failed_set_geometry_keeps_previous_state() {
        let mut feature = PointFeature::new(None);
        feature
            .set_geometry(Some(Geometry::Point(point! { x: 3.0, y: 4.0 })))
            .expect("point should be valid");
        let result = feature.set_geometry(Some(Geometry::MultiPolygon(MultiPolygon(vec![]))));
        assert_eq!(result, Err(PointFeatureError::EmptyGeometry));
        assert_eq!(
            feature.geometry(),
            Some(&FeatureGeometry::Point(point! { x: 3.0, y: 4.0 }))
        );
        assert_eq!((feature.lat(), feature.lon()), (4.0, 3.0));
    }

    #[test]
    fn test_add_attribute_appends_duplicates() {
        let mut feature = PointFeature::with_attributes(
            None,
            Geometry::Point(point! { x: 0.0, y: 0.0 }),
            vec![AttributeData::new("jobs", "retail", 2)],
        )
        .expect("point should be valid");
        feature.add_attribute(AttributeData::new("jobs", "retail", 5));
        assert_eq!(
            feature.attributes(),
            &[
                AttributeData::new("jobs", "retail", 2),
                AttributeData::new("jobs", "retail", 5),
            ]
        );
    }
}
