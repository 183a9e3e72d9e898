use super::PointFeatureError;
use geo::{Centroid, Geometry, HasDimensions, Point, Polygon};

/// the canonical geometry held by a [`super::PointFeature`]. any GeoJSON
/// geometry accepted by the feature builder is reduced to one of these
/// two shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureGeometry {
    Point(Point<f64>),
    Polygon(Polygon<f64>),
}

impl FeatureGeometry {
    /// validates a raw geometry and collapses it into a [`FeatureGeometry`].
    ///
    /// - POINT and POLYGON geometries are kept as-is. POLYGONs are not tested
    ///   for emptiness here, only MULTIPOLYGONs are.
    /// - MULTIPOLYGON geometries keep only their first member polygon. a
    ///   MULTIPOLYGON with no (non-empty) members is a [`PointFeatureError::EmptyGeometry`].
    /// - anything else, including a missing geometry, is an
    ///   [`PointFeatureError::UnsupportedGeometry`].
    ///
    /// # Arguments
    ///
    /// * `geometry` - geometry produced by some GeometryDeserializer, if any
    ///
    /// # Returns
    ///
    /// * the canonical geometry, or the validation failure
    pub fn normalize(
        geometry: Option<Geometry<f64>>,
    ) -> Result<FeatureGeometry, PointFeatureError> {
        match geometry {
            Some(Geometry::Point(p)) => Ok(FeatureGeometry::Point(p)),
            Some(Geometry::Polygon(p)) => Ok(FeatureGeometry::Polygon(p)),
            Some(Geometry::MultiPolygon(mp)) => {
                if mp.is_empty() {
                    return Err(PointFeatureError::EmptyGeometry);
                }
                let n_members = mp.0.len();
                if n_members > 1 {
                    log::debug!(
                        "MULTIPOLYGON has {n_members} member polygons, keeping only the first"
                    );
                }
                let first = mp
                    .0
                    .into_iter()
                    .next()
                    .ok_or(PointFeatureError::EmptyGeometry)?;
                Ok(FeatureGeometry::Polygon(first))
            }
            Some(other) => Err(PointFeatureError::UnsupportedGeometry(
                geometry_type_name(&other).to_string(),
            )),
            None => Err(PointFeatureError::UnsupportedGeometry(String::from("NULL"))),
        }
    }

    /// centroid of this geometry as a `(lat, lon)` pair. an empty POLYGON
    /// has no centroid and yields `(NaN, NaN)`.
    pub fn representative_lat_lon(&self) -> (f64, f64) {
        match self.centroid() {
            Some(c) => (c.y(), c.x()),
            None => (f64::NAN, f64::NAN),
        }
    }

    pub fn centroid(&self) -> Option<Point<f64>> {
        match self {
            FeatureGeometry::Point(p) => Some(p.centroid()),
            FeatureGeometry::Polygon(p) => p.centroid(),
        }
    }

    pub fn as_point(&self) -> Option<&Point<f64>> {
        match self {
            FeatureGeometry::Point(p) => Some(p),
            FeatureGeometry::Polygon(_) => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon<f64>> {
        match self {
            FeatureGeometry::Point(_) => None,
            FeatureGeometry::Polygon(p) => Some(p),
        }
    }

    pub fn geometry_type(&self) -> &'static str {
        match self {
            FeatureGeometry::Point(_) => "POINT",
            FeatureGeometry::Polygon(_) => "POLYGON",
        }
    }
}

impl From<FeatureGeometry> for Geometry<f64> {
    fn from(value: FeatureGeometry) -> Self {
        match value {
            FeatureGeometry::Point(p) => Geometry::Point(p),
            FeatureGeometry::Polygon(p) => Geometry::Polygon(p),
        }
    }
}

impl std::fmt::Display for FeatureGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.geometry_type())
    }
}

fn geometry_type_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "POINT",
        Geometry::Line(_) => "LINE",
        Geometry::LineString(_) => "LINESTRING",
        Geometry::Polygon(_) => "POLYGON",
        Geometry::MultiPoint(_) => "MULTIPOINT",
        Geometry::MultiLineString(_) => "MULTILINESTRING",
        Geometry::MultiPolygon(_) => "MULTIPOLYGON",
        Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        Geometry::Rect(_) => "RECT",
        Geometry::Triangle(_) => "TRIANGLE",
    }
}
