use super::{FeatureErrorPolicy, PointSetError};
use crate::model::feature::PointFeature;
use itertools::Itertools;
use rayon::prelude::*;
use serde_json::Value;
use std::path::Path;

/// the features read from a GeoJSON document along with counts of the nodes
/// that were not used.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    features: Vec<PointFeature>,
    skipped: usize,
    failed: usize,
}

impl PointSet {
    /// reads a GeoJSON file into a [`PointSet`]. see [`PointSet::from_json`].
    pub fn from_file(path: &Path, policy: FeatureErrorPolicy) -> Result<PointSet, PointSetError> {
        let filepath = path.to_string_lossy().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| PointSetError::ReadError {
            filepath: filepath.clone(),
            source,
        })?;
        let document: Value = serde_json::from_str(&contents)
            .map_err(|source| PointSetError::JsonError { filepath, source })?;
        PointSet::from_json(&document, policy)
    }

    /// scans a GeoJSON document for features. the document may be a FeatureCollection,
    /// an array of nodes or a single Feature. nodes that are not Features are counted
    /// as skipped. features that fail to build are handled by the `policy`.
    pub fn from_json(
        document: &Value,
        policy: FeatureErrorPolicy,
    ) -> Result<PointSet, PointSetError> {
        let nodes = feature_nodes(document)?;
        log::debug!("building {} feature nodes with policy '{policy}'", nodes.len());

        let results = nodes
            .par_iter()
            .map(|node| PointFeature::from_json(node))
            .collect::<Vec<_>>();

        let mut point_set = PointSet::default();
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(Some(feature)) => point_set.features.push(feature),
                Ok(None) => point_set.skipped += 1,
                Err(source) => match policy {
                    FeatureErrorPolicy::Abort => {
                        return Err(PointSetError::Feature { index, source })
                    }
                    FeatureErrorPolicy::Skip => {
                        log::warn!("skipping feature {index}: {source}");
                        point_set.failed += 1;
                    }
                },
            }
        }
        log::debug!(
            "point set has {} features, skipped {} nodes, {} failures",
            point_set.features.len(),
            point_set.skipped,
            point_set.failed
        );
        Ok(point_set)
    }

    pub fn features(&self) -> &[PointFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// number of nodes that were not GeoJSON Features
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// number of features that failed to build under [`FeatureErrorPolicy::Skip`]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// unique attribute categories across all features in first-seen order
    pub fn categories(&self) -> Vec<String> {
        self.features
            .iter()
            .flat_map(|f| f.attributes().iter().map(|a| a.category.clone()))
            .unique()
            .collect_vec()
    }
}

fn feature_nodes(document: &Value) -> Result<&[Value], PointSetError> {
    match document {
        Value::Array(nodes) => Ok(nodes.as_slice()),
        Value::Object(obj) => {
            let is_collection = obj
                .get("type")
                .and_then(Value::as_str)
                .map(|t| t.eq_ignore_ascii_case("FeatureCollection"))
                .unwrap_or(false);
            if !is_collection {
                return Ok(std::slice::from_ref(document));
            }
            match obj.get("features") {
                Some(Value::Array(nodes)) => Ok(nodes.as_slice()),
                Some(other) => Err(PointSetError::InvalidDocument(format!(
                    "FeatureCollection 'features' must be an array, found {other}"
                ))),
                None => Err(PointSetError::InvalidDocument(String::from(
                    "FeatureCollection is missing 'features' array",
                ))),
            }
        }
        other => Err(PointSetError::InvalidDocument(format!(
            "expected a FeatureCollection, Feature, or array of Features, found {other}"
        ))),
    }
}
