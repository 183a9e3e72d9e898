use super::{PointSetAppError, PointSetConfig};
use crate::model::{feature::PointFeature, pointset::PointSet};
use itertools::Itertools;
use kdam::tqdm;
use std::path::Path;

pub const ATTRIBUTE_CSV_HEADER: [&str; 7] = [
    "id",
    "lat",
    "lon",
    "geometry_type",
    "category",
    "name",
    "magnitude",
];

/// loads a point set and logs a summary of its contents.
pub fn run_summary(input_file: &Path, conf: &PointSetConfig) -> Result<(), PointSetAppError> {
    let point_set = PointSet::from_file(input_file, conf.error_policy)?;
    log::info!(
        "{:?}: {} features, {} non-feature nodes skipped, {} features failed",
        input_file,
        point_set.len(),
        point_set.skipped(),
        point_set.failed()
    );
    log::info!("categories: [{}]", point_set.categories().iter().join(", "));
    Ok(())
}

/// loads a point set and writes one CSV row per (feature, attribute) pair.
pub fn run_attributes(
    input_file: &Path,
    output_file: &Path,
    conf: &PointSetConfig,
) -> Result<(), PointSetAppError> {
    let point_set = PointSet::from_file(input_file, conf.error_policy)?;
    let filepath = output_file.to_string_lossy().to_string();
    let mut writer =
        csv::Writer::from_path(output_file).map_err(|source| PointSetAppError::CsvWriteError {
            filepath: filepath.clone(),
            source,
        })?;
    writer
        .write_record(ATTRIBUTE_CSV_HEADER)
        .map_err(|source| PointSetAppError::CsvWriteError {
            filepath: filepath.clone(),
            source,
        })?;

    let write_iter = tqdm!(
        point_set.features().iter(),
        desc = "write attributes",
        total = point_set.len()
    );
    let mut n_rows = 0;
    for feature in write_iter {
        for row in attribute_rows(feature) {
            writer
                .write_record(&row)
                .map_err(|source| PointSetAppError::CsvWriteError {
                    filepath: filepath.clone(),
                    source,
                })?;
            n_rows += 1;
        }
    }
    eprintln!();
    writer
        .flush()
        .map_err(|e| PointSetAppError::CsvWriteError {
            filepath: filepath.clone(),
            source: csv::Error::from(e),
        })?;
    log::info!("wrote {n_rows} attribute rows to {filepath}");
    Ok(())
}

/// CSV rows for each attribute of a feature, matching [`ATTRIBUTE_CSV_HEADER`]
pub fn attribute_rows(feature: &PointFeature) -> Vec<Vec<String>> {
    let id = feature.id().unwrap_or_default().to_string();
    let geometry_type = feature
        .geometry()
        .map(|g| g.geometry_type())
        .unwrap_or_default();
    feature
        .attributes()
        .iter()
        .map(|a| {
            vec![
                id.clone(),
                feature.lat().to_string(),
                feature.lon().to_string(),
                geometry_type.to_string(),
                a.category.clone(),
                a.name.clone(),
                a.magnitude.to_string(),
            ]
        })
        .collect_vec()
}
