// Readers and writers: FASTA input, per-protein feature files and the manifest

use crate::features::{FeatureManifest, FeatureRecord};
use crate::shared::errors::{FeatureError, FeatureResult};
use crate::shared::sequence::ProteinRecord;
use bio::io::fasta;
use csv::{ReaderBuilder, WriterBuilder};
use log::info;
use ndarray::Array1;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "features.json";

/// Read all the proteins of a FASTA stream. Sequences are not validated here,
/// that's the job of the descriptors (so one bad protein doesn't stop a batch).
pub fn parse_fasta<R: Read>(reader: R) -> FeatureResult<Vec<ProteinRecord>> {
    let mut proteins = Vec::new();
    for record in fasta::Reader::new(reader).records() {
        let record = record?;
        let id = ProteinRecord::identifier_from_header(record.id());
        if id.is_empty() {
            return Err(FeatureError::Parse(
                "FASTA record without identifier".to_string(),
            ));
        }
        proteins.push(ProteinRecord::new(
            &id,
            &String::from_utf8_lossy(record.seq()),
        ));
    }
    let non_standard = proteins
        .iter()
        .filter(|p| !p.sequence.is_standard())
        .count();
    if non_standard > 0 {
        info!(
            "{} of {} proteins hold non-standard residues",
            non_standard,
            proteins.len()
        );
    }
    Ok(proteins)
}

pub fn read_fasta(path: &Path) -> FeatureResult<Vec<ProteinRecord>> {
    parse_fasta(File::open(path)?)
}

/// Path of the feature file of a protein
pub fn feature_path(directory: &Path, id: &str) -> PathBuf {
    directory.join(format!("{}.tsv", id))
}

/// Write a record as a single tab-separated row (identifier, values...)
pub fn write_feature_record(directory: &Path, record: &FeatureRecord) -> FeatureResult<PathBuf> {
    ProteinRecord::check_identifier(&record.id)?;
    let path = feature_path(directory, &record.id);
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(&path)?;
    writer.write_record(
        std::iter::once(record.id.clone()).chain(record.values.iter().map(f64::to_string)),
    )?;
    writer.flush()?;
    Ok(path)
}

pub fn read_feature_record(path: &Path) -> FeatureResult<FeatureRecord> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path)?;
    let row = reader
        .records()
        .next()
        .ok_or_else(|| FeatureError::Parse(format!("Empty feature file {}", path.display())))??;

    let mut fields = row.iter();
    let id = fields
        .next()
        .ok_or_else(|| FeatureError::Parse(format!("Empty feature file {}", path.display())))?
        .to_string();
    let values = fields
        .map(|v| {
            v.parse::<f64>()
                .map_err(|e| FeatureError::Parse(format!("Invalid value '{}': {}", v, e)))
        })
        .collect::<FeatureResult<Vec<f64>>>()?;
    Ok(FeatureRecord {
        id,
        values: Array1::from_vec(values),
    })
}

pub fn write_manifest(directory: &Path, manifest: &FeatureManifest) -> FeatureResult<PathBuf> {
    let path = directory.join(MANIFEST_FILE);
    fs::write(&path, serde_json::to_string_pretty(manifest)?)?;
    Ok(path)
}

pub fn read_manifest(directory: &Path) -> FeatureResult<FeatureManifest> {
    let content = fs::read_to_string(directory.join(MANIFEST_FILE))?;
    Ok(serde_json::from_str(&content)?)
}
