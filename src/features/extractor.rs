use crate::ctd::{Ctd, PropertyRegistry};
use crate::features::composition::{AminoAcidComposition, DipeptideComposition};
use crate::features::descriptor::Descriptor;
use crate::features::precomputed::Precomputed;
use crate::shared::errors::{FeatureError, FeatureResult};
use crate::shared::parameters::FeatureParameters;
use crate::shared::sequence::ProteinRecord;
#[cfg(feature = "kdam")]
use kdam::TqdmParallelIterator;
use log::{error, info, warn};
use ndarray::{s, Array1, ArrayView1};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Feature vector of one protein
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRecord {
    pub id: String,
    pub values: Array1<f64>,
}

/// Position of a descriptor inside a feature record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorBlock {
    pub name: String,
    pub offset: usize,
    pub dim: usize,
}

/// Layout of the feature records of a run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureManifest {
    pub dim: usize,
    pub descriptors: Vec<DescriptorBlock>,
}

impl FeatureManifest {
    pub fn block(&self, name: &str) -> Option<&DescriptorBlock> {
        self.descriptors.iter().find(|b| b.name == name)
    }

    /// The values of one descriptor inside a record
    pub fn slice<'a>(&self, record: &'a FeatureRecord, name: &str) -> Option<ArrayView1<'a, f64>> {
        let block = self.block(name)?;
        if block.offset + block.dim > record.values.len() {
            return None;
        }
        Some(record.values.slice(s![block.offset..block.offset + block.dim]))
    }
}

/// Outcome of a batch: the records that could be computed and the
/// proteins that failed (with the reason)
#[derive(Debug, Default)]
pub struct BatchReport {
    pub records: Vec<FeatureRecord>,
    pub failures: Vec<(String, FeatureError)>,
}

#[derive(Default)]
pub struct FeatureExtractor {
    descriptors: Vec<Box<dyn Descriptor>>,
}

impl FeatureExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_descriptor(mut self, descriptor: impl Descriptor + 'static) -> Self {
        self.descriptors.push(Box::new(descriptor));
        self
    }

    /// Build the extractor described by the parameters. Precomputed descriptors
    /// are read from `precomputed_dir` and skipped (with a warning) without it.
    pub fn from_parameters(
        params: &FeatureParameters,
        precomputed_dir: Option<&Path>,
    ) -> FeatureResult<Self> {
        params.validate()?;
        let mut extractor = FeatureExtractor::new();
        if params.amino_acid_composition {
            extractor = extractor.with_descriptor(AminoAcidComposition::new(&params.encoding));
        }
        if params.dipeptide_composition {
            extractor = extractor.with_descriptor(DipeptideComposition::new(&params.encoding));
        }
        if params.ctd {
            let registry = match &params.tables {
                Some(path) => PropertyRegistry::from_file(path)?,
                None => PropertyRegistry::standard(),
            };
            extractor = extractor.with_descriptor(Ctd::new(registry, &params.encoding));
        }
        match precomputed_dir {
            Some(dir) => {
                for spec in &params.precomputed {
                    extractor = extractor.with_descriptor(Precomputed::new(spec.clone(), dir));
                }
            }
            None if !params.precomputed.is_empty() => {
                warn!(
                    "No directory given for the precomputed descriptors, {} descriptor(s) ignored",
                    params.precomputed.len()
                );
            }
            None => {}
        }

        if extractor.descriptors.is_empty() {
            return Err(FeatureError::Configuration {
                field: "descriptors".to_string(),
                message: "No descriptor left to compute".to_string(),
            });
        }
        Ok(extractor)
    }

    pub fn dim(&self) -> usize {
        self.descriptors.iter().map(|d| d.dim()).sum()
    }

    pub fn manifest(&self) -> FeatureManifest {
        let mut offset = 0;
        let descriptors = self
            .descriptors
            .iter()
            .map(|d| {
                let block = DescriptorBlock {
                    name: d.name().to_string(),
                    offset,
                    dim: d.dim(),
                };
                offset += d.dim();
                block
            })
            .collect();
        FeatureManifest {
            dim: offset,
            descriptors,
        }
    }

    /// Concatenate all the descriptors of one protein
    pub fn extract(&self, protein: &ProteinRecord) -> FeatureResult<FeatureRecord> {
        ProteinRecord::check_identifier(&protein.id)?;
        let mut values = Vec::with_capacity(self.dim());
        for descriptor in &self.descriptors {
            let block = descriptor.compute(protein)?;
            if block.len() != descriptor.dim() {
                return Err(FeatureError::DimensionMismatch {
                    name: descriptor.name().to_string(),
                    expected: descriptor.dim(),
                    found: block.len(),
                });
            }
            values.extend(block.iter());
        }
        Ok(FeatureRecord {
            id: protein.id.clone(),
            values: Array1::from_vec(values),
        })
    }

    /// Extract the features of all the proteins (in parallel). A protein that
    /// fails is logged and reported, the others are not affected.
    /// Records keep the order of `proteins`. Only the first protein with a
    /// given identifier is encoded, the next ones are reported as failures.
    pub fn extract_all(&self, proteins: &[ProteinRecord]) -> BatchReport {
        info!(
            "Extracting {} features for {} proteins",
            self.dim(),
            proteins.len()
        );

        let mut seen = HashSet::new();
        let duplicated: Vec<bool> = proteins
            .iter()
            .map(|p| !seen.insert(p.id.as_str()))
            .collect();

        let encode = |(protein, &dup): (&ProteinRecord, &bool)| {
            if dup {
                return Err(FeatureError::Parse(format!(
                    "Duplicated protein identifier '{}'",
                    protein.id
                )));
            }
            self.extract(protein)
        };

        #[cfg(feature = "kdam")]
        let results: Vec<FeatureResult<FeatureRecord>> = proteins
            .par_iter()
            .zip(duplicated.par_iter())
            .tqdm()
            .map(encode)
            .collect();
        #[cfg(not(feature = "kdam"))]
        let results: Vec<FeatureResult<FeatureRecord>> = proteins
            .par_iter()
            .zip(duplicated.par_iter())
            .map(encode)
            .collect();

        let mut report = BatchReport::default();
        for (protein, result) in proteins.iter().zip(results) {
            match result {
                Ok(record) => report.records.push(record),
                Err(e) if e.is_local() => {
                    warn!("Skipping protein {}: {}", protein.id, e);
                    report.failures.push((protein.id.clone(), e));
                }
                Err(e) => {
                    // not the protein's fault (I/O, configuration...)
                    error!("Failed to encode protein {}: {}", protein.id, e);
                    report.failures.push((protein.id.clone(), e));
                }
            }
        }
        info!(
            "{} proteins encoded, {} failed",
            report.records.len(),
            report.failures.len()
        );
        report
    }
}
