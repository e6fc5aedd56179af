//! Descriptors computed by external tools (quasi-sequence order, sequence-order
//! coupling numbers, amphiphilic pseudo-amino-acid composition, ...).
//! They are read from one flat file per protein, `<dir>/<id>_<name>.txt`,
//! containing a single tab-separated line: the identifier then the values.
use crate::features::descriptor::Descriptor;
use crate::shared::errors::{FeatureError, FeatureResult};
use crate::shared::parameters::PrecomputedSpec;
use crate::shared::sequence::ProteinRecord;
use crate::shared::utils::rescale_range;
use log::debug;
use ndarray::Array1;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct Precomputed {
    pub spec: PrecomputedSpec,
    pub directory: PathBuf,
}

impl Precomputed {
    pub fn new(spec: PrecomputedSpec, directory: &Path) -> Self {
        Self {
            spec,
            directory: directory.to_path_buf(),
        }
    }

    pub fn path(&self, id: &str) -> PathBuf {
        self.directory.join(format!("{}_{}.txt", id, self.spec.name))
    }

    /// Parse the content of a descriptor file (without rescaling)
    pub fn parse(&self, content: &str) -> FeatureResult<Array1<f64>> {
        let line = content
            .lines()
            .find(|l| !l.trim().is_empty())
            .ok_or_else(|| FeatureError::Parse(format!("Empty {} file", self.spec.name)))?;

        let values = line
            .trim_end()
            .split('\t')
            .skip(1) // protein identifier
            .map(|v| {
                v.trim().parse::<f64>().map_err(|e| {
                    FeatureError::Parse(format!(
                        "Invalid value '{}' in {} file: {}",
                        v, self.spec.name, e
                    ))
                })
            })
            .collect::<FeatureResult<Vec<f64>>>()?;

        if values.len() != self.spec.dim {
            return Err(FeatureError::DimensionMismatch {
                name: self.spec.name.clone(),
                expected: self.spec.dim,
                found: values.len(),
            });
        }
        Ok(Array1::from_vec(values))
    }

    pub fn load(&self, id: &str) -> FeatureResult<Array1<f64>> {
        self.spec.check_scale()?;
        ProteinRecord::check_identifier(id)?;
        let path = self.path(id);
        if !path.exists() {
            return Err(FeatureError::MissingFeatureFile(path));
        }
        debug!("Loading {} for {} from {}", self.spec.name, id, path.display());
        let mut values = self.parse(&fs::read_to_string(&path)?)?;
        if let Some(range) = &self.spec.scale {
            rescale_range(&mut values, range);
        }
        Ok(values)
    }
}

impl Descriptor for Precomputed {
    fn name(&self) -> &str {
        &self.spec.name
    }
    fn dim(&self) -> usize {
        self.spec.dim
    }
    fn compute(&self, protein: &ProteinRecord) -> FeatureResult<Array1<f64>> {
        self.load(&protein.id)
    }
}
