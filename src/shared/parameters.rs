//! The structs used for specifying how features are computed
use crate::shared::errors::{FeatureError, FeatureResult};
#[cfg(all(feature = "py_binds", feature = "pyo3"))]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// What to do with a residue that belongs to no class of a property table
#[cfg_attr(all(feature = "py_binds", feature = "pyo3"), pyclass(eq, eq_int))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownResiduePolicy {
    /// Fail with `FeatureError::InvalidResidue`
    #[default]
    Error,
    /// Drop the residue, the encoding gets shorter than the sequence
    Skip,
}

#[cfg_attr(all(feature = "py_binds", feature = "pyo3"), pyclass(get_all, set_all))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingParameters {
    pub unknown_residues: UnknownResiduePolicy,
}

impl EncodingParameters {
    pub fn new(unknown_residues: UnknownResiduePolicy) -> Self {
        Self { unknown_residues }
    }

    pub fn skip_unknown() -> Self {
        Self::new(UnknownResiduePolicy::Skip)
    }
}

#[cfg(all(feature = "py_binds", feature = "pyo3"))]
#[pymethods]
impl EncodingParameters {
    #[new]
    pub fn py_new() -> Self {
        EncodingParameters::default()
    }

    fn __repr__(&self) -> String {
        format!(
            "EncodingParameters(unknown_residues={:?})",
            self.unknown_residues
        )
    }
}

/// Min-max rescaling target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scaling {
    /// [0, 1]
    UnitInterval,
    /// [-1, 1]
    Symmetric,
}

/// Rescale the values `start..end` of a descriptor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaledRange {
    pub start: usize,
    pub end: usize,
    pub scaling: Scaling,
}

/// A descriptor computed outside of this crate and stored as
/// `<dir>/<protein id>_<name>.txt`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecomputedSpec {
    pub name: String,
    pub dim: usize,
    #[serde(default)]
    pub scale: Option<ScaledRange>,
}

impl PrecomputedSpec {
    pub fn new(name: &str, dim: usize, scale: Option<ScaledRange>) -> Self {
        Self {
            name: name.to_string(),
            dim,
            scale,
        }
    }

    /// The scaled range must be a non-empty part of `0..dim`
    pub fn check_scale(&self) -> FeatureResult<()> {
        match self.scale {
            Some(range) if range.start >= range.end || range.end > self.dim => {
                Err(FeatureError::Configuration {
                    field: "precomputed".to_string(),
                    message: format!(
                        "Invalid scaled range {}..{} for descriptor {} (dimension {})",
                        range.start, range.end, self.name, self.dim
                    ),
                })
            }
            _ => Ok(()),
        }
    }

    /// Quasi-sequence-order descriptor (100 values)
    pub fn qs_order() -> Self {
        Self::new("QSOrder", 100, None)
    }

    /// Sequence-order coupling numbers (30 Schneider-Wrede + 30 Grantham),
    /// the Grantham half is rescaled to [0, 1]
    pub fn soc_number() -> Self {
        Self::new(
            "SOCNumber",
            60,
            Some(ScaledRange {
                start: 30,
                end: 60,
                scaling: Scaling::UnitInterval,
            }),
        )
    }

    /// Amphiphilic pseudo-amino-acid composition (lambda = 30), rescaled to [-1, 1]
    pub fn apaac() -> Self {
        Self::new(
            "APAAC",
            80,
            Some(ScaledRange {
                start: 0,
                end: 80,
                scaling: Scaling::Symmetric,
            }),
        )
    }
}

/// Which descriptors make up a feature record, and how they are computed.
/// Blocks are concatenated in this order: amino-acid composition, dipeptide
/// composition, CTD, then the precomputed descriptors in list order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureParameters {
    pub encoding: EncodingParameters,
    pub amino_acid_composition: bool,
    pub dipeptide_composition: bool,
    pub ctd: bool,
    // JSON file with a custom list of property tables (standard tables otherwise)
    pub tables: Option<PathBuf>,
    pub precomputed: Vec<PrecomputedSpec>,
    // None: use all the cores
    pub threads: Option<usize>,
}

impl Default for FeatureParameters {
    fn default() -> FeatureParameters {
        FeatureParameters {
            encoding: EncodingParameters::default(),
            amino_acid_composition: true,
            dipeptide_composition: true,
            ctd: true,
            tables: None,
            precomputed: vec![
                PrecomputedSpec::qs_order(),
                PrecomputedSpec::soc_number(),
                PrecomputedSpec::apaac(),
            ],
            threads: None,
        }
    }
}

impl FeatureParameters {
    /// Only the descriptors computed from the sequence itself
    pub fn sequence_only() -> Self {
        Self {
            precomputed: Vec::new(),
            ..Default::default()
        }
    }

    /// Load the parameters from a JSON file, missing fields take their default value
    pub fn from_file(path: &Path) -> FeatureResult<Self> {
        let content = fs::read_to_string(path)?;
        let params: FeatureParameters = serde_json::from_str(&content)?;
        params.validate()?;
        Ok(params)
    }

    pub fn save(&self, path: &Path) -> FeatureResult<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> FeatureResult<()> {
        if self.threads == Some(0) {
            return Err(FeatureError::Configuration {
                field: "threads".to_string(),
                message: "The number of threads must be greater than 0".to_string(),
            });
        }

        let mut names = HashSet::new();
        for spec in &self.precomputed {
            if spec.dim == 0 {
                return Err(FeatureError::Configuration {
                    field: "precomputed".to_string(),
                    message: format!("Descriptor {} has a dimension of 0", spec.name),
                });
            }
            if !names.insert(spec.name.as_str()) {
                return Err(FeatureError::Configuration {
                    field: "precomputed".to_string(),
                    message: format!("Descriptor {} is listed twice", spec.name),
                });
            }
            spec.check_scale()?;
        }

        if !self.amino_acid_composition
            && !self.dipeptide_composition
            && !self.ctd
            && self.precomputed.is_empty()
        {
            return Err(FeatureError::Configuration {
                field: "descriptors".to_string(),
                message: "At least one descriptor must be enabled".to_string(),
            });
        }
        Ok(())
    }
}
