//! Amino-acid and dipeptide composition
use crate::features::descriptor::Descriptor;
use crate::shared::errors::{FeatureError, FeatureResult};
use crate::shared::parameters::{EncodingParameters, UnknownResiduePolicy};
use crate::shared::sequence::{amino_acid_index, AminoAcid, ProteinRecord};
use itertools::Itertools;
use ndarray::Array1;

/// Indexes (in `AMINO_ACIDS`) of the residues of a sequence, following the
/// unknown-residue policy
fn residue_indexes(
    sequence: &AminoAcid,
    policy: UnknownResiduePolicy,
    name: &str,
) -> FeatureResult<Vec<usize>> {
    let mut indexes = Vec::with_capacity(sequence.len());
    for (ii, &aa) in sequence.seq.iter().enumerate() {
        match (amino_acid_index(aa), policy) {
            (Some(idx), _) => indexes.push(idx),
            (None, UnknownResiduePolicy::Skip) => {}
            (None, UnknownResiduePolicy::Error) => {
                return Err(FeatureError::InvalidResidue {
                    residue: aa as char,
                    position: ii + 1,
                    table: name.to_string(),
                })
            }
        }
    }
    if indexes.is_empty() {
        return Err(FeatureError::EmptySequence);
    }
    Ok(indexes)
}

/// Fraction of each of the 20 standard amino acids (20 values)
#[derive(Clone, Debug, Default)]
pub struct AminoAcidComposition {
    pub policy: UnknownResiduePolicy,
}

impl AminoAcidComposition {
    pub fn new(params: &EncodingParameters) -> Self {
        Self {
            policy: params.unknown_residues,
        }
    }

    pub fn compute_sequence(&self, sequence: &AminoAcid) -> FeatureResult<Array1<f64>> {
        let indexes = residue_indexes(sequence, self.policy, "AAC")?;
        let mut result = Array1::<f64>::zeros(20);
        for idx in &indexes {
            result[*idx] += 1.;
        }
        Ok(result / indexes.len() as f64)
    }
}

impl Descriptor for AminoAcidComposition {
    fn name(&self) -> &str {
        "AAC"
    }
    fn dim(&self) -> usize {
        20
    }
    fn compute(&self, protein: &ProteinRecord) -> FeatureResult<Array1<f64>> {
        self.compute_sequence(&protein.sequence)
    }
}

/// Fraction of each ordered pair of adjacent amino acids (400 values,
/// "AA", "AC", ..., "YY"). A single residue has no pair and gives zeros.
#[derive(Clone, Debug, Default)]
pub struct DipeptideComposition {
    pub policy: UnknownResiduePolicy,
}

impl DipeptideComposition {
    pub fn new(params: &EncodingParameters) -> Self {
        Self {
            policy: params.unknown_residues,
        }
    }

    pub fn compute_sequence(&self, sequence: &AminoAcid) -> FeatureResult<Array1<f64>> {
        let indexes = residue_indexes(sequence, self.policy, "DPC")?;
        let mut result = Array1::<f64>::zeros(400);
        if indexes.len() < 2 {
            return Ok(result);
        }
        for (a, b) in indexes.iter().tuple_windows() {
            result[20 * a + b] += 1.;
        }
        Ok(result / (indexes.len() - 1) as f64)
    }
}

impl Descriptor for DipeptideComposition {
    fn name(&self) -> &str {
        "DPC"
    }
    fn dim(&self) -> usize {
        400
    }
    fn compute(&self, protein: &ProteinRecord) -> FeatureResult<Array1<f64>> {
        self.compute_sequence(&protein.sequence)
    }
}
