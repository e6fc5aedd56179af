use crate::ctd::descriptors::{composition, distribution, transition};
use crate::ctd::encoding::encode_class;
use crate::ctd::properties::{PropertyRegistry, PropertyTable};
use crate::shared::errors::FeatureResult;
use crate::shared::parameters::{EncodingParameters, UnknownResiduePolicy};
use crate::shared::sequence::AminoAcid;
use ndarray::Array1;

/// Number of values produced by one property table:
/// composition (3), transition (3), distribution (15)
pub const VALUES_PER_TABLE: usize = 21;

const DISTRIBUTION_LABELS: [&str; 5] = ["first", "q25", "q50", "q75", "last"];

/// CTD encoder over an explicit, ordered registry of property tables
#[derive(Clone, Debug, Default)]
pub struct Ctd {
    pub registry: PropertyRegistry,
    pub policy: UnknownResiduePolicy,
}

impl Ctd {
    pub fn new(registry: PropertyRegistry, params: &EncodingParameters) -> Ctd {
        Ctd {
            registry,
            policy: params.unknown_residues,
        }
    }

    pub fn dim(&self) -> usize {
        VALUES_PER_TABLE * self.registry.len()
    }

    /// Composition, transition then distribution for a single table
    pub fn encode_table(
        &self,
        sequence: &AminoAcid,
        table: &PropertyTable,
    ) -> FeatureResult<[f64; VALUES_PER_TABLE]> {
        let encoding = encode_class(sequence, table, self.policy)?;
        let mut values = [0.; VALUES_PER_TABLE];
        values[0..3].copy_from_slice(&composition(&encoding)?);
        values[3..6].copy_from_slice(&transition(&encoding)?);
        values[6..21].copy_from_slice(&distribution(&encoding)?);
        Ok(values)
    }

    /// Concatenate the per-table blocks, in registry order
    pub fn encode(&self, sequence: &AminoAcid) -> FeatureResult<Array1<f64>> {
        let mut result = Vec::with_capacity(self.dim());
        for table in self.registry.iter() {
            result.extend_from_slice(&self.encode_table(sequence, table)?);
        }
        Ok(Array1::from_vec(result))
    }

    /// Names of the values of `encode`, e.g. "charge.T13" or "polarity.D2.q50"
    pub fn value_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.dim());
        for table in self.registry.iter() {
            let name = table.name();
            names.extend((1..=3).map(|c| format!("{name}.C{c}")));
            names.extend(["12", "13", "23"].iter().map(|t| format!("{name}.T{t}")));
            for c in 1..=3 {
                names.extend(
                    DISTRIBUTION_LABELS
                        .iter()
                        .map(|d| format!("{name}.D{c}.{d}")),
                );
            }
        }
        names
    }
}

/// CTD vector of a sequence with the standard tables (504 values).
/// Residues outside the standard alphabet are an error.
///```
/// use ppifeat::{ctd, AminoAcid};
/// let v = ctd(&AminoAcid::from_string("MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQ").unwrap()).unwrap();
/// assert_eq!(v.len(), 504);
///```
pub fn ctd(sequence: &AminoAcid) -> FeatureResult<Array1<f64>> {
    Ctd::default().encode(sequence)
}
