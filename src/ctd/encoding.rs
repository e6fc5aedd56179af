/// Rewrite a sequence as class labels using one property table
use crate::ctd::properties::PropertyTable;
use crate::shared::errors::{FeatureError, FeatureResult};
use crate::shared::parameters::UnknownResiduePolicy;
use crate::shared::sequence::AminoAcid;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassEncoding {
    // name of the property table that produced the encoding
    pub table: String,
    // labels in 1..=3, one per encoded residue
    pub labels: Vec<u8>,
}

impl fmt::Display for ClassEncoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for label in &self.labels {
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

impl ClassEncoding {
    /// Parse an encoding written as digits, e.g. "1112222111"
    pub fn from_string(table: &str, s: &str) -> FeatureResult<ClassEncoding> {
        let labels = s
            .bytes()
            .enumerate()
            .map(|(ii, b)| match b {
                b'1'..=b'3' => Ok(b - b'0'),
                _ => Err(FeatureError::Parse(format!(
                    "Invalid class label '{}' at position {}",
                    b as char,
                    ii + 1
                ))),
            })
            .collect::<FeatureResult<Vec<u8>>>()?;
        Ok(ClassEncoding {
            table: table.to_string(),
            labels,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of occurrences of a class
    pub fn count(&self, class: u8) -> usize {
        self.labels.iter().filter(|&&l| l == class).count()
    }

    /// 1-based positions where a class occurs
    pub fn positions(&self, class: u8) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(ii, &l)| if l == class { Some(ii + 1) } else { None })
            .collect()
    }

    pub(crate) fn ensure_not_empty(&self) -> FeatureResult<()> {
        if self.is_empty() {
            return Err(FeatureError::EmptyEncoding {
                table: self.table.clone(),
            });
        }
        Ok(())
    }
}

/// Label each residue with its class in `table`.
///```
/// use ppifeat::{encode_class, AminoAcid, PropertyRegistry, UnknownResiduePolicy};
/// let registry = PropertyRegistry::standard();
/// let table = registry.get("hydrophobicity").unwrap();
/// let seq = AminoAcid::from_string("RKESTPHDQN").unwrap();
/// let encoding = encode_class(&seq, table, UnknownResiduePolicy::Error).unwrap();
/// assert_eq!(encoding.to_string(), "1112222111");
///```
pub fn encode_class(
    sequence: &AminoAcid,
    table: &PropertyTable,
    policy: UnknownResiduePolicy,
) -> FeatureResult<ClassEncoding> {
    let mut labels = Vec::with_capacity(sequence.len());
    for (ii, &aa) in sequence.seq.iter().enumerate() {
        match (table.class_of(aa), policy) {
            (Some(label), _) => labels.push(label),
            (None, UnknownResiduePolicy::Skip) => {}
            (None, UnknownResiduePolicy::Error) => {
                return Err(FeatureError::InvalidResidue {
                    residue: aa as char,
                    position: ii + 1,
                    table: table.name().to_string(),
                })
            }
        }
    }
    Ok(ClassEncoding {
        table: table.name().to_string(),
        labels,
    })
}
