/// Amino-acid sequences and the protein records read from FASTA files
use crate::shared::errors::{FeatureError, FeatureResult};
use once_cell::sync::Lazy;
use phf::phf_map;
#[cfg(all(feature = "py_binds", feature = "pyo3"))]
use pyo3::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

// The 20 standard amino acids, in the order used by the composition descriptors
pub const AMINO_ACIDS: [u8; 20] = [
    b'A', b'C', b'D', b'E', b'F', b'G', b'H', b'I', b'K', b'L', b'M', b'N', b'P', b'Q', b'R',
    b'S', b'T', b'V', b'W', b'Y',
];

pub static AMINO_ACIDS_INV: phf::Map<u8, usize> = phf_map! {
    b'A' => 0, b'C' => 1, b'D' => 2, b'E' => 3, b'F' => 4,
    b'G' => 5, b'H' => 6, b'I' => 7, b'K' => 8, b'L' => 9,
    b'M' => 10, b'N' => 11, b'P' => 12, b'Q' => 13, b'R' => 14,
    b'S' => 15, b'T' => 16, b'V' => 17, b'W' => 18, b'Y' => 19,
};

// "sp|P12345|NAME_HUMAN" or "tr|A0A024R161|..." -> accession
static UNIPROT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:sp|tr)\|([^|\s]+)\|").unwrap());

/// Index of a standard amino acid in `AMINO_ACIDS`, `None` otherwise
pub fn amino_acid_index(aa: u8) -> Option<usize> {
    AMINO_ACIDS_INV.get(&aa).copied()
}

#[cfg_attr(all(feature = "py_binds", feature = "pyo3"), pyclass(get_all, set_all))]
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct AminoAcid {
    pub seq: Vec<u8>,
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.seq))
    }
}

impl AminoAcid {
    /// Read a sequence made only of the 20 standard amino acids.
    /// Lowercase letters are accepted and uppercased.
    ///```
    /// use ppifeat::AminoAcid;
    /// let aa = AminoAcid::from_string("rkeSTP").unwrap();
    /// assert_eq!(aa.get_string(), "RKESTP");
    /// assert!(AminoAcid::from_string("RKEX").is_err());
    /// assert!(AminoAcid::from_string("").is_err());
    ///```
    pub fn from_string(s: &str) -> FeatureResult<AminoAcid> {
        if s.is_empty() {
            return Err(FeatureError::EmptySequence);
        }
        let seq: Vec<u8> = s.bytes().map(|b| b.to_ascii_uppercase()).collect();
        if let Some((ii, &aa)) = seq
            .iter()
            .enumerate()
            .find(|(_, aa)| !AMINO_ACIDS_INV.contains_key(*aa))
        {
            return Err(FeatureError::InvalidResidue {
                residue: aa as char,
                position: ii + 1,
                table: "standard alphabet".to_string(),
            });
        }
        Ok(AminoAcid { seq })
    }

    /// Keep every (uppercased) non-whitespace character, standard or not.
    /// Unknown residues are dealt with later, by the encoders.
    pub fn from_string_lossy(s: &str) -> AminoAcid {
        AminoAcid {
            seq: s
                .bytes()
                .filter(|b| !b.is_ascii_whitespace())
                .map(|b| b.to_ascii_uppercase())
                .collect(),
        }
    }

    pub fn get_string(&self) -> String {
        self.to_string()
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// True if every residue is one of the 20 standard amino acids
    pub fn is_standard(&self) -> bool {
        self.seq.iter().all(|aa| AMINO_ACIDS_INV.contains_key(aa))
    }
}

#[cfg(all(feature = "py_binds", feature = "pyo3"))]
#[pymethods]
impl AminoAcid {
    fn __repr__(&self) -> String {
        self.get_string()
    }

    #[new]
    pub fn py_new(sequence: &str) -> PyResult<AminoAcid> {
        Ok(AminoAcid::from_string(sequence)?)
    }
}

/// One protein: an identifier and its (unvalidated) sequence
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct ProteinRecord {
    pub id: String,
    pub sequence: AminoAcid,
}

impl ProteinRecord {
    pub fn new(id: &str, sequence: &str) -> ProteinRecord {
        ProteinRecord {
            id: id.to_string(),
            sequence: AminoAcid::from_string_lossy(sequence),
        }
    }

    /// Identifiers name the feature files, so they must be a single
    /// path component.
    ///```
    /// use ppifeat::shared::ProteinRecord;
    /// assert!(ProteinRecord::check_identifier("P69905").is_ok());
    /// assert!(ProteinRecord::check_identifier("../escaped").is_err());
    /// assert!(ProteinRecord::check_identifier("a/b").is_err());
    ///```
    pub fn check_identifier(id: &str) -> FeatureResult<()> {
        if id.is_empty()
            || id == "."
            || id == ".."
            || id.contains(['/', '\\', '\0'])
        {
            return Err(FeatureError::Parse(format!(
                "Invalid protein identifier '{}'",
                id
            )));
        }
        Ok(())
    }

    /// Identifier used for a FASTA header. UniProt headers give their accession.
    ///```
    /// use ppifeat::shared::ProteinRecord;
    /// assert_eq!(ProteinRecord::identifier_from_header("sp|P69905|HBA_HUMAN Hemoglobin"), "P69905");
    /// assert_eq!(ProteinRecord::identifier_from_header("prot_1 some description"), "prot_1");
    ///```
    pub fn identifier_from_header(header: &str) -> String {
        let header = header.trim().trim_start_matches('>');
        if let Some(accession) = UNIPROT_HEADER.captures(header).and_then(|c| c.get(1)) {
            return accession.as_str().to_string();
        }
        header
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string()
    }
}
