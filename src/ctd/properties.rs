//! Physicochemical property tables: each one splits the 20 standard amino
//! acids into three ordered classes (labels 1, 2, 3).
use crate::shared::errors::{FeatureError, FeatureResult};
use crate::shared::sequence::{AMINO_ACIDS, AMINO_ACIDS_INV};
use once_cell::sync::Lazy;
use phf::phf_ordered_map;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Canonical order of the standard tables. The position of a table in this map
// is its position in the CTD vector.
pub static PROPERTY_TABLES: phf::OrderedMap<&'static str, [&'static str; 3]> = phf_ordered_map! {
    "hydrophobicity" => ["RKEDQN", "GASTPHY", "CLVIMFW"],
    "normalized_vdw_volume" => ["GASTPCD", "NVEQIL", "MHKFRYW"],
    "polarity" => ["LIFWCMVY", "PATGS", "HQRKNED"],
    "polarizability" => ["GASDT", "CPNVEQIL", "KMHFRYW"],
    "charge" => ["KR", "ANCQGHILMFPSTWYV", "DE"],
    "secondary_structure" => ["EALMQKRH", "VIYCWFT", "GNPSD"],
    "solvent_accessibility" => ["ALFGCIVW", "RKQEND", "MPSTHY"],
    "surface_tension" => ["GQDNAHR", "KTSEC", "ILMFPWYV"],
    "protein_protein_hotspot" => ["DHIKNPRWY", "EQSTGAMF", "CLV"],
    "protein_protein_propensity" => ["CDFMPQRWY", "AGHVLNST", "EIK"],
    "protein_dna_propensity_schneider" => ["GKNQRSTY", "ADEFHILVW", "CMP"],
    "protein_dna_propensity_ahmad" => ["GHKNQRSTY", "ADEFIPVW", "CLM"],
    "protein_rna_propensity_kim" => ["HKMRY", "FGILNPQSVW", "CDEAT"],
    "protein_rna_propensity_ellis" => ["HGKMRSYW", "AFINPQT", "CDELV"],
    "protein_rna_propensity_phipps" => ["HKMQRS", "ADEFGLNPVY", "CITW"],
    "protein_ligand_propensity" => ["CFHWY", "GILNMSTR", "AEDKPQV"],
    "protein_ligand_valid_propensity" => ["CFHWYM", "DGILNSTV", "AEKPQR"],
    "protein_ligand_polar_propensity" => ["DEHRY", "CFKMNQSTW", "AGILPV"],
    "molecular_weight" => ["AGS", "CDEHIKLMNQPTV", "FRWY"],
    "clogp" => ["RKDNEQH", "PYSTGACV", "WMFLI"],
    "hydrogen_bond_donor" => ["HKNQR", "DESTWY", "ACGFILMPV"],
    "hydrogen_bond_acceptor" => ["DEHNQR", "KSTWY", "ACGFILMPV"],
    "water_solubility" => ["ACGKRT", "EFHILMNPQSVW", "DY"],
    "flexibility" => ["EGKNQS", "ADHIPRTV", "CFLMWY"],
};

static STANDARD_REGISTRY: Lazy<PropertyRegistry> = Lazy::new(|| PropertyRegistry {
    tables: PROPERTY_TABLES
        .entries()
        .map(|(name, classes)| PropertyTable::from_classes(name, classes))
        .collect(),
});

/// Serialized form of a table, `{"name": ..., "classes": ["..", "..", ".."]}`
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawPropertyTable {
    name: String,
    classes: [String; 3],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPropertyTable", into = "RawPropertyTable")]
pub struct PropertyTable {
    name: String,
    classes: [String; 3],
    // class label (1..=3) of each standard amino acid, 0 if absent
    lookup: [u8; 20],
}

impl TryFrom<RawPropertyTable> for PropertyTable {
    type Error = FeatureError;
    fn try_from(raw: RawPropertyTable) -> FeatureResult<PropertyTable> {
        let classes = [
            raw.classes[0].as_str(),
            raw.classes[1].as_str(),
            raw.classes[2].as_str(),
        ];
        PropertyTable::new(&raw.name, classes)
    }
}

impl From<PropertyTable> for RawPropertyTable {
    fn from(table: PropertyTable) -> RawPropertyTable {
        RawPropertyTable {
            name: table.name,
            classes: table.classes,
        }
    }
}

impl PropertyTable {
    /// Create a table and check that the three classes partition the
    /// standard alphabet.
    ///```
    /// use ppifeat::PropertyTable;
    /// let table = PropertyTable::new("hydrophobicity", ["RKEDQN", "GASTPHY", "CLVIMFW"]).unwrap();
    /// assert_eq!(table.class_of(b'R'), Some(1));
    /// assert_eq!(table.class_of(b'W'), Some(3));
    /// assert_eq!(table.class_of(b'X'), None);
    /// // P twice, R missing
    /// assert!(PropertyTable::new("broken", ["ALFGCIVW", "PKQEND", "MPSTHY"]).is_err());
    ///```
    pub fn new(name: &str, classes: [&str; 3]) -> FeatureResult<PropertyTable> {
        let table = PropertyTable::from_classes(name, &classes);
        table.validate()?;
        Ok(table)
    }

    fn from_classes(name: &str, classes: &[&str; 3]) -> PropertyTable {
        let mut lookup = [0u8; 20];
        for (ii, class) in classes.iter().enumerate() {
            for aa in class.bytes() {
                if let Some(&idx) = AMINO_ACIDS_INV.get(&aa) {
                    // keep the first class if a residue is listed twice,
                    // `validate` reports it anyway
                    if lookup[idx] == 0 {
                        lookup[idx] = ii as u8 + 1;
                    }
                }
            }
        }
        PropertyTable {
            name: name.to_string(),
            classes: classes.map(str::to_string),
            lookup,
        }
    }

    /// Check the partition: every letter is a standard amino acid, no letter
    /// appears twice, no standard amino acid is missing.
    pub fn validate(&self) -> FeatureResult<()> {
        let invalid = |reason: String| FeatureError::InvalidTable {
            name: self.name.clone(),
            reason,
        };

        let mut seen = [false; 20];
        for (ii, class) in self.classes.iter().enumerate() {
            if class.is_empty() {
                return Err(invalid(format!("class {} is empty", ii + 1)));
            }
            for aa in class.bytes() {
                let idx = AMINO_ACIDS_INV.get(&aa).ok_or_else(|| {
                    invalid(format!(
                        "'{}' (class {}) is not a standard amino acid",
                        aa as char,
                        ii + 1
                    ))
                })?;
                if seen[*idx] {
                    return Err(invalid(format!(
                        "'{}' belongs to more than one class",
                        aa as char
                    )));
                }
                seen[*idx] = true;
            }
        }

        let missing: String = AMINO_ACIDS
            .iter()
            .zip(seen.iter())
            .filter(|(_, &s)| !s)
            .map(|(&aa, _)| aa as char)
            .collect();
        if !missing.is_empty() {
            return Err(invalid(format!("missing amino acids: {}", missing)));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &[String; 3] {
        &self.classes
    }

    /// Class label (1, 2 or 3) of a residue, `None` if the residue is in no class
    pub fn class_of(&self, aa: u8) -> Option<u8> {
        match AMINO_ACIDS_INV.get(&aa) {
            Some(&idx) if self.lookup[idx] != 0 => Some(self.lookup[idx]),
            _ => None,
        }
    }
}

/// An ordered list of property tables. The order fixes the layout
/// of the CTD vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PropertyTable>", into = "Vec<PropertyTable>")]
pub struct PropertyRegistry {
    tables: Vec<PropertyTable>,
}

impl TryFrom<Vec<PropertyTable>> for PropertyRegistry {
    type Error = FeatureError;
    fn try_from(tables: Vec<PropertyTable>) -> FeatureResult<PropertyRegistry> {
        PropertyRegistry::new(tables)
    }
}

impl From<PropertyRegistry> for Vec<PropertyTable> {
    fn from(registry: PropertyRegistry) -> Vec<PropertyTable> {
        registry.tables
    }
}

impl Default for PropertyRegistry {
    fn default() -> PropertyRegistry {
        PropertyRegistry::standard()
    }
}

impl PropertyRegistry {
    pub fn new(tables: Vec<PropertyTable>) -> FeatureResult<PropertyRegistry> {
        if tables.is_empty() {
            return Err(FeatureError::InvalidTable {
                name: "registry".to_string(),
                reason: "no property table".to_string(),
            });
        }
        for (ii, table) in tables.iter().enumerate() {
            if tables[..ii].iter().any(|t| t.name == table.name) {
                return Err(FeatureError::InvalidTable {
                    name: table.name.clone(),
                    reason: "duplicated table name".to_string(),
                });
            }
        }
        Ok(PropertyRegistry { tables })
    }

    /// The 24 standard tables, in canonical order
    pub fn standard() -> PropertyRegistry {
        STANDARD_REGISTRY.clone()
    }

    /// Load a registry from a JSON list of `{"name", "classes"}` objects
    pub fn from_file(path: &Path) -> FeatureResult<PropertyRegistry> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyTable> {
        self.tables.iter()
    }

    pub fn get(&self, name: &str) -> Option<&PropertyTable> {
        self.tables.iter().find(|t| t.name == name)
    }
}
