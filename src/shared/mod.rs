//! Functionalities shared by all the descriptors (sequences, parameters, I/O)
pub mod errors;
pub mod parameters;
pub mod parser;
pub mod py_binding;
pub mod sequence;
pub mod utils;

pub use errors::{FeatureError, FeatureResult};
pub use parameters::{
    EncodingParameters, FeatureParameters, PrecomputedSpec, ScaledRange, Scaling,
    UnknownResiduePolicy,
};
pub use parser::{
    parse_fasta, read_fasta, read_feature_record, read_manifest, write_feature_record,
    write_manifest,
};
pub use sequence::{amino_acid_index, AminoAcid, ProteinRecord, AMINO_ACIDS};
pub use utils::Rescale;
