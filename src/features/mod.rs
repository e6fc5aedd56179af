//! Feature records: every descriptor of a protein, concatenated
pub mod composition;
pub mod descriptor;
pub mod extractor;
pub mod precomputed;

pub use composition::{AminoAcidComposition, DipeptideComposition};
pub use descriptor::Descriptor;
pub use extractor::{BatchReport, DescriptorBlock, FeatureExtractor, FeatureManifest, FeatureRecord};
pub use precomputed::Precomputed;
