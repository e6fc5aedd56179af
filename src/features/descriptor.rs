use crate::ctd::Ctd;
use crate::shared::errors::FeatureResult;
use crate::shared::sequence::ProteinRecord;
use ndarray::Array1;

// A Descriptor turns one protein into a fixed-length vector.
// - `name` identifies the block in the feature record (and in the manifest)
// - `dim` is the number of values, the same for every protein
// - `compute` must return exactly `dim` values
// Descriptors are shared between the threads of a batch, so they hold no
// mutable state.
pub trait Descriptor: Send + Sync {
    fn name(&self) -> &str;
    fn dim(&self) -> usize;
    fn compute(&self, protein: &ProteinRecord) -> FeatureResult<Array1<f64>>;
}

impl Descriptor for Ctd {
    fn name(&self) -> &str {
        "CTD"
    }
    fn dim(&self) -> usize {
        Ctd::dim(self)
    }
    fn compute(&self, protein: &ProteinRecord) -> FeatureResult<Array1<f64>> {
        self.encode(&protein.sequence)
    }
}
