#![warn(clippy::large_types_passed_by_value)]

pub mod ctd;
pub mod features;
pub mod shared;

pub use crate::ctd::{ctd, encode_class, ClassEncoding, Ctd, PropertyRegistry, PropertyTable};
pub use crate::features::{
    AminoAcidComposition, BatchReport, Descriptor, DipeptideComposition, FeatureExtractor,
    FeatureManifest, FeatureRecord, Precomputed,
};
pub use crate::shared::{
    AminoAcid, EncodingParameters, FeatureError, FeatureParameters, FeatureResult,
    PrecomputedSpec, ProteinRecord, UnknownResiduePolicy,
};

#[cfg(all(feature = "py_binds", feature = "pyo3"))]
use kdam::set_notebook;

#[cfg(all(feature = "py_binds", feature = "pyo3"))]
use pyo3::prelude::*;

#[cfg(all(feature = "py_binds", feature = "pyo3"))]
use rayon::ThreadPoolBuilder;

/// Set the number of threads (if not run: all of them)
#[cfg(all(feature = "py_binds", feature = "pyo3"))]
#[pyfunction]
fn set_number_threads(num_threads: usize) -> PyResult<()> {
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))
}

/// Run to get notebook-compatible progress bars
#[cfg(all(feature = "py_binds", feature = "pyo3"))]
#[pyfunction]
fn notebook_mode() {
    set_notebook(true);
}

#[cfg(all(feature = "py_binds", feature = "pyo3"))]
#[pymodule]
#[pyo3(name = "_ppifeat")]
fn ppifeat_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<crate::shared::sequence::AminoAcid>()?;
    m.add_class::<crate::shared::parameters::EncodingParameters>()?;
    m.add_class::<crate::shared::parameters::UnknownResiduePolicy>()?;
    m.add_function(wrap_pyfunction!(crate::shared::py_binding::ctd_vector, m)?)?;
    m.add_function(wrap_pyfunction!(crate::shared::py_binding::encode_class, m)?)?;
    m.add_function(wrap_pyfunction!(
        crate::shared::py_binding::property_tables,
        m
    )?)?;
    m.add_function(wrap_pyfunction!(
        crate::shared::py_binding::ctd_value_names,
        m
    )?)?;
    m.add_function(wrap_pyfunction!(set_number_threads, m)?)?;
    m.add_function(wrap_pyfunction!(notebook_mode, m)?)?;
    Ok(())
}
