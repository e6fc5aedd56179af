#[cfg(all(feature = "py_binds", feature = "pyo3"))]
use crate::ctd::{self, PropertyRegistry};
#[cfg(all(feature = "py_binds", feature = "pyo3"))]
use crate::shared::parameters::{EncodingParameters, UnknownResiduePolicy};
#[cfg(all(feature = "py_binds", feature = "pyo3"))]
use crate::shared::sequence::AminoAcid;
#[cfg(all(feature = "py_binds", feature = "pyo3"))]
use numpy::{IntoPyArray, PyArray1};
#[cfg(all(feature = "py_binds", feature = "pyo3"))]
use pyo3::prelude::*;

/// CTD vector (504 values) of a sequence, with the standard property tables
#[cfg(all(feature = "py_binds", feature = "pyo3"))]
#[pyfunction]
#[pyo3(signature = (sequence, skip_unknown=false))]
pub fn ctd_vector(py: Python, sequence: &str, skip_unknown: bool) -> PyResult<Py<PyArray1<f64>>> {
    let params = match skip_unknown {
        true => EncodingParameters::skip_unknown(),
        false => EncodingParameters::default(),
    };
    let encoder = ctd::Ctd::new(PropertyRegistry::standard(), &params);
    let values = encoder.encode(&AminoAcid::from_string_lossy(sequence))?;
    Ok(values.into_pyarray_bound(py).unbind())
}

/// Class labels (1, 2, 3) of a sequence for one of the standard tables
#[cfg(all(feature = "py_binds", feature = "pyo3"))]
#[pyfunction]
#[pyo3(signature = (sequence, table, policy=UnknownResiduePolicy::Error))]
pub fn encode_class(sequence: &str, table: &str, policy: UnknownResiduePolicy) -> PyResult<String> {
    let registry = PropertyRegistry::standard();
    let table = registry.get(table).ok_or_else(|| {
        pyo3::exceptions::PyKeyError::new_err(format!("Unknown property table {}", table))
    })?;
    let encoding = ctd::encode_class(&AminoAcid::from_string_lossy(sequence), table, policy)?;
    Ok(encoding.to_string())
}

/// Names of the standard property tables, in encoding order
#[cfg(all(feature = "py_binds", feature = "pyo3"))]
#[pyfunction]
pub fn property_tables() -> Vec<String> {
    PropertyRegistry::standard()
        .iter()
        .map(|t| t.name().to_string())
        .collect()
}

/// Names of the 504 values returned by `ctd_vector`
#[cfg(all(feature = "py_binds", feature = "pyo3"))]
#[pyfunction]
pub fn ctd_value_names() -> Vec<String> {
    ctd::Ctd::default().value_names()
}
