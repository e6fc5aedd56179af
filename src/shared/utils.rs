use crate::shared::parameters::{ScaledRange, Scaling};
use ndarray::{s, Array1, ArrayViewMut1};

const EPSILON: f64 = 1e-12;

pub trait Rescale {
    fn rescale(&mut self, scaling: Scaling);
}

impl Rescale for ArrayViewMut1<'_, f64> {
    /// Min-max rescaling. A constant vector carries no information
    /// and is mapped to zeros.
    fn rescale(&mut self, scaling: Scaling) {
        if self.is_empty() {
            return;
        }
        let min = self.fold(f64::INFINITY, |a, &b| a.min(b));
        let max = self.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        if (max - min).abs() < EPSILON {
            self.fill(0.);
            return;
        }
        match scaling {
            Scaling::UnitInterval => self.mapv_inplace(|x| (x - min) / (max - min)),
            Scaling::Symmetric => self.mapv_inplace(|x| 2. * (x - min) / (max - min) - 1.),
        }
    }
}

impl Rescale for Array1<f64> {
    fn rescale(&mut self, scaling: Scaling) {
        self.view_mut().rescale(scaling);
    }
}

/// Rescale only the `range.start..range.end` part of the vector
pub fn rescale_range(values: &mut Array1<f64>, range: &ScaledRange) {
    values
        .slice_mut(s![range.start..range.end])
        .rescale(range.scaling);
}

/// Format a vector as a single tab-separated line
pub fn to_tsv_line(values: &Array1<f64>) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<String>>()
        .join("\t")
}
