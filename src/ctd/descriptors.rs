//! Composition, transition and distribution of the classes of an encoding
use crate::ctd::encoding::ClassEncoding;
use crate::shared::errors::FeatureResult;
use itertools::Itertools;

pub const CLASSES: [u8; 3] = [1, 2, 3];

// quartiles used by the distribution descriptor, in percent
const QUARTILES: [usize; 3] = [25, 50, 75];

/// Fraction of the encoding that falls into each class.
///```
/// use ppifeat::ctd::{composition, ClassEncoding};
/// let e = ClassEncoding::from_string("hydrophobicity", "1112222111").unwrap();
/// assert_eq!(composition(&e).unwrap(), [0.6, 0.4, 0.0]);
///```
pub fn composition(encoding: &ClassEncoding) -> FeatureResult<[f64; 3]> {
    encoding.ensure_not_empty()?;
    let len = encoding.len() as f64;
    Ok(CLASSES.map(|c| encoding.count(c) as f64 / len))
}

/// Rate of class switches between adjacent residues, without direction:
/// [1<->2, 1<->3, 2<->3], each divided by the number of adjacent pairs.
/// A single residue has no pair and gives zeros.
pub fn transition(encoding: &ClassEncoding) -> FeatureResult<[f64; 3]> {
    encoding.ensure_not_empty()?;
    if encoding.len() == 1 {
        return Ok([0.; 3]);
    }

    let mut counts = [0usize; 3];
    for (&a, &b) in encoding.labels.iter().tuple_windows() {
        match (a.min(b), a.max(b)) {
            (1, 2) => counts[0] += 1,
            (1, 3) => counts[1] += 1,
            (2, 3) => counts[2] += 1,
            _ => {} // same class
        }
    }
    let pairs = (encoding.len() - 1) as f64;
    Ok(counts.map(|c| c as f64 / pairs))
}

/// Where each class sits along the encoding. For each class: relative
/// position of its first occurrence, of the occurrences at rank
/// ceil(25%), ceil(50%), ceil(75%) and of the last one.
/// A class that never occurs gives five zeros.
pub fn distribution(encoding: &ClassEncoding) -> FeatureResult<[f64; 15]> {
    encoding.ensure_not_empty()?;
    let len = encoding.len() as f64;
    let mut result = [0.; 15];
    for (ii, &class) in CLASSES.iter().enumerate() {
        let positions = encoding.positions(class);
        if positions.is_empty() {
            continue;
        }
        let n = positions.len();
        // 1-based rank, clamped to [1, n]
        let at_rank = |rank: usize| positions[rank.clamp(1, n) - 1] as f64 / len;

        let block = &mut result[5 * ii..5 * ii + 5];
        block[0] = at_rank(1);
        for (jj, &q) in QUARTILES.iter().enumerate() {
            block[jj + 1] = at_rank((n * q).div_ceil(100));
        }
        block[4] = at_rank(n);
    }
    Ok(result)
}
