use ppifeat::ProteinRecord;

#[allow(dead_code)]
pub const TOLERANCE: f64 = 1e-9;

#[cfg(test)]
#[allow(dead_code)]
pub fn assert_close(found: &[f64], expected: &[f64]) {
    assert_eq!(found.len(), expected.len());
    for (ii, (f, e)) in found.iter().zip(expected.iter()).enumerate() {
        assert!(
            (f - e).abs() < TOLERANCE,
            "value {}: found {}, expected {}",
            ii,
            f,
            e
        );
    }
}

/// A few proteins, the second one holds an unknown residue (X)
#[cfg(test)]
#[allow(dead_code)]
pub fn toy_proteins() -> Vec<ProteinRecord> {
    vec![
        ProteinRecord::new("P1", "MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQ"),
        ProteinRecord::new("P2", "MKTXAYIAK"),
        ProteinRecord::new("P3", "ACDEFGHIKLMNPQRSTVWY"),
    ]
}

#[cfg(test)]
#[allow(dead_code)]
pub const FASTA: &str = ">sp|P69905|HBA_HUMAN Hemoglobin subunit alpha
MVLSPADKTNVKAAWGKVGAHAGEYGAEALERMFLSFPTTKTYFPHF
DLSHGSAQVKGHGKKVADALTNAVAHV
>prot_2 some protein
acdefghik
";
