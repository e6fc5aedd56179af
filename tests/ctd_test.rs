mod common;

use anyhow::Result;
use common::{assert_close, TOLERANCE};
use ppifeat::ctd::{composition, distribution, transition, ClassEncoding, PROPERTY_TABLES};
use ppifeat::shared::{EncodingParameters, AMINO_ACIDS};
use ppifeat::{
    ctd, encode_class, AminoAcid, Ctd, FeatureError, PropertyRegistry, PropertyTable,
    UnknownResiduePolicy,
};
use std::io::Write;

#[test]
fn standard_tables_partition_the_alphabet() -> Result<()> {
    let registry = PropertyRegistry::standard();
    assert_eq!(registry.len(), 24);
    assert_eq!(PROPERTY_TABLES.len(), 24);
    for table in registry.iter() {
        table.validate()?;
        for &aa in AMINO_ACIDS.iter() {
            assert!(table.class_of(aa).is_some(), "{} missing in {}", aa as char, table.name());
        }
        let total: usize = table.classes().iter().map(|c| c.len()).sum();
        assert_eq!(total, 20);
    }
    Ok(())
}

#[test]
fn standard_tables_order() -> Result<()> {
    let registry = PropertyRegistry::standard();
    let names: Vec<&str> = registry.iter().map(|t| t.name()).collect();
    assert_eq!(names[0], "hydrophobicity");
    assert_eq!(names[23], "flexibility");
    let solvent = registry.get("solvent_accessibility").unwrap();
    assert_eq!(solvent.classes()[1], "RKQEND");
    Ok(())
}

#[test]
fn invalid_tables_are_rejected() -> Result<()> {
    let duplicated = PropertyTable::new("t", ["ALFGCIVW", "PKQEND", "MPSTHY"]);
    assert!(matches!(duplicated, Err(FeatureError::InvalidTable { .. })));
    let foreign = PropertyTable::new("t", ["ALFGCIVWX", "RKQEND", "MPSTHY"]);
    assert!(matches!(foreign, Err(FeatureError::InvalidTable { .. })));
    let empty = PropertyTable::new("t", ["", "ALFGCIVWRKQEND", "MPSTHY"]);
    assert!(matches!(empty, Err(FeatureError::InvalidTable { .. })));

    let table = PropertyTable::new("t", ["ALFGCIVW", "RKQEND", "MPSTHY"])?;
    assert!(PropertyRegistry::new(vec![table.clone(), table]).is_err());
    assert!(PropertyRegistry::new(vec![]).is_err());
    Ok(())
}

#[test]
fn custom_registry_from_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"[{{"name": "charge", "classes": ["KR", "ANCQGHILMFPSTWYV", "DE"]}},
            {{"name": "size", "classes": ["AGS", "CDEHIKLMNQPTV", "FRWY"]}}]"#
    )?;
    let registry = PropertyRegistry::from_file(file.path())?;
    assert_eq!(registry.len(), 2);

    let encoder = Ctd::new(registry, &EncodingParameters::default());
    let values = encoder.encode(&AminoAcid::from_string("KDAW")?)?;
    assert_eq!(values.len(), 42);
    assert_eq!(encoder.value_names().len(), 42);
    assert_eq!(encoder.value_names()[3], "charge.T12");

    let mut broken = tempfile::NamedTempFile::new()?;
    write!(broken, r#"[{{"name": "charge", "classes": ["KR", "ANCQGHILMFPSTWY", "DE"]}}]"#)?;
    assert!(PropertyRegistry::from_file(broken.path()).is_err());
    Ok(())
}

#[test]
fn hydrophobicity_fixture() -> Result<()> {
    let registry = PropertyRegistry::standard();
    let table = registry.get("hydrophobicity").unwrap();
    let encoding = encode_class(
        &AminoAcid::from_string("RKESTPHDQN")?,
        table,
        UnknownResiduePolicy::Error,
    )?;
    assert_eq!(encoding.to_string(), "1112222111");
    assert_close(&composition(&encoding)?, &[0.6, 0.4, 0.0]);
    assert_close(&transition(&encoding)?, &[2. / 9., 0., 0.]);
    assert_close(
        &distribution(&encoding)?,
        &[
            0.1, 0.2, 0.3, 0.9, 1.0, // class 1 at 1, 2, 3, 8, 9, 10
            0.4, 0.4, 0.5, 0.6, 0.7, // class 2 at 4, 5, 6, 7
            0., 0., 0., 0., 0.,
        ],
    );
    Ok(())
}

#[test]
fn transition_is_undirected() -> Result<()> {
    let e = ClassEncoding::from_string("t", "12132312")?;
    // pairs: 12 21 13 32 23 31 12
    assert_close(&transition(&e)?, &[3. / 7., 2. / 7., 2. / 7.]);
    Ok(())
}

#[test]
fn length_one_sequence() -> Result<()> {
    let e = ClassEncoding::from_string("t", "2")?;
    assert_close(&composition(&e)?, &[0., 1., 0.]);
    assert_close(&transition(&e)?, &[0., 0., 0.]);
    let d = distribution(&e)?;
    assert_close(&d[5..10], &[1.; 5]);
    assert_close(&d[0..5], &[0.; 5]);

    assert_eq!(ctd(&AminoAcid::from_string("W")?)?.len(), 504);
    Ok(())
}

#[test]
fn single_class_sequence() -> Result<()> {
    let registry = PropertyRegistry::standard();
    let table = registry.get("charge").unwrap();
    let e = encode_class(&AminoAcid::from_string("KRKR")?, table, UnknownResiduePolicy::Error)?;
    assert_close(&composition(&e)?, &[1., 0., 0.]);
    assert_close(&transition(&e)?, &[0., 0., 0.]);
    let d = distribution(&e)?;
    assert_close(&d[0..5], &[0.25, 0.25, 0.5, 0.75, 1.]);
    assert_close(&d[5..15], &[0.; 10]);
    Ok(())
}

#[test]
fn empty_encoding_is_an_error() -> Result<()> {
    let e = ClassEncoding::from_string("t", "")?;
    assert!(matches!(composition(&e), Err(FeatureError::EmptyEncoding { .. })));
    assert!(matches!(transition(&e), Err(FeatureError::EmptyEncoding { .. })));
    assert!(matches!(distribution(&e), Err(FeatureError::EmptyEncoding { .. })));

    // everything dropped
    let encoder = Ctd::new(PropertyRegistry::standard(), &EncodingParameters::skip_unknown());
    let result = encoder.encode(&AminoAcid::from_string_lossy("XXB"));
    assert!(matches!(result, Err(FeatureError::EmptyEncoding { .. })));
    Ok(())
}

#[test]
fn unknown_residue_error_policy() -> Result<()> {
    let seq = AminoAcid::from_string_lossy("RKXE");
    let registry = PropertyRegistry::standard();
    let table = registry.get("hydrophobicity").unwrap();
    match encode_class(&seq, table, UnknownResiduePolicy::Error) {
        Err(FeatureError::InvalidResidue {
            residue,
            position,
            table,
        }) => {
            assert_eq!(residue, 'X');
            assert_eq!(position, 3);
            assert_eq!(table, "hydrophobicity");
        }
        other => panic!("Unexpected result {:?}", other),
    }
    assert!(ctd(&seq).is_err());
    Ok(())
}

#[test]
fn unknown_residue_skip_policy() -> Result<()> {
    let seq = AminoAcid::from_string_lossy("RKXE");
    let registry = PropertyRegistry::standard();
    let table = registry.get("hydrophobicity").unwrap();
    let e = encode_class(&seq, table, UnknownResiduePolicy::Skip)?;
    assert_eq!(e.to_string(), "111");

    let encoder = Ctd::new(PropertyRegistry::standard(), &EncodingParameters::skip_unknown());
    let skipped = encoder.encode(&seq)?;
    let clean = ctd(&AminoAcid::from_string("RKE")?)?;
    assert_eq!(skipped, clean);
    Ok(())
}

#[test]
fn ctd_vector_properties() -> Result<()> {
    let sequences = [
        "MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQ",
        "ACDEFGHIKLMNPQRSTVWY",
        "GGGGGGGGGG",
        "PW",
    ];
    for s in sequences {
        let seq = AminoAcid::from_string(s)?;
        let v = ctd(&seq)?;
        assert_eq!(v.len(), 504);
        assert!(v.iter().all(|&x| (0. ..=1.).contains(&x)));
        // same input, same bits
        assert_eq!(v, ctd(&seq)?);

        for block in v.as_slice().unwrap().chunks(21) {
            let sum: f64 = block[0..3].iter().sum();
            assert!((sum - 1.).abs() < TOLERANCE);
            let transitions: f64 = block[3..6].iter().sum();
            assert!(transitions <= 1. + TOLERANCE);
        }
    }
    Ok(())
}

#[test]
fn ctd_block_layout() -> Result<()> {
    let seq = AminoAcid::from_string("RKESTPHDQN")?;
    let v = ctd(&seq)?;
    // first table is hydrophobicity: C then T then D
    assert_close(&v.as_slice().unwrap()[0..6], &[0.6, 0.4, 0., 2. / 9., 0., 0.]);
    assert_close(&v.as_slice().unwrap()[6..11], &[0.1, 0.2, 0.3, 0.9, 1.0]);

    let names = Ctd::default().value_names();
    assert_eq!(names.len(), 504);
    assert_eq!(names[0], "hydrophobicity.C1");
    assert_eq!(names[6], "hydrophobicity.D1.first");
    assert_eq!(names[21], "normalized_vdw_volume.C1");
    Ok(())
}
