use anyhow::Result;
use ppifeat::shared::{ScaledRange, Scaling};
use ppifeat::{FeatureError, FeatureParameters, PrecomputedSpec, UnknownResiduePolicy};
use std::fs;

#[test]
fn default_parameters() -> Result<()> {
    let params = FeatureParameters::default();
    params.validate()?;
    assert_eq!(params.encoding.unknown_residues, UnknownResiduePolicy::Error);
    let names: Vec<&str> = params.precomputed.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["QSOrder", "SOCNumber", "APAAC"]);
    assert!(FeatureParameters::sequence_only().precomputed.is_empty());
    Ok(())
}

#[test]
fn invalid_parameters() -> Result<()> {
    let params = FeatureParameters {
        threads: Some(0),
        ..FeatureParameters::default()
    };
    assert!(matches!(
        params.validate(),
        Err(FeatureError::Configuration { .. })
    ));

    let params = FeatureParameters {
        precomputed: vec![PrecomputedSpec::apaac(), PrecomputedSpec::apaac()],
        ..FeatureParameters::default()
    };
    assert!(params.validate().is_err());

    let params = FeatureParameters {
        precomputed: vec![PrecomputedSpec::new(
            "Toy",
            4,
            Some(ScaledRange {
                start: 2,
                end: 5,
                scaling: Scaling::Symmetric,
            }),
        )],
        ..FeatureParameters::default()
    };
    assert!(params.validate().is_err());

    let params = FeatureParameters {
        precomputed: vec![PrecomputedSpec::new("Toy", 0, None)],
        ..FeatureParameters::default()
    };
    assert!(params.validate().is_err());

    let params = FeatureParameters {
        amino_acid_composition: false,
        dipeptide_composition: false,
        ctd: false,
        precomputed: vec![],
        ..FeatureParameters::default()
    };
    assert!(params.validate().is_err());
    Ok(())
}

#[test]
fn parameters_from_json() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.json");

    fs::write(
        &path,
        r#"{"dipeptide_composition": false, "encoding": {"unknown_residues": "skip"}, "threads": 2}"#,
    )?;
    let params = FeatureParameters::from_file(&path)?;
    assert!(!params.dipeptide_composition);
    assert!(params.ctd);
    assert_eq!(params.encoding.unknown_residues, UnknownResiduePolicy::Skip);
    assert_eq!(params.threads, Some(2));
    assert_eq!(params.precomputed.len(), 3);

    params.save(&path)?;
    assert_eq!(FeatureParameters::from_file(&path)?, params);

    fs::write(&path, r#"{"threads": 0}"#)?;
    assert!(FeatureParameters::from_file(&path).is_err());
    Ok(())
}

#[test]
fn scaled_range_check() -> Result<()> {
    PrecomputedSpec::soc_number().check_scale()?;
    PrecomputedSpec::apaac().check_scale()?;
    let spec = PrecomputedSpec::new(
        "Toy",
        3,
        Some(ScaledRange {
            start: 0,
            end: 10,
            scaling: Scaling::UnitInterval,
        }),
    );
    assert!(matches!(
        spec.check_scale(),
        Err(FeatureError::Configuration { .. })
    ));
    Ok(())
}
