use super::*;

#[test]
fn defaults_cover_the_three_store_sizes() {
    let c = RenderConfig::default();
    assert_eq!(c.out_dir, PathBuf::from("."));
    assert_eq!(c.font, FontPreference::Auto);
    let dims: Vec<_> = c
        .targets
        .iter()
        .map(|t| (t.name.as_str(), t.width, t.height))
        .collect();
    assert_eq!(
        dims,
        vec![("small", 250, 175), ("large", 500, 350), ("xlarge", 1000, 700)]
    );
    c.validate().unwrap();
}

#[test]
fn empty_json_is_the_default_config() {
    let c = RenderConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(c, RenderConfig::default());
}

#[test]
fn partial_json_overrides_only_given_fields() {
    let c = RenderConfig::from_reader(
        r#"{"out_dir":"art","font":"builtin","targets":[{"name":"tiny","width":100,"height":70}]}"#
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(c.out_dir, PathBuf::from("art"));
    assert_eq!(c.font, FontPreference::Builtin);
    assert_eq!(c.targets, vec![OutputTarget::new("tiny", 100, 70)]);
    assert_eq!(c.output_path(&c.targets[0]), PathBuf::from("art").join("tiny.png"));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = RenderConfig::from_reader(r#"{"outdir":"x"}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, StoreartError::Serde(_)));
}

#[test]
fn missing_config_file_is_reported() {
    let err = RenderConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

fn with_targets(targets: Vec<OutputTarget>) -> RenderConfig {
    RenderConfig {
        targets,
        ..RenderConfig::default()
    }
}

#[test]
fn validation_rejects_bad_targets() {
    let bad = [
        vec![],
        vec![OutputTarget::new("", 10, 10)],
        vec![OutputTarget::new("a/b", 10, 10)],
        vec![OutputTarget::new("a\\b", 10, 10)],
        vec![OutputTarget::new("..", 10, 10)],
        vec![OutputTarget::new("zero", 0, 10)],
        vec![OutputTarget::new("huge", 70_000, 10)],
        vec![OutputTarget::new("dup", 10, 10), OutputTarget::new("dup", 20, 20)],
    ];
    for targets in bad {
        let c = with_targets(targets.clone());
        assert!(
            matches!(c.validate(), Err(StoreartError::Validation(_))),
            "{targets:?} should be rejected"
        );
    }
}

#[test]
fn target_errors_name_the_target() {
    let err = OutputTarget::new("wide", 0, 5).canvas().unwrap_err();
    assert!(err.to_string().contains("'wide'"));
}

#[test]
fn retain_targets_filters_in_order() {
    let mut c = RenderConfig::default();
    c.retain_targets(&["xlarge".to_string(), "small".to_string()])
        .unwrap();
    let names: Vec<_> = c.targets.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["small", "xlarge"]);

    let mut all = RenderConfig::default();
    all.retain_targets(&[]).unwrap();
    assert_eq!(all.targets.len(), 3);

    let err = RenderConfig::default()
        .retain_targets(&["medium".to_string()])
        .unwrap_err();
    assert!(err.to_string().contains("medium"));
}
