use reflexgen::config::GeneratorConfig;
use reflexgen::diagnostics::GenError;

#[test]
fn write_corpus_returns_written_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::with_members(3);

    let path = reflexgen::write_corpus(dir.path(), &config).unwrap();
    assert_eq!(path, dir.path().join("reflexpr_test_types.inl"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), reflexgen::generate(3).unwrap());
}

#[test]
fn write_corpus_honors_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        file_name: "fixtures.inl".to_string(),
        ..GeneratorConfig::with_members(2)
    };

    let path = reflexgen::write_corpus(dir.path(), &config).unwrap();
    assert!(path.ends_with("fixtures.inl"));
    assert!(path.exists());
}

#[test]
fn write_corpus_rejects_file_as_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    std::fs::write(&file, "").unwrap();

    let err = reflexgen::write_corpus(&file, &GeneratorConfig::default()).unwrap_err();
    assert!(matches!(err, GenError::OutputDir { .. }), "got: {err:?}");
}

#[test]
fn write_corpus_validates_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let err = reflexgen::write_corpus(dir.path(), &GeneratorConfig::with_members(0)).unwrap_err();
    assert!(matches!(err, GenError::Config { .. }));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn write_failure_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory squatting on the target name makes the write fail.
    std::fs::create_dir(dir.path().join("reflexpr_test_types.inl")).unwrap();

    let err = reflexgen::write_corpus(dir.path(), &GeneratorConfig::default()).unwrap_err();
    match err {
        GenError::Io { path, .. } => assert!(path.ends_with("reflexpr_test_types.inl")),
        other => panic!("expected io error, got {other:?}"),
    }
}
