use selector_builder::{PartKind, SelectorError, id, init_logger};

#[test]
fn test_rejected_parts_are_logged_to_file() {
    let path = std::env::temp_dir().join(format!("selector-builder-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&path);

    init_logger(&path).unwrap();
    assert!(init_logger(&path).is_err(), "second logger must be refused");

    let err = id("main").id("again").unwrap_err();
    assert_eq!(err, SelectorError::Duplicate(PartKind::Id));

    let contents = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert!(
        contents.contains("[DEBUG] rejected id \"again\" for selector \"#main\""),
        "unexpected log contents: {contents}"
    );
    // Accepted parts are traced, which is below the logger's level.
    assert!(!contents.contains("TRACE"));
}
