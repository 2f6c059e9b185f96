use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StoreartError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(StoreartError::font("x").to_string().contains("font error:"));
    assert!(
        StoreartError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        StoreartError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn encode_error_names_the_path() {
    let err = StoreartError::encode("out/small.png", "disk full");
    let msg = err.to_string();
    assert!(msg.contains("out/small.png"));
    assert!(msg.contains("disk full"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StoreartError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
