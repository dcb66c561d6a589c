use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RetroSnapError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        RetroSnapError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RetroSnapError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        RetroSnapError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(RetroSnapError::font("x").to_string().contains("font error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RetroSnapError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn only_decode_errors_report_is_decode() {
    assert!(RetroSnapError::decode("bad jpeg").is_decode());
    assert!(!RetroSnapError::render("surface").is_decode());
}
