use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        YearDotsError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        YearDotsError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = YearDotsError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
