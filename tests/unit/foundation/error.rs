use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        Bin2PngError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        Bin2PngError::EmptyPixelData
            .to_string()
            .contains("does not contain any pixel data")
    );
}

#[test]
fn missing_input_names_the_path() {
    let err = Bin2PngError::MissingInputFile(PathBuf::from("dumps/fb0.bin"));
    assert!(err.to_string().contains("dumps/fb0.bin"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = Bin2PngError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
