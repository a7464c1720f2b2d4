use anyhow::Result;
use csv2geo::{convert, convert_with, ConvertEngine, ConvertOptions, GeoError, TomlConfig, ViewStyle};
use tempfile::TempDir;

const OPENING: &str = "View\"\"{\n";
const CLOSING: &str = "};\n\nmyView = PostProcessing.NbViews-1;\n\
                       View[myView].PointType=1;\nView[myView].PointSize=6;\n\
                       View[myView].LineType=1;\nView[myView].LineWidth=2;\n";

#[test]
fn test_end_to_end_conversion() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("EGI_256.csv");
    let output = temp_dir.path().join("EGI_256.geo");

    std::fs::write(
        &input,
        "1,10.5,-3.2,0.0,Fp1\n2,-10.5,-3.2,0.0,Fp2\n3,0.0,0.0,9.1,Cz\n",
    )?;

    let summary = convert(&input, &output)?;
    assert_eq!(summary.rows_written, 3);
    assert!(!summary.skipped_header);

    let content = std::fs::read_to_string(&output)?;
    let expected = format!(
        "{}SP(10.5, -3.2, 0.0){{0}};\nT3(10.5, -3.2, 0.0, 0){{\"Fp1\"}};\n\
         SP(-10.5, -3.2, 0.0){{0}};\nT3(-10.5, -3.2, 0.0, 0){{\"Fp2\"}};\n\
         SP(0.0, 0.0, 9.1){{0}};\nT3(0.0, 0.0, 9.1, 0){{\"Cz\"}};\n{}",
        OPENING, CLOSING
    );
    assert_eq!(content, expected);
    Ok(())
}

#[test]
fn test_empty_input_produces_bare_view() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("empty.csv");
    let output = temp_dir.path().join("empty.geo");
    std::fs::write(&input, "").unwrap();

    let summary = convert(&input, &output).unwrap();
    assert_eq!(summary.rows_written, 0);

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content, format!("{}{}", OPENING, CLOSING));
}

#[test]
fn test_coordinates_are_copied_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("raw.csv");
    let output = temp_dir.path().join("raw.geo");
    std::fs::write(&input, "E1,1.50,-0,1e3,E 1\n").unwrap();

    convert(&input, &output).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("SP(1.50, -0, 1e3){0};\n"));
    assert!(content.contains("T3(1.50, -0, 1e3, 0){\"E 1\"};\n"));
}

#[test]
fn test_missing_input_leaves_output_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("does_not_exist.csv");
    let output = temp_dir.path().join("out.geo");

    let err = convert(&input, &output).unwrap_err();
    assert!(matches!(err, GeoError::FileNotFound { ref path } if *path == input));
    assert!(!output.exists());

    // 既有的輸出檔也不應被截斷
    std::fs::write(&output, "previous content").unwrap();
    assert!(convert(&input, &output).is_err());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous content");
}

#[test]
fn test_unwritable_output_location() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("net.csv");
    std::fs::write(&input, "1,1,2,3,Cz\n").unwrap();
    let output = temp_dir.path().join("missing_dir").join("net.geo");

    let err = convert(&input, &output).unwrap_err();
    assert!(matches!(err, GeoError::FileNotFound { ref path } if *path == output));
}

#[test]
fn test_malformed_row_aborts_conversion() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("short.csv");
    let output = temp_dir.path().join("short.geo");
    std::fs::write(&input, "1,0.1,0.2,0.3,Fp1\n2,1.1,1.2,1.3\n3,2.1,2.2,2.3,Cz\n").unwrap();

    let err = convert(&input, &output).unwrap_err();
    assert!(matches!(err, GeoError::MalformedRow { line: 2, fields: 4 }));

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(!content.contains("Cz"));
    assert!(!content.contains("myView"));
}

#[test]
fn test_non_utf8_input_is_encoding_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("latin1.csv");
    let output = temp_dir.path().join("latin1.geo");
    // "Fp1é" 以 Latin-1 編碼
    std::fs::write(&input, b"1,0.1,0.2,0.3,Fp1\xe9\n").unwrap();

    let err = convert(&input, &output).unwrap_err();
    assert!(matches!(err, GeoError::EncodingError { .. }));
}

#[test]
fn test_skip_header_option() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("with_header.csv");
    let output = temp_dir.path().join("with_header.geo");
    std::fs::write(&input, "id,x,y,z,label\n1,1,2,3,Cz\n2,4,5,6,Pz\n").unwrap();

    let options = ConvertOptions {
        skip_header: true,
        ..ConvertOptions::default()
    };
    let summary = convert_with(&input, &output, &options).unwrap();
    assert_eq!(summary.rows_written, 2);
    assert!(summary.skipped_header);

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(!content.contains("label"));
    assert_eq!(content.matches("SP(").count(), 2);
    assert_eq!(content.matches("T3(").count(), 2);
}

#[test]
fn test_engine_with_toml_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("net.csv");
    let output = temp_dir.path().join("net.geo");
    std::fs::write(&input, "1,1,2,3,Cz\n")?;

    let toml_content = format!(
        "[convert]\ninput = '{}'\noutput = '{}'\n\n[style]\nview_name = \"EGI\"\nline_width = 4\n",
        input.display(),
        output.display()
    );
    let config = TomlConfig::from_toml_str(&toml_content)?;

    let summary = ConvertEngine::new(config).run()?;
    assert_eq!(summary.rows_written, 1);

    let content = std::fs::read_to_string(&output)?;
    assert!(content.starts_with("View\"EGI\"{\n"));
    assert!(content.ends_with("View[myView].LineWidth=4;\n"));

    let defaults = ViewStyle::default();
    assert!(content.contains(&format!("View[myView].PointSize={};\n", defaults.point_size)));
    Ok(())
}

#[test]
fn test_blank_line_aborts_conversion() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("gap.csv");
    let output = temp_dir.path().join("gap.geo");
    std::fs::write(&input, "1,0.1,0.2,0.3,Fp1\n\n2,1.1,1.2,1.3,Fp2\n")?;

    let err = convert(&input, &output).unwrap_err();
    assert!(matches!(err, GeoError::MalformedRow { line: 2, fields: 0 }));

    let content = std::fs::read_to_string(&output)?;
    assert!(content.contains("\"Fp1\""));
    assert!(!content.contains("Fp2"));
    Ok(())
}

#[test]
fn test_output_resolving_to_input_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::create_dir(temp_dir.path().join("sub"))?;
    let input = temp_dir.path().join("net.csv");
    let output = temp_dir.path().join("sub").join("..").join("net.csv");
    std::fs::write(&input, "1,1,2,3,Cz\n")?;

    let err = convert(&input, &output).unwrap_err();
    assert!(matches!(err, GeoError::ConfigValidationError { .. }));
    assert_eq!(std::fs::read_to_string(&input)?, "1,1,2,3,Cz\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_read_only_output_directory_is_permission_denied() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("net.csv");
    std::fs::write(&input, "1,1,2,3,Cz\n")?;

    let locked_dir = temp_dir.path().join("locked");
    std::fs::create_dir(&locked_dir)?;
    std::fs::set_permissions(&locked_dir, std::fs::Permissions::from_mode(0o555))?;

    // root 不受目錄權限限制，此時無法重現
    let writable_anyway = std::fs::write(locked_dir.join("check"), "").is_ok();
    let output = locked_dir.join("net.geo");
    let result = if writable_anyway {
        None
    } else {
        Some(convert(&input, &output))
    };

    std::fs::set_permissions(&locked_dir, std::fs::Permissions::from_mode(0o755))?;

    if let Some(result) = result {
        let err = result.unwrap_err();
        assert!(matches!(err, GeoError::PermissionDenied { ref path } if *path == output));
        assert!(!output.exists());
    }
    Ok(())
}
