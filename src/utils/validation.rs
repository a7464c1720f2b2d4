use crate::utils::error::{GeoError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();

    if raw.is_empty() {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_distinct_paths(input: &Path, output: &Path) -> Result<()> {
    if input == output || same_file(input, output) {
        return Err(GeoError::ConfigValidationError {
            field: "output".to_string(),
            message: format!(
                "Output path '{}' would overwrite the input file",
                output.display()
            ),
        });
    }
    Ok(())
}

/// Resolves both paths on disk. The output may not exist yet, so its parent
/// directory is resolved instead and the file name joined back on.
fn same_file(input: &Path, output: &Path) -> bool {
    let Ok(input) = std::fs::canonicalize(input) else {
        return false;
    };

    if let Ok(output) = std::fs::canonicalize(output) {
        return output == input;
    }

    let Some(name) = output.file_name() else {
        return false;
    };
    let parent = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    std::fs::canonicalize(parent)
        .map(|dir| dir.join(name) == input)
        .unwrap_or(false)
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// View names end up inside a quoted string in the output.
pub fn validate_view_name(field_name: &str, value: &str) -> Result<()> {
    if value.contains('"') || value.contains('\n') {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "View name cannot contain quotes or line breaks".to_string(),
        });
    }
    Ok(())
}
