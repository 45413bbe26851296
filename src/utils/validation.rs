use crate::utils::error::{ConvertError, Result};

pub const MAX_INDENT: usize = 16;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ConvertError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// An empty prefix would match every line and silently drop the whole score.
pub fn validate_prefixes(field_name: &str, prefixes: &[String]) -> Result<()> {
    if let Some(bad) = prefixes.iter().find(|p| p.trim().is_empty()) {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: bad.clone(),
            reason: "Ignored line prefixes cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
