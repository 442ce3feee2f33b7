use crate::utils::error::{DuckError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DuckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DuckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(DuckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one entry is required".to_string(),
        });
    }
    Ok(())
}

pub fn validate_max_len<T>(field_name: &str, items: &[T], max: usize) -> Result<()> {
    if items.len() > max {
        return Err(DuckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: items.len().to_string(),
            reason: format!("At most {} entries are allowed", max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "scenario.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("duck.steps", &[1]).is_ok());
        assert!(validate_non_empty::<u8>("duck.steps", &[]).is_err());
    }

    #[test]
    fn test_validate_max_len() {
        assert!(validate_max_len("duck.steps", &[1, 2], 2).is_ok());
        assert!(validate_max_len("duck.steps", &[1, 2, 3], 2).is_err());
    }
}
