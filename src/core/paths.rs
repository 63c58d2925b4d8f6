use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base findreplace config directory (~/.config/findreplace/ on Unix-like systems)
pub fn findreplace() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("findreplace"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("findreplace"))
    }
}

/// Global findreplace.json config file path
pub fn findreplace_json() -> Result<PathBuf> {
    Ok(findreplace()?.join("findreplace.json"))
}

/// Expand `~` and environment variables in a user-supplied path.
pub fn expand(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).map_err(|e| {
        Error::validation_invalid_argument(
            "project",
            format!("Cannot expand path '{}': {}", raw, e),
            None,
            None,
        )
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_leaves_plain_paths_alone() {
        let path = expand("/tmp/promo.json").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/promo.json"));
    }

    #[test]
    fn config_file_lives_in_app_dir() {
        if let (Ok(dir), Ok(file)) = (findreplace(), findreplace_json()) {
            assert_eq!(file.parent(), Some(dir.as_path()));
        }
    }
}
