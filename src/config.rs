use crate::models::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load settings from the file given with --config, or use defaults
///
/// Only an explicit path is read; nothing is discovered implicitly, and an
/// unreadable or invalid file is an error.
pub fn load_config(custom_path: Option<&Path>) -> Result<Config> {
    match custom_path {
        Some(path) => load_config_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn load_config_from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_custom_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
line_size = 1024
show_full_path = true
"#;
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = load_config(Some(temp_file.path())).unwrap();
        assert_eq!(config.line_size.get(), 1024);
        assert!(config.show_full_path);
        assert!(!config.ignore_warnings);
    }

    #[test]
    fn test_no_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.line_size.get(), 700);
        assert!(!config.ignore_warnings);
    }

    #[test]
    fn test_zero_line_size_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"line_size = 0\n").unwrap();

        assert!(load_config(Some(temp_file.path())).is_err());
    }

    #[test]
    fn test_missing_custom_config_is_error() {
        let err = load_config(Some(Path::new("/no/such/dir/.list_todosrc"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
