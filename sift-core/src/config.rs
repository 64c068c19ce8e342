use std::path::Path;

use serde::Deserialize;

use crate::error::FinderError;

pub const DEFAULT_PROMPT: &str = "Search";

/// User facing knobs of a finder session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinderConfig {
    /// Title shown above the query line.
    pub prompt: String,
    /// Query applied as if typed before the first render.
    pub query: String,
    /// Upper bound on visible rows, on top of what the terminal allows.
    pub max_rows: Option<usize>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            query: String::new(),
            max_rows: None,
        }
    }
}

impl FinderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FinderError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| FinderError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_reader(std::io::BufReader::new(file)).map_err(
            |source| FinderError::ConfigParse {
                path: path.to_path_buf(),
                source,
            },
        )?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FinderError> {
        if self.max_rows == Some(0) {
            return Err(FinderError::InvalidConfig(
                "max_rows must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(yaml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = FinderConfig::default();
        assert_eq!(config.prompt, "Search");
        assert!(config.query.is_empty());
        assert_eq!(config.max_rows, None);
    }

    #[test]
    fn test_config_parsing_partial() {
        let yaml = r#"
        prompt: 'pick a query'
        max_rows: 12
        "#;

        let config: FinderConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.prompt, "pick a query");
        assert_eq!(config.max_rows, Some(12));
        assert_eq!(config.query, "");
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        let result: Result<FinderConfig, _> = serde_yaml::from_str("colour: red");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_from_file() {
        let file = write_config("query: sel\n");
        let config = FinderConfig::from_file(file.path()).unwrap();
        assert_eq!(config.query, "sel");
        assert_eq!(config.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_config_from_file_zero_rows() {
        let file = write_config("max_rows: 0\n");
        let err = FinderConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, FinderError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_from_missing_file() {
        let err = FinderConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, FinderError::ConfigIo { .. }));
        assert!(err.to_string().contains("not/here.yaml"));
    }
}
