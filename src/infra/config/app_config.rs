use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::file_schema::DEFAULT_FETCH_TIMEOUT_SECS;
use crate::app::assembler::DEFAULT_QUALIFY_THRESHOLD;
use crate::app::session::{DEFAULT_MAX_AGE, SessionOptions};
use crate::domain::ConnectionId;

pub const CONFIG_ENV_VAR: &str = "SQLHINT_CONFIG";
const APP_DIR_NAME: &str = "sqlhint";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub schema: SchemaConfig,
    pub completion: CompletionConfig,
    pub connection: ConnectionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    /// Relative paths resolve against the config file's directory.
    pub file: Option<PathBuf>,
    pub fetch_timeout_secs: u64,
    /// `0` turns off age-based refresh.
    pub max_age_secs: u64,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            file: None,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_age_secs: DEFAULT_MAX_AGE.as_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompletionConfig {
    pub qualify_threshold: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            qualify_threshold: DEFAULT_QUALIFY_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectionConfig {
    pub id: Option<String>,
    pub database: Option<String>,
}

impl AppConfig {
    /// `<config_dir>/sqlhint/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let (Some(file), Some(dir)) = (config.schema.file.as_ref(), path.parent()) {
            if file.is_relative() {
                config.schema.file = Some(dir.join(file));
            }
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// A missing file yields defaults; an unreadable or invalid one is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            max_age: (self.schema.max_age_secs > 0)
                .then(|| Duration::from_secs(self.schema.max_age_secs)),
            qualify_threshold: self.completion.qualify_threshold,
        }
    }

    pub fn connection_id(&self) -> Option<ConnectionId> {
        self.connection.id.as_deref().map(ConnectionId::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<AppConfig, ConfigError> {
        AppConfig::from_toml(content, Path::new("/etc/sqlhint/config.toml"))
    }

    mod load {
        use super::*;

        #[test]
        fn missing_file_yields_defaults() {
            let dir = TempDir::new().unwrap();

            let config = AppConfig::load_or_default(&dir.path().join("config.toml")).unwrap();

            assert_eq!(config, AppConfig::default());
        }

        #[test]
        fn load_requires_existing_file() {
            let dir = TempDir::new().unwrap();

            let result = AppConfig::load(&dir.path().join("config.toml"));

            assert!(matches!(result, Err(ConfigError::Read { .. })));
        }

        #[test]
        fn reads_file_and_resolves_schema_path() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("config.toml");
            fs::write(
                &path,
                "[schema]\nfile = \"schema.json\"\n\n[connection]\nid = \"local\"\n",
            )
            .unwrap();

            let config = AppConfig::load_or_default(&path).unwrap();

            assert_eq!(config.schema.file, Some(dir.path().join("schema.json")));
            assert_eq!(config.connection_id(), Some(ConnectionId::from("local")));
        }
    }

    mod parse {
        use super::*;

        #[test]
        fn empty_document_is_default() {
            let config = parse("").unwrap();

            assert_eq!(config.schema.fetch_timeout_secs, 10);
            assert_eq!(config.schema.max_age_secs, 300);
            assert_eq!(config.completion.qualify_threshold, 5);
            assert!(config.connection.id.is_none());
        }

        #[test]
        fn absolute_schema_path_is_kept() {
            let config = parse("[schema]\nfile = \"/data/schema.json\"").unwrap();

            assert_eq!(config.schema.file, Some(PathBuf::from("/data/schema.json")));
        }

        #[rstest]
        #[case("unknown = 1")]
        #[case("[schema]\nttl = 5")]
        #[case("[completion]\nqualify = 2")]
        fn unknown_keys_are_rejected(#[case] content: &str) {
            assert!(matches!(parse(content), Err(ConfigError::Parse { .. })));
        }

        #[test]
        fn wrong_type_is_rejected() {
            let result = parse("[schema]\nmax_age_secs = \"soon\"");

            assert!(matches!(result, Err(ConfigError::Parse { .. })));
        }
    }

    mod session_options {
        use super::*;

        #[rstest]
        #[case(0, None)]
        #[case(60, Some(Duration::from_secs(60)))]
        fn max_age_zero_disables_refresh(
            #[case] secs: u64,
            #[case] expected: Option<Duration>,
        ) {
            let config = parse(&format!(
                "[schema]\nmax_age_secs = {secs}\n[completion]\nqualify_threshold = 2"
            ))
            .unwrap();

            let options = config.session_options();

            assert_eq!(options.max_age, expected);
            assert_eq!(options.qualify_threshold, 2);
        }
    }
}
