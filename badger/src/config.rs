// SPDX-License-Identifier: GPL-3.0-or-later

//! The configuration of the application.
//!
//! The configuration is loaded from a YAML file, or defaulted entirely
//! when no file is found. The file is searched in the working directory
//! first, then in the user's configuration directory.
//!
//! ```yaml
//! schema: "1.0"
//!
//! compilers:
//!   - path: /usr/bin/cc
//!     ignore: true
//!
//! output:
//!   include_preprocess: false
//!   format:
//!     command_as_array: true
//!     drop_output_field: false
//! ```

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SUPPORTED_SCHEMA_VERSION: &str = "1.0";
const CONFIG_FILE_NAME: &str = "badger.yml";

/// The application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Main {
    #[serde(default = "default_schema")]
    pub schema: String,
    #[serde(default)]
    pub compilers: Vec<Compiler>,
    #[serde(default)]
    pub output: Output,
}

impl Default for Main {
    fn default() -> Self {
        Self {
            schema: default_schema(),
            compilers: vec![],
            output: Output::default(),
        }
    }
}

/// A compiler the user wants treated specially.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Compiler {
    pub path: PathBuf,
    /// Excluded from recognition entirely when set.
    #[serde(default)]
    pub ignore: bool,
}

/// What ends up in the compilation database, and in which shape.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Output {
    /// Admit preprocess-only invocations into the database.
    #[serde(default)]
    pub include_preprocess: bool,
    #[serde(default)]
    pub format: Format,
}

/// Entry formatting switches.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Format {
    /// Emit the `arguments` array instead of a flattened `command` string.
    #[serde(default = "enabled")]
    pub command_as_array: bool,
    /// Suppress the optional `output` field.
    #[serde(default)]
    pub drop_output_field: bool,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            command_as_array: true,
            drop_output_field: false,
        }
    }
}

fn default_schema() -> String {
    String::from(SUPPORTED_SCHEMA_VERSION)
}

fn enabled() -> bool {
    true
}

/// Loads the configuration from an explicit path or a default location.
pub struct Loader;

impl Loader {
    pub fn load(path: &Option<String>) -> Result<Main, ConfigError> {
        match path {
            Some(path) => Self::from_file(Path::new(path)),
            None => match Self::find() {
                Some(path) => Self::from_file(&path),
                None => Ok(Main::default()),
            },
        }
    }

    /// The working directory, then the user's configuration directory.
    fn find() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }
        directories::ProjectDirs::from("com.github", "badger-tools", "badger")
            .map(|directories| directories.config_dir().join(CONFIG_FILE_NAME))
            .filter(|path| path.is_file())
    }

    fn from_file(path: &Path) -> Result<Main, ConfigError> {
        let file =
            File::open(path).map_err(|error| ConfigError::Io(path.to_path_buf(), error))?;
        let config: Main = serde_yml::from_reader(BufReader::new(file))?;
        if config.schema != SUPPORTED_SCHEMA_VERSION {
            return Err(ConfigError::UnsupportedSchema(config.schema));
        }
        Ok(config)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to open the configuration file {0}: {1}")]
    Io(PathBuf, std::io::Error),
    #[error("Failed to parse the configuration file: {0}")]
    Syntax(#[from] serde_yml::Error),
    #[error("Unsupported configuration schema version: {0}")]
    UnsupportedSchema(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = Main::default();

        assert_eq!(config.schema, SUPPORTED_SCHEMA_VERSION);
        assert!(config.compilers.is_empty());
        assert!(!config.output.include_preprocess);
        assert!(config.output.format.command_as_array);
        assert!(!config.output.format.drop_output_field);
    }

    #[test]
    fn test_parse_full_configuration() {
        let content = r#"
schema: "1.0"

compilers:
  - path: /usr/bin/cc
    ignore: true
  - path: /usr/local/bin/g++

output:
  include_preprocess: true
  format:
    command_as_array: false
    drop_output_field: true
"#;

        let config: Main = serde_yml::from_str(content).unwrap();

        assert_eq!(config.compilers.len(), 2);
        assert!(config.compilers[0].ignore);
        assert!(!config.compilers[1].ignore);
        assert!(config.output.include_preprocess);
        assert!(!config.output.format.command_as_array);
        assert!(config.output.format.drop_output_field);
    }

    #[test]
    fn test_parse_minimal_configuration() {
        let config: Main = serde_yml::from_str("schema: \"1.0\"").unwrap();

        assert_eq!(config, Main::default());
    }

    #[test]
    fn test_missing_file_error() {
        let result = Loader::from_file(Path::new("/nonexistent/badger.yml"));

        assert!(matches!(result, Err(ConfigError::Io(_, _))));
    }

    #[test]
    fn test_unsupported_schema() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("badger.yml");
        std::fs::write(&path, "schema: \"9.9\"\n").unwrap();

        let result = Loader::from_file(&path);

        assert!(matches!(result, Err(ConfigError::UnsupportedSchema(_))));
    }
}
