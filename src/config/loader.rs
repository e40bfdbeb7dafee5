//! Configuration file loading

use super::schema::ScorerSpec;
use super::validate::validate_config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Parse a scorer spec from YAML without touching the filesystem.
///
/// Relative asset paths are left as written.
pub fn parse_config(yaml: &str, origin: &Path) -> Result<ScorerSpec> {
    serde_yaml::from_str(yaml).map_err(|e| Error::Config {
        path: origin.to_path_buf(),
        message: format!("failed to parse YAML: {e}"),
    })
}

/// Load and validate a scorer spec from a YAML file.
///
/// Relative asset paths resolve against the directory holding the file.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<ScorerSpec> {
    let path = config_path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: format!("failed to read file: {e}"),
    })?;

    let mut spec = parse_config(&yaml, path)?;
    if let Some(base) = path.parent() {
        spec.resolve_paths(base);
    }

    validate_config(&spec).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("puntuar.yaml");
        fs::write(
            &path,
            r"
assets:
  model: models/random_forest.json
  scaler: models/scaler.json
schema:
  use_default: false
export:
  sheet_name: Scores
",
        )
        .unwrap();

        let spec = load_config(&path).unwrap();
        assert_eq!(spec.assets.model, dir.path().join("models/random_forest.json"));
        assert_eq!(spec.assets.scaler, Some(dir.path().join("models/scaler.json")));
        assert!(!spec.schema.use_default);
        assert_eq!(spec.export.sheet_name, "Scores");
        assert_eq!(spec.export.label_column, "Prediction");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config("/nonexistent/puntuar.yaml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert_eq!(err.code(), "E040");
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"assets: [not, a, map").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse YAML"));
    }

    #[test]
    fn test_load_rejects_invalid_settings() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"assets:\n  model: m.json\nexport:\n  sheet_name: \"a:b\"\n")
            .unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("a:b"));
    }

    #[test]
    fn test_parse_keeps_relative_paths() {
        let spec = parse_config("assets:\n  model: m.json\n", Path::new("inline")).unwrap();
        assert_eq!(spec.assets.model, PathBuf::from("m.json"));
    }
}
