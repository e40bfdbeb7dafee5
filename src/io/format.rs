//! Artifact serialization formats

use std::path::Path;

/// Text formats an artifact can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// JSON (`.json`)
    Json,
    /// YAML (`.yaml`, `.yml`)
    Yaml,
}

impl ArtifactFormat {
    /// Detect format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Detect format from a path; files without an extension are read as JSON.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) => Self::from_extension(ext),
            None => Some(Self::Json),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(ArtifactFormat::from_extension("JSON"), Some(ArtifactFormat::Json));
        assert_eq!(ArtifactFormat::from_extension("yml"), Some(ArtifactFormat::Yaml));
        assert_eq!(ArtifactFormat::from_extension("pkl"), None);
    }

    #[test]
    fn test_from_path_defaults_to_json() {
        assert_eq!(
            ArtifactFormat::from_path(Path::new("feature_names")),
            Some(ArtifactFormat::Json)
        );
        assert_eq!(
            ArtifactFormat::from_path(Path::new("model.yaml")),
            Some(ArtifactFormat::Yaml)
        );
        assert_eq!(ArtifactFormat::from_path(Path::new("model.pkl")), None);
    }
}
