//! Artifact loading functionality

use super::format::ArtifactFormat;
use crate::error::{AssetKind, Error, Result};
use crate::model::{Classifier, ModelArtifact};
use crate::scale::{Scaler, ScalerArtifact};
use crate::schema::FeatureSchema;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

/// A parsed artifact together with the raw bytes it came from.
///
/// The bytes feed the asset bundle fingerprint.
#[derive(Debug)]
pub struct LoadedArtifact<T> {
    pub value: T,
    pub bytes: Vec<u8>,
}

/// Read and deserialize an artifact, detecting format from the extension.
fn read_artifact<T: DeserializeOwned>(asset: AssetKind, path: &Path) -> Result<LoadedArtifact<T>> {
    let format = ArtifactFormat::from_path(path).ok_or_else(|| {
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or_default();
        Error::asset(
            asset,
            path,
            format!("unsupported file extension '{ext}' (use .json, .yaml or .yml)"),
        )
    })?;

    let bytes = std::fs::read(path).map_err(|e| Error::asset(asset, path, e))?;

    let value = match format {
        ArtifactFormat::Json => serde_json::from_slice(&bytes)
            .map_err(|e| Error::asset(asset, path, format!("JSON deserialization failed: {e}")))?,
        ArtifactFormat::Yaml => serde_yaml::from_slice(&bytes)
            .map_err(|e| Error::asset(asset, path, format!("YAML deserialization failed: {e}")))?,
    };

    Ok(LoadedArtifact { value, bytes })
}

/// Load a fitted classifier.
///
/// # Example
///
/// ```no_run
/// use puntuar::io::load_model;
///
/// let model = load_model("models/random_forest.json").expect("failed to load model");
/// println!("Loaded {} with {} features", model.value.name(), model.value.n_features());
/// ```
pub fn load_model(path: impl AsRef<Path>) -> Result<LoadedArtifact<Arc<dyn Classifier>>> {
    let path = path.as_ref();
    let loaded: LoadedArtifact<ModelArtifact> = read_artifact(AssetKind::Model, path)?;
    loaded
        .value
        .validate()
        .map_err(|e| Error::asset(AssetKind::Model, path, e))?;

    Ok(LoadedArtifact {
        value: loaded.value.into_classifier(),
        bytes: loaded.bytes,
    })
}

/// Load a fitted scaler.
pub fn load_scaler(path: impl AsRef<Path>) -> Result<LoadedArtifact<Arc<dyn Scaler>>> {
    let path = path.as_ref();
    let loaded: LoadedArtifact<ScalerArtifact> = read_artifact(AssetKind::Scaler, path)?;
    loaded
        .value
        .validate()
        .map_err(|e| Error::asset(AssetKind::Scaler, path, e))?;

    Ok(LoadedArtifact {
        value: loaded.value.into_scaler(),
        bytes: loaded.bytes,
    })
}

/// Load a feature-name sidecar (an array of strings).
///
/// An empty array counts as "not declared" and yields `None`.
pub fn load_schema(path: impl AsRef<Path>) -> Result<LoadedArtifact<Option<FeatureSchema>>> {
    let path = path.as_ref();
    let loaded: LoadedArtifact<Vec<String>> = read_artifact(AssetKind::Schema, path)?;
    let schema = FeatureSchema::from_declared(loaded.value)
        .map_err(|e| Error::asset(AssetKind::Schema, path, e))?;

    Ok(LoadedArtifact {
        value: schema,
        bytes: loaded.bytes,
    })
}
