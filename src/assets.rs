//! Immutable asset bundles and the session readiness gate.
//!
//! An [`AssetBundle`] is a model with an optional scaler and declared schema,
//! built once and never mutated. A [`Session`] holds at most one bundle
//! behind an `Arc`; loading new assets builds a complete bundle first and
//! only then swaps it in, so a scoring call never sees a mixed set.

use crate::config::AssetPaths;
use crate::error::{Error, Result};
use crate::io::{load_model, load_scaler, load_schema};
use crate::model::{Capabilities, Classifier};
use crate::scale::Scaler;
use crate::schema::FeatureSchema;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Model, optional scaler and optional declared schema, loaded together.
#[derive(Clone)]
pub struct AssetBundle {
    model: Arc<dyn Classifier>,
    capabilities: Capabilities,
    scaler: Option<Arc<dyn Scaler>>,
    declared_schema: Option<FeatureSchema>,
    fingerprint: String,
    loaded_at: DateTime<Utc>,
}

impl AssetBundle {
    /// Start a bundle around a model.
    pub fn builder(model: Arc<dyn Classifier>) -> AssetBundleBuilder {
        AssetBundleBuilder {
            model,
            scaler: None,
            declared_schema: None,
            hasher: Sha256::new(),
            hashed_any: false,
        }
    }

    /// Load every configured artifact. Fails on the first unavailable one.
    pub fn load(paths: &AssetPaths) -> Result<Self> {
        let model = load_model(&paths.model)?;
        let mut builder = Self::builder(model.value).fingerprint_bytes(&model.bytes);

        if let Some(path) = &paths.scaler {
            let scaler = load_scaler(path)?;
            builder = builder.scaler(scaler.value).fingerprint_bytes(&scaler.bytes);
        }

        if let Some(path) = &paths.schema {
            let schema = load_schema(path)?;
            builder = builder.fingerprint_bytes(&schema.bytes);
            if let Some(schema) = schema.value {
                builder = builder.schema(schema);
            }
        }

        let bundle = builder.build();
        info!(
            model = bundle.model.name(),
            capabilities = %bundle.capabilities.describe(),
            scaler = bundle.scaler.as_ref().map(|s| s.name()).unwrap_or("none"),
            fingerprint = %bundle.short_fingerprint(),
            "assets loaded"
        );
        Ok(bundle)
    }

    pub fn model(&self) -> &dyn Classifier {
        self.model.as_ref()
    }

    /// Capabilities resolved when the bundle was built.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn scaler(&self) -> Option<&dyn Scaler> {
        self.scaler.as_deref()
    }

    pub fn declared_schema(&self) -> Option<&FeatureSchema> {
        self.declared_schema.as_ref()
    }

    /// SHA-256 over the artifact bytes (hex).
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// First 12 hex digits of the fingerprint.
    pub fn short_fingerprint(&self) -> &str {
        self.fingerprint.get(..12).unwrap_or(&self.fingerprint)
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl fmt::Debug for AssetBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetBundle")
            .field("model", &self.model.name())
            .field("capabilities", &self.capabilities)
            .field("scaler", &self.scaler.as_ref().map(|s| s.name()))
            .field("declared_schema", &self.declared_schema)
            .field("fingerprint", &self.short_fingerprint())
            .finish()
    }
}

/// Builder for [`AssetBundle`].
pub struct AssetBundleBuilder {
    model: Arc<dyn Classifier>,
    scaler: Option<Arc<dyn Scaler>>,
    declared_schema: Option<FeatureSchema>,
    hasher: Sha256,
    hashed_any: bool,
}

impl AssetBundleBuilder {
    pub fn scaler(mut self, scaler: Arc<dyn Scaler>) -> Self {
        self.scaler = Some(scaler);
        self
    }

    pub fn schema(mut self, schema: FeatureSchema) -> Self {
        self.declared_schema = Some(schema);
        self
    }

    /// Feed raw artifact bytes into the fingerprint.
    pub fn fingerprint_bytes(mut self, bytes: &[u8]) -> Self {
        self.hasher.update(bytes);
        self.hashed_any = true;
        self
    }

    /// Freeze the bundle and resolve capabilities.
    pub fn build(self) -> AssetBundle {
        let mut hasher = self.hasher;
        if !self.hashed_any {
            // in-memory assets: fingerprint what identifies them
            hasher.update(self.model.name().as_bytes());
            hasher.update(self.model.n_features().to_le_bytes());
            if let Some(scaler) = &self.scaler {
                hasher.update(scaler.name().as_bytes());
            }
            if let Some(schema) = &self.declared_schema {
                for name in schema.iter() {
                    hasher.update(name.as_bytes());
                }
            }
        }

        AssetBundle {
            capabilities: Capabilities::of(self.model.as_ref()),
            model: self.model,
            scaler: self.scaler,
            declared_schema: self.declared_schema,
            fingerprint: hex::encode(hasher.finalize()),
            loaded_at: Utc::now(),
        }
    }
}

/// Readiness gate: scoring is only reachable once assets are ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    AssetsNotLoaded,
    AssetsReady,
}

/// Holds the current asset bundle for a scoring session.
#[derive(Debug, Default)]
pub struct Session {
    bundle: Option<Arc<AssetBundle>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn readiness(&self) -> Readiness {
        match self.bundle {
            Some(_) => Readiness::AssetsReady,
            None => Readiness::AssetsNotLoaded,
        }
    }

    /// Replace the whole bundle, returning the previous one.
    pub fn install(&mut self, bundle: AssetBundle) -> Option<Arc<AssetBundle>> {
        self.bundle.replace(Arc::new(bundle))
    }

    /// Load assets and install them. On failure the current bundle is kept.
    pub fn load(&mut self, paths: &AssetPaths) -> Result<()> {
        let bundle = AssetBundle::load(paths)?;
        self.install(bundle);
        Ok(())
    }

    /// The current bundle, or [`Error::ModelUnavailable`].
    pub fn bundle(&self) -> Result<Arc<AssetBundle>> {
        self.bundle.clone().ok_or(Error::ModelUnavailable)
    }

    /// Drop the current bundle.
    pub fn clear(&mut self) -> Option<Arc<AssetBundle>> {
        self.bundle.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LinearSvc, LogisticRegression};
    use crate::scale::StandardScaler;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_builder_resolves_capabilities_once() {
        let bundle = AssetBundle::builder(Arc::new(LinearSvc::new(vec![1.0], 0.0))).build();
        assert!(!bundle.capabilities().probability);
        assert!(bundle.scaler().is_none());
        assert_eq!(bundle.fingerprint().len(), 64);
        assert_eq!(bundle.short_fingerprint().len(), 12);
    }

    #[test]
    fn test_fingerprint_depends_on_bytes() {
        let model: Arc<dyn Classifier> = Arc::new(LinearSvc::new(vec![1.0], 0.0));
        let a = AssetBundle::builder(model.clone()).fingerprint_bytes(b"one").build();
        let b = AssetBundle::builder(model).fingerprint_bytes(b"two").build();
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_session_gate() {
        let mut session = Session::new();
        assert_eq!(session.readiness(), Readiness::AssetsNotLoaded);
        assert!(matches!(session.bundle(), Err(Error::ModelUnavailable)));

        let bundle = AssetBundle::builder(Arc::new(LinearSvc::new(vec![1.0], 0.0))).build();
        assert!(session.install(bundle).is_none());
        assert_eq!(session.readiness(), Readiness::AssetsReady);
        assert!(session.bundle().is_ok());

        session.clear();
        assert_eq!(session.readiness(), Readiness::AssetsNotLoaded);
    }

    #[test]
    fn test_swap_leaves_held_bundle_intact() {
        let mut session = Session::new();
        session.install(AssetBundle::builder(Arc::new(LinearSvc::new(vec![1.0], 0.0))).build());
        let held = session.bundle().unwrap();

        let replacement = AssetBundle::builder(Arc::new(LogisticRegression::new(vec![1.0, 2.0], 0.0)))
            .scaler(Arc::new(StandardScaler::new(vec![0.0, 0.0], vec![1.0, 1.0])))
            .build();
        let previous = session.install(replacement).unwrap();

        assert!(Arc::ptr_eq(&previous, &held));
        assert_eq!(held.model().name(), "linear_svc");
        assert!(held.scaler().is_none());
        assert_eq!(session.bundle().unwrap().model().name(), "logistic_regression");
    }

    #[test]
    fn test_load_from_files() {
        let dir = TempDir::new().unwrap();
        let model = write(
            &dir,
            "model.json",
            r#"{"kind":"logistic_regression","coefficients":[1.0,1.0],"intercept":0.0}"#,
        );
        let scaler = write(&dir, "scaler.json", r#"{"kind":"standard","mean":[0,0],"scale":[1,1]}"#);
        let schema = write(&dir, "schema.json", r#"["ODInterest","NoOfArrearDays"]"#);

        let paths = AssetPaths {
            model,
            scaler: Some(scaler),
            schema: Some(schema),
        };
        let bundle = AssetBundle::load(&paths).unwrap();
        assert!(bundle.capabilities().probability);
        assert_eq!(bundle.scaler().unwrap().name(), "standard");
        assert_eq!(bundle.declared_schema().unwrap().len(), 2);
    }

    #[test]
    fn test_failed_load_keeps_previous_bundle() {
        let mut session = Session::new();
        session.install(AssetBundle::builder(Arc::new(LinearSvc::new(vec![1.0], 0.0))).build());

        let paths = AssetPaths {
            model: PathBuf::from("/missing/model.json"),
            scaler: None,
            schema: None,
        };
        assert!(session.load(&paths).is_err());
        assert_eq!(session.bundle().unwrap().model().name(), "linear_svc");
    }
}
