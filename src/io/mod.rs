//! Artifact loading (models, scalers, schema sidecars)

mod format;
mod load;

pub use format::ArtifactFormat;
pub use load::{load_model, load_scaler, load_schema, LoadedArtifact};
