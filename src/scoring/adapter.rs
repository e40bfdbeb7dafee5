//! The scoring adapter

use super::batch::BatchReport;
use super::result::{ScoringResult, ScoringWarning};
use super::score;
use crate::align::{align, align_natural, Alignment, AlignedMatrix, AlignmentReport};
use crate::assets::AssetBundle;
use crate::data::{FeatureSource, InputRecord, Table};
use crate::error::{Error, Result};
use crate::importance::{rank_importances, FeatureImportance};
use crate::scale::scale;
use crate::schema::{resolve_schema, FeatureSchema, ResolvedSchema, SchemaSource};
use tracing::debug;

/// Scoring knobs that do not live in the bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringOptions {
    /// Schema used when neither a declaration nor the model names features
    pub fallback_schema: Option<FeatureSchema>,
}

impl ScoringOptions {
    /// No fallback schema: unresolvable inputs score in pass-through mode,
    /// or fail when a scaler is loaded.
    pub fn without_default() -> Self {
        Self {
            fallback_schema: None,
        }
    }
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            fallback_schema: Some(FeatureSchema::credit_default()),
        }
    }
}

/// Matrix ready for inference plus what happened on the way.
struct Prepared {
    matrix: AlignedMatrix,
    report: AlignmentReport,
    source: Option<SchemaSource>,
    warnings: Vec<ScoringWarning>,
}

/// Scores records and tables against one asset bundle.
#[derive(Debug)]
pub struct ScoringAdapter<'a> {
    bundle: &'a AssetBundle,
    options: ScoringOptions,
}

impl<'a> ScoringAdapter<'a> {
    pub fn new(bundle: &'a AssetBundle, options: ScoringOptions) -> Self {
        Self { bundle, options }
    }

    pub fn bundle(&self) -> &AssetBundle {
        self.bundle
    }

    /// Resolve the authoritative schema. Scaling is required exactly when the
    /// bundle carries a scaler.
    pub fn resolve_schema(&self) -> Result<ResolvedSchema> {
        resolve_schema(
            self.bundle.declared_schema(),
            self.bundle.model(),
            self.options.fallback_schema.as_ref(),
            self.bundle.scaler().is_some(),
        )
    }

    /// Score one record.
    pub fn score_record(&self, record: &InputRecord) -> Result<ScoringResult> {
        let prepared = self.prepare(record)?;
        let capabilities = self.bundle.capabilities();
        let row = score(&prepared.matrix, self.bundle.model(), capabilities)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::invalid_input("record", "produced no rows"))?;

        let importances = if capabilities.importances {
            rank_importances(self.bundle.model(), prepared.matrix.columns())
        } else {
            Vec::new()
        };

        Ok(ScoringResult {
            label: row.label,
            risk: row.risk,
            probability: row.probability,
            importances,
            warnings: prepared.warnings,
            alignment: prepared.report,
            schema_source: prepared.source,
        })
    }

    /// Score every row of a table. The table is returned inside the report
    /// unchanged so every original column can be exported.
    pub fn score_batch(&self, table: Table) -> Result<BatchReport> {
        let prepared = self.prepare(&table)?;
        let rows = score(&prepared.matrix, self.bundle.model(), self.bundle.capabilities())?;
        debug!(rows = rows.len(), "batch scored");

        Ok(BatchReport::new(
            table,
            rows,
            prepared.warnings,
            prepared.report,
            prepared.source,
        ))
    }

    /// Importances ranked against the resolved schema. Empty when the model
    /// has none or no schema can be resolved.
    pub fn importances(&self) -> Result<Vec<FeatureImportance>> {
        Ok(match self.resolve_schema()? {
            ResolvedSchema::Known { schema, .. } => rank_importances(self.bundle.model(), schema.names()),
            ResolvedSchema::Passthrough => Vec::new(),
        })
    }

    fn prepare<S: FeatureSource + ?Sized>(&self, source: &S) -> Result<Prepared> {
        let mut warnings = Vec::new();

        let (Alignment { matrix, report }, schema_source) = match self.resolve_schema()? {
            ResolvedSchema::Known { schema, source: origin } => {
                if origin == SchemaSource::Default {
                    warnings.push(ScoringWarning::DefaultSchema);
                }
                (align(source, &schema)?, Some(origin))
            }
            ResolvedSchema::Passthrough => {
                warnings.push(ScoringWarning::Passthrough);
                (align_natural(source)?, None)
            }
        };

        let outcome = scale(matrix, self.bundle.scaler());
        if let Some(failure) = outcome.failure() {
            warnings.push(ScoringWarning::ScalingFailed(failure.clone()));
        }

        Ok(Prepared {
            matrix: outcome.into_matrix(),
            report,
            source: schema_source,
            warnings,
        })
    }
}
