//! Per-table analysis orchestration.
//!
//! `SchemaAnalyzer` runs the column classifier, entity extractor, table
//! classifier, value sniffer, and pattern determiner over each table and
//! assembles one immutable [`TableClassification`] record per table.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::column::{classify_column_type, ColumnRole};
use super::entities::{extract_entities, EntityCandidate};
use super::pattern::{determine_pattern, Pattern};
use super::table::{classify_table, classify_table_fallback, NameClassification, TableLabel};
use super::values::{analyze_samples, ValuePatternHit};
use crate::metadata::TableMetadata;
use crate::model::{ClassifierError, DisabledClassifier, ZeroShotClassifier};

/// Classification of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnClassification {
    /// Column name.
    pub name: String,
    /// Database-specific declared type.
    #[serde(rename = "type")]
    pub declared_type: String,
    /// The coarse role the column plays.
    pub role: ColumnRole,
    /// Candidate referenced entities (empty without a model).
    pub entities: Vec<EntityCandidate>,
    /// Whether introspection reports this column as primary key.
    pub is_pk: bool,
}

/// The complete analysis result for one table.
///
/// Created once per analysis pass and never mutated afterward; the schema
/// generator consumes a slice of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableClassification {
    /// Table name as introspected (possibly schema-qualified).
    pub table_name: String,
    /// Name-derived label (node/edge/event/unknown).
    pub label: TableLabel,
    /// Confidence behind `label`; a fixed sentinel on the fallback path.
    pub confidence: f64,
    /// Structural pattern derived from keys and column signals.
    pub pattern: Pattern,
    /// Columns classified as primary key.
    pub pk_columns: Vec<String>,
    /// Columns classified as foreign key.
    pub fk_columns: Vec<String>,
    /// Per-column classifications in declaration order.
    pub columns: Vec<ColumnClassification>,
    /// Value-shape hits from the row sample.
    pub value_hits: Vec<ValuePatternHit>,
    /// Human-readable explanation of the decision.
    pub reason: String,
}

/// Per-table classification report for human review / tooling.
///
/// Same data as [`TableClassification`] under the field names the review
/// tooling expects.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub table: String,
    pub classification: TableLabel,
    pub confidence: f64,
    pub pattern: Pattern,
    pub pk_columns: Vec<String>,
    pub fk_columns: Vec<String>,
    pub columns: Vec<ColumnClassification>,
    pub value_analysis: Vec<ValuePatternHit>,
    pub reason: String,
}

impl From<&TableClassification> for ClassificationReport {
    fn from(c: &TableClassification) -> Self {
        Self {
            table: c.table_name.clone(),
            classification: c.label,
            confidence: c.confidence,
            pattern: c.pattern,
            pk_columns: c.pk_columns.clone(),
            fk_columns: c.fk_columns.clone(),
            columns: c.columns.clone(),
            value_analysis: c.value_hits.clone(),
            reason: c.reason.clone(),
        }
    }
}

impl ClassificationReport {
    /// Render the report as a readable text block.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("table: {}\n", self.table));
        out.push_str(&format!(
            "classification: {} (confidence {:.2})\n",
            self.classification, self.confidence
        ));
        out.push_str(&format!("pattern: {}\n", self.pattern));
        out.push_str(&format!("primary keys: {}\n", join_or_dash(&self.pk_columns)));
        out.push_str(&format!("foreign keys: {}\n", join_or_dash(&self.fk_columns)));
        out.push_str("columns:\n");
        for col in &self.columns {
            out.push_str(&format!(
                "  {} {} ({})",
                col.name, col.role, col.declared_type
            ));
            for entity in &col.entities {
                out.push_str(&format!(" -> {} ({:.2})", entity.name, entity.confidence));
            }
            out.push('\n');
        }
        if self.value_analysis.is_empty() {
            out.push_str("value patterns: -\n");
        } else {
            out.push_str("value patterns:\n");
            for hit in &self.value_analysis {
                out.push_str(&format!(
                    "  {} looks like {} ({})\n",
                    hit.column, hit.pattern_kind, hit.sample_literal
                ));
            }
        }
        out.push_str(&format!("reason: {}\n", self.reason));
        out
    }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// One-line structural explanation per pattern.
fn pattern_reason(pattern: Pattern) -> &'static str {
    match pattern {
        Pattern::StandardNode => "single primary key and no foreign keys",
        Pattern::StandardEdge => "key structure links two or more entities",
        Pattern::FkNode => "single primary key with one foreign key",
        Pattern::FkEdge => "foreign keys reference multiple entities",
        Pattern::DenormalizedEdge => "origin/destination columns carry endpoint attributes inline",
        Pattern::PolymorphicEdge => "type discriminator over multiple foreign keys",
        Pattern::EventEdge => "timestamp plus action columns indicate an event stream",
        Pattern::FlatTable => "no key structure detected",
    }
}

/// Orchestrates per-table analysis.
///
/// The classifier capability is injected once at construction. If a live
/// model fails at runtime, the failure is logged as a warning exactly once
/// and every later call uses the heuristic fallbacks; the load/failure is
/// never retried within a run.
pub struct SchemaAnalyzer {
    classifier: Arc<dyn ZeroShotClassifier>,
    model_down: AtomicBool,
}

impl SchemaAnalyzer {
    /// Create an analyzer backed by the given classifier capability.
    pub fn new(classifier: Arc<dyn ZeroShotClassifier>) -> Self {
        Self {
            classifier,
            model_down: AtomicBool::new(false),
        }
    }

    /// Create an analyzer that never consults a model.
    pub fn heuristic_only() -> Self {
        Self::new(Arc::new(DisabledClassifier))
    }

    fn model_usable(&self) -> bool {
        self.classifier.is_available() && !self.model_down.load(Ordering::Relaxed)
    }

    fn note_model_failure(&self, err: &ClassifierError) {
        if !self.model_down.swap(true, Ordering::Relaxed) {
            log::warn!("classification model failed, using heuristic fallbacks: {err}");
        }
    }

    /// Analyze one table into its classification record.
    ///
    /// Always completes with a best-effort answer; model failures degrade to
    /// heuristics, never to an error.
    pub async fn analyze_table(&self, table: &TableMetadata) -> TableClassification {
        let mut columns = Vec::with_capacity(table.columns.len());

        for column in &table.columns {
            // The introspected PK flag is authoritative and beats any
            // name-based foreign-key guess.
            let role = if column.is_primary_key {
                ColumnRole::PrimaryKey
            } else {
                classify_column_type(&column.name)
            };

            let entities = if role == ColumnRole::ForeignKey {
                self.column_entities(&column.name).await
            } else {
                Vec::new()
            };

            columns.push(ColumnClassification {
                name: column.name.clone(),
                declared_type: column.declared_type.clone(),
                role,
                entities,
                is_pk: column.is_primary_key,
            });
        }

        let pk_columns: Vec<String> = columns
            .iter()
            .filter(|c| c.role == ColumnRole::PrimaryKey)
            .map(|c| c.name.clone())
            .collect();
        let fk_columns: Vec<String> = columns
            .iter()
            .filter(|c| c.role == ColumnRole::ForeignKey)
            .map(|c| c.name.clone())
            .collect();

        let pattern = determine_pattern(&pk_columns, &fk_columns, &table.columns);
        let value_hits = analyze_samples(&table.sample_rows);
        let name = self.name_classification(&table.name).await;

        log::debug!(
            "{}: pattern={} label={} confidence={:.2}",
            table.name,
            pattern,
            name.label,
            name.confidence
        );

        TableClassification {
            table_name: table.name.clone(),
            label: name.label,
            confidence: name.confidence,
            pattern,
            pk_columns,
            fk_columns,
            columns,
            value_hits,
            reason: format!("{}; {}", pattern_reason(pattern), name.reason),
        }
    }

    /// Analyze a batch of tables.
    ///
    /// Tables are independent of one another; this runs them in order and
    /// collects the records for the generator.
    pub async fn analyze_tables(&self, tables: &[TableMetadata]) -> Vec<TableClassification> {
        let mut results = Vec::with_capacity(tables.len());
        for table in tables {
            results.push(self.analyze_table(table).await);
        }
        results
    }

    async fn column_entities(&self, column_name: &str) -> Vec<EntityCandidate> {
        if !self.model_usable() {
            return Vec::new();
        }
        match extract_entities(self.classifier.as_ref(), column_name).await {
            Ok(candidates) => candidates,
            Err(err) => {
                self.note_model_failure(&err);
                Vec::new()
            }
        }
    }

    async fn name_classification(&self, table_name: &str) -> NameClassification {
        if self.model_usable() {
            match classify_table(self.classifier.as_ref(), table_name).await {
                Ok(result) => return result,
                Err(err) => self.note_model_failure(&err),
            }
        }
        classify_table_fallback(table_name)
    }
}
